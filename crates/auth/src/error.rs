use thiserror::Error;

use crate::SessionError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("no active session")]
    Unauthenticated,

    #[error("session has expired")]
    SessionExpired,

    #[error("invalid session: {0}")]
    InvalidSession(#[from] SessionError),

    #[error("unknown role '{0}'")]
    UnknownRole(String),
}
