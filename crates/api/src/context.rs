use chrono::{DateTime, Utc};

use aflow_auth::{Role, Session, User};

/// Authenticated caller for a request, inserted by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    token: String,
    user: User,
    expires_at: DateTime<Utc>,
}

impl PrincipalContext {
    pub fn from_session(session: Session) -> Self {
        Self {
            token: session.token,
            user: session.user,
            expires_at: session.expires_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
