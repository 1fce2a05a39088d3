use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aflow_auth::{ModuleId, Session, User};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RutRequest {
    pub rut: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl From<Session> for LoginResponse {
    fn from(s: Session) -> Self {
        Self {
            token: s.token,
            expires_at: s.expires_at,
            user: s.user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub expires_at: DateTime<Utc>,
    pub modules: &'static [ModuleId],
}

#[derive(Debug, Serialize)]
pub struct RutValidation {
    pub rut: String,
    pub valid: bool,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct RutFormatted {
    pub rut: String,
    pub formatted: String,
}
