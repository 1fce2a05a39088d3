use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::app::{dto, errors, services::AppServices};
use crate::context::PrincipalContext;

/// POST /api/auth/login
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::LoginRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services
        .authenticator
        .sign_in(&body.email, &body.password, Utc::now())
    {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, role = %session.user.role, "login succeeded");
            (StatusCode::OK, Json(dto::LoginResponse::from(session))).into_response()
        }
        Err(e) => {
            tracing::info!(email = %body.email.trim(), "login failed");
            errors::auth_error_to_response(e)
        }
    }
}

/// POST /api/auth/logout
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> StatusCode {
    services.authenticator.sign_out(principal.token());
    tracing::info!(user_id = %principal.user().id, "logout");
    StatusCode::NO_CONTENT
}

/// GET /api/auth/session
pub async fn current(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(dto::SessionResponse {
        user: principal.user().clone(),
        expires_at: principal.expires_at(),
        modules: principal.role().modules(),
    })
}
