use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use aflow_auth::{AuthError, Authenticator};

use crate::app::errors;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub authenticator: Authenticator,
}

/// Resolve the caller's session before any protected handler runs.
///
/// Missing, unknown and expired tokens all short-circuit with 401.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session = match extract_bearer(req.headers())
        .and_then(|token| state.authenticator.current_session(token, Utc::now()))
    {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(path = %req.uri().path(), reason = %e, "request rejected");
            return errors::auth_error_to_response(e);
        }
    };

    req.extensions_mut()
        .insert(PrincipalContext::from_session(session));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::Unauthenticated)?;

    let header = header.to_str().map_err(|_| AuthError::Unauthenticated)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthenticated)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthenticated);
    }

    Ok(token)
}
