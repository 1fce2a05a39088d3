//! Role/permission inspection endpoints.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use aflow_auth::{Role, permitted_modules, role_catalog};

use crate::app::errors;
use crate::context::PrincipalContext;

/// GET /api/permissions - the caller's role and its modules
pub async fn permissions(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    let role = principal.role();
    Json(serde_json::json!({
        "role": role,
        "modules": permitted_modules(role.as_str()),
    }))
}

/// GET /api/roles - every role with its modules (admin only)
pub async fn roles(Extension(principal): Extension<PrincipalContext>) -> axum::response::Response {
    if principal.role() != Role::Admin {
        return errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "only administrators can list roles",
        );
    }

    (StatusCode::OK, Json(serde_json::json!({ "roles": role_catalog() }))).into_response()
}
