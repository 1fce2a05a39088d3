use axum::{extract::Extension, response::IntoResponse, Json};

use aflow_auth::build_menu;

use crate::context::PrincipalContext;

/// GET /api/menu - grouped navigation for the caller's role.
///
/// The auth middleware has already rejected unauthenticated callers, so a
/// role with no modules still gets a (dashboard-only) menu here.
pub async fn menu(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(build_menu(principal.role().as_str()))
}
