use axum::http::StatusCode;

use aflow_auth::{ModuleId, has_permission};

use crate::app::errors;
use crate::context::PrincipalContext;

/// Reject callers whose role does not grant `module`.
pub fn require_module(
    principal: &PrincipalContext,
    module: ModuleId,
) -> Result<(), axum::response::Response> {
    if has_permission(principal.role().as_str(), module.as_str()) {
        return Ok(());
    }

    tracing::debug!(
        user_id = %principal.user().id,
        role = %principal.role(),
        module = %module,
        "module access denied"
    );
    Err(errors::json_error(
        StatusCode::FORBIDDEN,
        "forbidden",
        format!("role '{}' cannot access module '{}'", principal.role(), module),
    ))
}
