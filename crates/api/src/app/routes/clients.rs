use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use aflow_auth::ModuleId;
use aflow_clients::NewClient;
use aflow_core::{ClientId, DomainError};

use crate::app::routes::common::require_module;
use crate::app::{errors, services::AppServices};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_client).get(list_clients))
        .route("/:id", get(get_client))
}

pub async fn register_client(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> axum::response::Response {
    if let Err(resp) = require_module(&principal, ModuleId::Clientes) {
        return resp;
    }

    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.clients.register(body, Utc::now()) {
        Ok(client) => {
            tracing::info!(client_id = %client.id, rut = %client.rut, "client registered");
            (StatusCode::CREATED, Json(client)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_clients(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = require_module(&principal, ModuleId::Clientes) {
        return resp;
    }

    let items = services.clients.list();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_client(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = require_module(&principal, ModuleId::Clientes) {
        return resp;
    }

    let id: ClientId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.clients.get(&id) {
        Some(client) => (StatusCode::OK, Json(client)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
