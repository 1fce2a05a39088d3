use axum::{
    Router,
    routing::{get, post},
};

pub mod clients;
pub mod common;
pub mod menu;
pub mod rbac;
pub mod rut;
pub mod session;
pub mod system;

/// Endpoints reachable without a session.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/api/auth/login", post(session::login))
        .route("/api/rut/validate", post(rut::validate))
        .route("/api/rut/format", post(rut::format))
}

/// Endpoints that require an authenticated caller.
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/auth/logout", post(session::logout))
        .route("/api/auth/session", get(session::current))
        .route("/api/menu", get(menu::menu))
        .route("/api/permissions", get(rbac::permissions))
        .route("/api/roles", get(rbac::roles))
        .nest("/api/clientes", clients::router())
}
