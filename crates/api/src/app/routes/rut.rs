use axum::{extract::rejection::JsonRejection, response::IntoResponse, Json};

use aflow_core::rut;

use crate::app::{dto, errors};

/// POST /api/rut/validate
pub async fn validate(
    payload: Result<Json<dto::RutRequest>, JsonRejection>,
) -> axum::response::Response {
    match payload {
        Ok(Json(body)) => Json(dto::RutValidation {
            valid: rut::validate(&body.rut),
            formatted: rut::format(&body.rut),
            rut: body.rut,
        })
        .into_response(),
        Err(rejection) => errors::json_rejection_to_response(rejection),
    }
}

/// POST /api/rut/format
pub async fn format(
    payload: Result<Json<dto::RutRequest>, JsonRejection>,
) -> axum::response::Response {
    match payload {
        Ok(Json(body)) => Json(dto::RutFormatted {
            formatted: rut::format(&body.rut),
            rut: body.rut,
        })
        .into_response(),
        Err(rejection) => errors::json_rejection_to_response(rejection),
    }
}
