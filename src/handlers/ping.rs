use axum::{extract::OriginalUri, response::Json};
use serde_json::{Value, json};

use crate::error::AppError;

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "msg": "Servidor operativo" }))
}

pub async fn ping_public() -> Json<Value> {
    Json(json!({ "ok": true, "msg": "pong (public)" }))
}

pub async fn ping() -> Json<Value> {
    Json(json!({ "ok": true, "msg": "pong" }))
}

// Fallback for unmatched /api/* so clients never get an HTML page.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    tracing::warn!(path = %uri.path(), "API route not found");
    AppError::NotFound("Ruta no encontrada".to_string())
}
