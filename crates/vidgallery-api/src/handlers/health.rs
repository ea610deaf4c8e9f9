//! Liveness handler.

use axum::{response::IntoResponse, Json};

/// Liveness probe - process is running.
pub async fn alive() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Server is Alive!",
    }))
}
