//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`. Use
//! `AppError` for errors and `?` so they become `HttpAppError` and render consistently
//! (status, body, logging).

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use vidgallery_core::{AppError, ErrorMetadata, LogLevel};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from vidgallery-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

/// Body deserialization failures mean the caller did not send the required
/// upload parameters; surface them with the canonical 400 message.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(body_text = %rejection.body_text(), "Rejected request body");
        HttpAppError(AppError::InvalidInput(
            "Missing required video parameters".to_string(),
        ))
    }
}

/// JSON body extractor that returns our ErrorResponse format (400 + JSON) on
/// deserialization failure, instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_invalid_input_renders_400_with_error_field() {
        let err = HttpAppError(AppError::InvalidInput(
            "Missing required video parameters".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "Missing required video parameters" })
        );
    }

    #[tokio::test]
    async fn test_not_found_renders_404() {
        let err = HttpAppError(AppError::NotFound("Video not found".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Video not found" }));
    }

    #[tokio::test]
    async fn test_database_error_body_is_generic() {
        let err = HttpAppError(AppError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Database error" }));
    }
}
