use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moviemate_core::error::{ApiError, ErrorEnvelope};
use moviemate_metadata::ProviderError;

/// Newtype wrapper so we can implement `IntoResponse` in this crate.
pub struct AppError(pub ApiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = ErrorEnvelope::from(&self.0);
        (status, Json(envelope)).into_response()
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

/// Provider failure → HTTP status: a provider-reported "no match" is a
/// 404 carrying the provider's message; configuration and transport
/// failures are 500s.
impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        let api = match e {
            ProviderError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        };
        Self(api)
    }
}
