//! Unified API error handling
//!
//! Every failure is logged in full and answered with a generic `{"error": ...}` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::FactCheckError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Unified API error type
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Claim evaluation failed (400 for bad requests, 500 otherwise)
    #[error(transparent)]
    Evaluation(#[from] FactCheckError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Evaluation(e) => e.public_message(),
            ApiError::Internal(_) => "Internal server error",
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Evaluation(FactCheckError::BadRequest(_)) => "bad_request",
            ApiError::Evaluation(FactCheckError::UpstreamInvalid(_)) => "upstream_invalid",
            ApiError::Evaluation(FactCheckError::MalformedPayload(_)) => "malformed_payload",
            ApiError::Evaluation(FactCheckError::SchemaViolation(_)) => "schema_violation",
            ApiError::Evaluation(FactCheckError::ProviderUnavailable(_)) => "provider_unavailable",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Evaluation(FactCheckError::BadRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Evaluation(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let request_id = Uuid::new_v4().to_string();

        tracing::error!(
            error_type = self.error_type(),
            status = status.as_u16(),
            request_id = %request_id,
            message = %self,
            "API error"
        );

        HttpResponse::build(status)
            .insert_header(("x-request-id", request_id))
            .json(ErrorResponse {
                error: self.public_message().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value, bool) {
        let response = err.error_response();
        let status = response.status();
        let has_request_id = response.headers().contains_key("x-request-id");
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap(), has_request_id)
    }

    #[actix_web::test]
    async fn test_literal_messages_and_statuses() {
        let cases = [
            (
                FactCheckError::UpstreamInvalid("null".into()),
                500,
                "No valid response from AI",
            ),
            (
                FactCheckError::MalformedPayload("eof".into()),
                500,
                "Malformed JSON from AI",
            ),
            (
                FactCheckError::SchemaViolation(vec!["bad".into()]),
                500,
                "Invalid analysis from AI",
            ),
            (
                FactCheckError::ProviderUnavailable("timeout".into()),
                500,
                "AI provider unavailable",
            ),
            (
                FactCheckError::BadRequest("missing field".into()),
                400,
                "Missing or invalid prompt",
            ),
        ];

        for (err, status, message) in cases {
            let (actual_status, body, has_request_id) = body_of(ApiError::from(err)).await;
            assert_eq!(actual_status.as_u16(), status);
            assert_eq!(body, serde_json::json!({ "error": message }));
            assert!(has_request_id);
        }
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_leaked() {
        let (status, body, _) = body_of(ApiError::Internal("template exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
