//! REST endpoint evaluating a single claim

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::{AnalysisResult, FactCheckRequest};
use crate::service::{ClaimEvaluator, FactCheckError};

/// Evaluate a claim
///
/// The body is read raw so that shape errors come back in the standard error format.
#[utoipa::path(
    post,
    path = "/api/factcheck",
    request_body = FactCheckRequest,
    responses(
        (status = 200, description = "Claim evaluated", body = AnalysisResult),
        (status = 400, description = "Missing or invalid prompt", body = ErrorResponse),
        (status = 500, description = "Provider failed or returned an unusable analysis", body = ErrorResponse)
    ),
    tag = "factcheck"
)]
#[post("/api/factcheck")]
pub async fn factcheck(
    evaluator: web::Data<ClaimEvaluator>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request: FactCheckRequest = serde_json::from_slice(&body)
        .map_err(|e| FactCheckError::BadRequest(e.to_string()))?;

    let analysis = evaluator.evaluate(&request.prompt).await?;

    Ok(HttpResponse::Ok().json(analysis))
}

/// Configure fact-check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(factcheck);
}
