//! OpenAPI specification endpoints

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::health::HealthStatus;
use crate::model::{AnalysisResult, Explanation, FactCheckRequest, Verdict};

#[derive(OpenApi)]
#[openapi(
    info(title = "Truth Beacon", description = "Claim fact-checking backed by a hosted LLM"),
    paths(crate::api::factcheck::factcheck, crate::api::health::liveness),
    components(schemas(
        AnalysisResult,
        Explanation,
        Verdict,
        FactCheckRequest,
        ErrorResponse,
        HealthStatus
    )),
    tags(
        (name = "factcheck", description = "Claim evaluation"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
