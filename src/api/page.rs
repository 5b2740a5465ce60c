//! Server-rendered claim page

use actix_web::{HttpResponse, get, http::header::ContentType, post, web};
use askama::Template;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::service::ClaimEvaluator;
use crate::ui::{ClaimSession, Leaderboard, PageTemplate};

/// Form body of the submit action
#[derive(Debug, Deserialize)]
pub struct ClaimForm {
    #[serde(default)]
    pub claim: String,
}

/// Empty page in the idle state
#[get("/")]
pub async fn index(leaderboard: web::Data<Leaderboard>) -> Result<HttpResponse, ApiError> {
    render(&ClaimSession::new(), &leaderboard)
}

/// Run one submit cycle and render its outcome
///
/// Every request builds a fresh `ClaimSession`, so the in-flight guard only
/// covers a single request. Double submits across requests are held off by
/// the form's `onsubmit` handler, which disables the button client-side.
#[post("/")]
pub async fn submit(
    evaluator: web::Data<ClaimEvaluator>,
    leaderboard: web::Data<Leaderboard>,
    form: web::Form<ClaimForm>,
) -> Result<HttpResponse, ApiError> {
    let mut session = ClaimSession::with_claim(form.into_inner().claim);

    if let Err(rejected) = session.submit(evaluator.get_ref()).await {
        tracing::debug!(reason = %rejected, "Claim submission ignored");
    }

    render(&session, &leaderboard)
}

fn render(session: &ClaimSession, leaderboard: &Leaderboard) -> Result<HttpResponse, ApiError> {
    let html = PageTemplate::from_session(session, leaderboard)
        .render()
        .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(submit);
}
