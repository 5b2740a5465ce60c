//! HTML view models for the claim page

use askama::Template;

use crate::model::AnalysisResult;
use crate::ui::{ClaimSession, Leaderboard};

#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub claim: String,
    /// Submit button starts enabled only for a non-blank claim
    pub can_submit: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub leaderboard: Vec<u32>,
}

/// Rendered form of an `AnalysisResult`
pub struct ResultView {
    pub probability: u8,
    pub verdict: String,
    pub key_points: Vec<String>,
    pub sources: Vec<String>,
}

impl From<&AnalysisResult> for ResultView {
    fn from(analysis: &AnalysisResult) -> Self {
        Self {
            probability: analysis.truth_probability,
            verdict: analysis.explanation.verdict.to_string(),
            key_points: analysis.explanation.key_points.clone(),
            sources: analysis.explanation.sources.clone(),
        }
    }
}

impl PageTemplate {
    pub fn from_session(session: &ClaimSession, leaderboard: &Leaderboard) -> Self {
        Self {
            claim: session.claim().to_string(),
            can_submit: session.can_submit(),
            result: session.result().map(ResultView::from),
            error: session.error().map(str::to_string),
            leaderboard: leaderboard.scores().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Explanation, Verdict};

    fn leaderboard() -> Leaderboard {
        Leaderboard::generate()
    }

    #[test]
    fn test_idle_page_has_form_and_no_result() {
        let html = PageTemplate::from_session(&ClaimSession::new(), &leaderboard())
            .render()
            .unwrap();
        assert!(html.contains("Truth Beacon"));
        assert!(html.contains(r#"name="claim""#));
        assert!(!html.contains(r#"class="result""#));
        assert!(!html.contains(r#"class="error""#));
        assert_eq!(html.matches(r#"<li class="score">"#).count(), 10);
    }

    #[test]
    fn test_submit_button_follows_claim_text() {
        let blank = ClaimSession::with_claim(" \n\t");
        let blank = PageTemplate::from_session(&blank, &leaderboard())
            .render()
            .unwrap();
        assert!(blank.contains(r#"<button type="submit" disabled>"#));

        let filled = ClaimSession::with_claim("Cats see in the dark");
        let filled = PageTemplate::from_session(&filled, &leaderboard())
            .render()
            .unwrap();
        assert!(filled.contains(r#"<button type="submit">"#));
        assert!(!filled.contains(r#"<button type="submit" disabled>"#));
    }

    #[test]
    fn test_result_renders_in_order() {
        let mut session = ClaimSession::with_claim("The Earth is flat");
        session.begin_submission().unwrap();
        session.complete(Ok(AnalysisResult {
            truth_probability: 2,
            explanation: Explanation {
                verdict: Verdict::Myth,
                key_points: vec!["one".into(), "two".into(), "three".into()],
                sources: vec!["nasa.gov".into(), "esa.int".into(), "noaa.gov".into()],
            },
        }));

        let html = PageTemplate::from_session(&session, &leaderboard())
            .render()
            .unwrap();

        assert!(html.contains(r#"<progress class="probability" max="100" value="2">"#));
        assert!(html.contains(r#"<span class="probability-value">2%</span>"#));
        assert!(html.contains(r#"<span class="verdict-badge">Myth</span>"#));
        assert_eq!(html.matches(r#"<li class="key-point">"#).count(), 3);
        let one = html.find("<li class=\"key-point\">one</li>").unwrap();
        let two = html.find("<li class=\"key-point\">two</li>").unwrap();
        let three = html.find("<li class=\"key-point\">three</li>").unwrap();
        assert!(one < two && two < three);
        let nasa = html.find(r#"<span class="source-badge">nasa.gov</span>"#).unwrap();
        let noaa = html.find(r#"<span class="source-badge">noaa.gov</span>"#).unwrap();
        assert!(nasa < noaa);
        assert!(html.contains("The Earth is flat"));
    }

    #[test]
    fn test_model_text_is_escaped() {
        let mut session = ClaimSession::with_claim("<b>claim</b>");
        session.begin_submission().unwrap();
        session.complete(Ok(AnalysisResult {
            truth_probability: 50,
            explanation: Explanation {
                verdict: Verdict::Truth,
                key_points: vec!["<script>alert(1)</script>".into(), "b".into(), "c".into()],
                sources: vec!["x".into(), "y".into(), "z".into()],
            },
        }));

        let html = PageTemplate::from_session(&session, &leaderboard())
            .render()
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(!html.contains("<b>claim</b>"));
    }
}
