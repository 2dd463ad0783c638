//! Thin HTTP surface over the analysis engine.
//!
//! The routes do nothing but pass raw UTF-8 text into `analyze_feedback` and
//! return the structured result; persistence and dashboards live elsewhere
//! and treat the response as an opaque JSON blob.

use axum::{
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use tower_http::cors::CorsLayer;

use crate::analyze::analyze_feedback;
use crate::report::FeedbackAnalysis;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/analyze/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
}

async fn analyze(Json(body): Json<AnalyzeReq>) -> Json<FeedbackAnalysis> {
    counter!("feedback_analyzed_total").increment(1);
    Json(analyze_feedback(&body.text))
}

async fn analyze_batch(Json(items): Json<Vec<AnalyzeReq>>) -> Json<Vec<FeedbackAnalysis>> {
    counter!("feedback_analyzed_total").increment(items.len() as u64);
    let out = items
        .into_iter()
        .map(|it| analyze_feedback(&it.text))
        .collect::<Vec<_>>();
    Json(out)
}
