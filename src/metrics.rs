//! Prometheus exposition for the analysis service.

use axum::{routing::get, Router};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and describe the engine's counters.
    /// Counters themselves are incremented at the call sites (API handlers
    /// and the fail-closed orchestrator guard).
    pub fn init() -> Self {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("prometheus: install recorder");

        describe_counter!(
            "feedback_analyzed_total",
            "Number of feedback texts run through the analysis engine"
        );
        describe_counter!(
            "feedback_analysis_fallbacks_total",
            "Neutral-default substitutions after an internal stage failure"
        );

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
