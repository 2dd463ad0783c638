// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod metrics;
pub mod report;

// Analysis pipeline (segmentation, lexicons, phrases, negation, calibration,
// emotion, urgency, orchestrator).
pub mod analyze;

// ---- Re-exports for stable public API ----
pub use crate::analyze::analyze_feedback;
pub use crate::api::router;
pub use crate::report::{
    EmotionCategory, EmotionResult, FeedbackAnalysis, SentimentResult, UrgencyLevel, UrgencyResult,
};
