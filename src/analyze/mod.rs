// src/analyze/mod.rs
//! Analysis pipeline entry: composes sentiment, emotion and urgency into one
//! `FeedbackAnalysis`, fail-closed.
//!
//! The failure policy is deliberate and load-bearing: feedback analysis must
//! never block a survey submission, so each sub-analysis is guarded and falls
//! back to its neutral default instead of propagating anything to the caller.

pub mod emotion;
pub mod lexicon;
pub mod negation;
pub mod phrases;
pub mod segment;
pub mod sentiment;
pub mod urgency;

use std::panic::{catch_unwind, AssertUnwindSafe};

use metrics::counter;
use tracing::warn;

use crate::config;
use crate::report::{
    AnalysisMetadata, EmotionResult, FeedbackAnalysis, OverallAnalysis, SentimentResult,
    UrgencyResult,
};

/// Run one sub-analysis, converting an internal panic into the neutral
/// default. The panic is logged, never re-raised.
fn guarded<T>(stage: &'static str, f: impl FnOnce() -> T, fallback: T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(v) => v,
        Err(_) => {
            counter!("feedback_analysis_fallbacks_total", "stage" => stage).increment(1);
            warn!(stage, "analysis stage panicked, using neutral default");
            fallback
        }
    }
}

/// Whitespace-delimited non-empty token count over the raw text.
fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The sole public entry point: analyze one complete feedback text.
///
/// The three sub-analyses share no mutable state; the call is synchronous,
/// CPU-bound and reentrancy-safe. `entities` is reserved and always empty.
pub fn analyze_feedback(text: &str) -> FeedbackAnalysis {
    let sentiment = guarded(
        "sentiment",
        || sentiment::analyze(text),
        SentimentResult::fallback(),
    );
    let emotions = guarded("emotion", || emotion::analyze(text), EmotionResult::fallback());
    let urgency = guarded("urgency", || urgency::analyze(text), UrgencyResult::normal());

    let analysis = FeedbackAnalysis {
        overall: OverallAnalysis {
            sentiment,
            emotions,
            urgency,
        },
        metadata: AnalysisMetadata::now(word_count(text)),
        entities: Vec::new(),
    };

    dev_log_analysis(text, &analysis);
    analysis
}

/// Minimal, anonymized dev logger. Never logs raw feedback text, only a
/// short hash id plus the headline fields.
fn dev_log_analysis(text: &str, analysis: &FeedbackAnalysis) {
    if !config::dev_logging_enabled() {
        return;
    }
    let id = config::anon_hash(text);
    tracing::info!(
        target: "analysis",
        %id,
        score = analysis.overall.sentiment.score,
        urgency = ?analysis.overall.urgency.level,
        dominant = ?analysis.overall.emotions.dominant,
        word_count = analysis.metadata.word_count,
        "feedback analyzed"
    );
}
