//! report.rs — Output data model for feedback analysis.
//!
//! Shapes mirror what the survey backend persists as an opaque JSON blob and
//! what the dashboard reads back through well-known paths
//! (`overall.sentiment.score`, `overall.urgency.level`, ...). Everything here
//! is create-once-per-call and immutable afterwards.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentiment of the whole text. `score` carries the sign; `display_percentage`
/// is always the unsigned magnitude, rounded to 0..=100 for UI bars/badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub score: f32,
    pub display_percentage: u8,
}

impl SentimentResult {
    /// Build from a raw score, deriving the display percentage.
    pub fn from_score(score: f32) -> Self {
        let score = score.clamp(-1.0, 1.0);
        Self {
            score,
            display_percentage: (score.abs() * 100.0).round() as u8,
        }
    }

    /// Neutral default used when the sentiment stage fails internally.
    /// Note the 50: the zero-hit path produces 0, only the fallback shows 50.
    pub fn fallback() -> Self {
        Self {
            score: 0.0,
            display_percentage: 50,
        }
    }
}

/// The four emotion categories, in tie-breaking declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmotionCategory {
    Satisfaction,
    Enthusiasm,
    Frustration,
    Concern,
}

/// Accumulated score for one retained emotion category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionScore {
    pub score: f32,
    pub is_negated: bool,
}

/// Retained emotions plus the dominant category (if any).
/// BTreeMap keeps serialization order deterministic across calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotions: BTreeMap<EmotionCategory, EmotionScore>,
    pub dominant: Option<EmotionCategory>,
}

impl EmotionResult {
    /// Neutral default: nothing retained, no dominant.
    pub fn fallback() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    High,
    Medium,
    Low,
    Normal,
}

/// Exactly one level per call; first pattern match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyResult {
    pub level: UrgencyLevel,
}

impl UrgencyResult {
    pub fn normal() -> Self {
        Self {
            level: UrgencyLevel::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAnalysis {
    pub sentiment: SentimentResult,
    pub emotions: EmotionResult,
    pub urgency: UrgencyResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// RFC 3339 / ISO 8601 timestamp of the analysis.
    pub timestamp: String,
    pub word_count: usize,
    pub language: String,
}

impl AnalysisMetadata {
    pub fn now(word_count: usize) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            word_count,
            language: "fr".to_string(),
        }
    }
}

/// Complete analysis handed to the persistence layer.
/// `entities` is reserved for forward compatibility and is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAnalysis {
    pub overall: OverallAnalysis,
    pub metadata: AnalysisMetadata,
    pub entities: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_analysis_shape_matches_contract() {
        let mut emotions = BTreeMap::new();
        emotions.insert(
            EmotionCategory::Frustration,
            EmotionScore {
                score: -1.5,
                is_negated: true,
            },
        );

        let analysis = FeedbackAnalysis {
            overall: OverallAnalysis {
                sentiment: SentimentResult::from_score(-0.6),
                emotions: EmotionResult {
                    emotions,
                    dominant: Some(EmotionCategory::Frustration),
                },
                urgency: UrgencyResult {
                    level: UrgencyLevel::Medium,
                },
            },
            metadata: AnalysisMetadata {
                timestamp: "2026-08-28T10:00:00.000Z".to_string(),
                word_count: 5,
                language: "fr".to_string(),
            },
            entities: Vec::new(),
        };

        let v = serde_json::to_value(&analysis).unwrap();

        // Well-known paths the dashboard reads.
        let score = v["overall"]["sentiment"]["score"].as_f64().unwrap();
        assert!((score + 0.6).abs() < 1e-6, "score ~= -0.6, got {}", score);
        assert_eq!(v["overall"]["sentiment"]["displayPercentage"], 60);
        assert_eq!(v["overall"]["urgency"]["level"], "MEDIUM");
        assert_eq!(v["overall"]["emotions"]["dominant"], "FRUSTRATION");
        assert_eq!(
            v["overall"]["emotions"]["emotions"]["FRUSTRATION"]["isNegated"],
            true
        );
        assert_eq!(v["metadata"]["wordCount"], 5);
        assert_eq!(v["metadata"]["language"], "fr");
        assert_eq!(v["entities"], serde_json::json!([]));
    }

    #[test]
    fn display_percentage_is_unsigned_magnitude() {
        for s in [-1.0f32, -0.73, -0.1, 0.0, 0.1, 0.45, 1.0] {
            let r = SentimentResult::from_score(s);
            assert_eq!(r.display_percentage, (s.abs() * 100.0).round() as u8);
            assert!(r.display_percentage <= 100);
        }
    }

    #[test]
    fn fallback_defaults_are_neutral() {
        assert_eq!(SentimentResult::fallback().score, 0.0);
        assert_eq!(SentimentResult::fallback().display_percentage, 50);
        assert!(EmotionResult::fallback().emotions.is_empty());
        assert!(EmotionResult::fallback().dominant.is_none());
        assert_eq!(UrgencyResult::normal().level, UrgencyLevel::Normal);
    }
}
