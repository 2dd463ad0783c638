//! Urgency detection: three ordered pattern lists, first match wins.
//!
//! A negated HIGH pattern anywhere short-circuits to LOW ("ce n'est pas
//! urgent" is an explicit de-escalation). Past-tense phrasing downgrades a
//! match: the problem was urgent, not is.

use once_cell::sync::Lazy;
use regex::Regex;

use super::negation::negated_near;
use super::segment;
use crate::report::{UrgencyLevel, UrgencyResult};

const HIGH_PATTERNS: &[&str] = &[
    r"urgent(e)?",
    r"immédiatement",
    r"au plus vite",
    r"critique",
    r"bloqué(e)?|bloquant(e)?",
    r"\bgrave\b",
    r"inutilisable",
    r"plus rien ne fonctionne",
];

const MEDIUM_PATTERNS: &[&str] = &[
    r"rapidement",
    r"dès que possible",
    r"assez vite",
    r"sous peu",
    r"important(e)?",
    r"gênant(e)?",
];

const LOW_PATTERNS: &[&str] = &[
    r"quand vous (pouvez|pourrez)",
    r"pas urgent",
    r"éventuellement",
    r"un jour",
    r"à l'occasion",
    r"rien de pressé",
];

/// Past-tense markers downgrade a match (substring containment).
const PAST_TENSE_MARKERS: [&str; 6] = [
    "était",
    "étaient",
    "a été",
    "ont été",
    "avait été",
    "avaient été",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid urgency pattern"))
        .collect()
}

static LEVELS: Lazy<[(UrgencyLevel, Vec<Regex>); 3]> = Lazy::new(|| {
    [
        (UrgencyLevel::High, compile(HIGH_PATTERNS)),
        (UrgencyLevel::Medium, compile(MEDIUM_PATTERNS)),
        (UrgencyLevel::Low, compile(LOW_PATTERNS)),
    ]
});

fn has_past_tense(text: &str) -> bool {
    PAST_TENSE_MARKERS.iter().any(|m| text.contains(m))
}

/// Detect the urgency level of one complete text.
pub fn analyze(text: &str) -> UrgencyResult {
    let normalized = segment::normalize(text);

    // Negated HIGH anywhere wins outright.
    if HIGH_PATTERNS.iter().any(|p| negated_near(&normalized, p)) {
        return UrgencyResult {
            level: UrgencyLevel::Low,
        };
    }

    for (level, patterns) in LEVELS.iter() {
        for re in patterns {
            if re.is_match(&normalized) {
                let level = if has_past_tense(&normalized) {
                    match level {
                        UrgencyLevel::High => UrgencyLevel::Medium,
                        _ => UrgencyLevel::Normal,
                    }
                } else {
                    *level
                };
                return UrgencyResult { level };
            }
        }
    }

    UrgencyResult::normal()
}
