//! Emotion detection: four categories scored by weighted pattern counts,
//! with negation-aware reversal and three hard override shortcuts.

use once_cell::sync::Lazy;
use regex::Regex;

use super::negation::negated_near;
use super::segment;
use crate::report::{EmotionCategory, EmotionResult, EmotionScore};

/// Only categories at or above this absolute score are retained.
const RETAIN_THRESHOLD: f32 = 0.5;
/// A negated category keeps 0.8x of its magnitude, sign-flipped.
const NEGATION_FACTOR: f32 = -0.8;

struct CategoryPatterns {
    category: EmotionCategory,
    weight: f32,
    patterns: &'static [&'static str],
}

// Scan order doubles as the dominant tie-break order (strict `>` keeps the
// earlier category on equal scores).
const CATEGORIES: &[CategoryPatterns] = &[
    CategoryPatterns {
        category: EmotionCategory::Satisfaction,
        weight: 1.0,
        patterns: &[
            r"satisfaits?",
            r"satisfaites?",
            r"contents?",
            r"contentes?",
            r"heureux|heureuse",
            r"agréable",
            r"j'apprécie|apprécié",
            r"\bravie?s?\b",
        ],
    },
    CategoryPatterns {
        category: EmotionCategory::Enthusiasm,
        weight: 2.0,
        patterns: &[
            r"j'adore",
            r"génial(e)?",
            r"fantastique",
            r"formidable",
            r"incroyable",
            r"excellent(e)?",
            r"parfait(e)?",
            r"au top",
        ],
    },
    CategoryPatterns {
        category: EmotionCategory::Frustration,
        weight: -1.5,
        patterns: &[
            r"frustrant(e)?|frustré(e)?",
            r"énervant(e)?|agaçant(e)?",
            r"horrible",
            r"\bnul(le)?\b",
            r"insupportable",
            r"déçu(e)?s?|décevant(e)?s?",
            r"difficile à utiliser",
            r"manque de fonctionnalités",
        ],
    },
    CategoryPatterns {
        category: EmotionCategory::Concern,
        weight: -0.8,
        patterns: &[
            r"inquiet|inquiète",
            r"préoccup(é|ée|ant|ante)",
            r"problèmes?",
            r"soucis?",
            r"crain(s|te)",
            r"\bbugs?\b",
            r"lenteur",
        ],
    },
];

struct Override {
    re: &'static str,
    category: EmotionCategory,
    score: f32,
    /// When true, the override only applies if no dominant was set yet.
    only_if_no_dominant: bool,
}

// Checked in priority order after the generic scan; the first applicable
// match wins and the rest are skipped.
const OVERRIDES: &[Override] = &[
    Override {
        re: r"j'adore|c'est génial|formidable",
        category: EmotionCategory::Enthusiasm,
        score: 3.0,
        only_if_no_dominant: false,
    },
    Override {
        re: r"je suis satisfait|je suis content",
        category: EmotionCategory::Satisfaction,
        score: 2.0,
        only_if_no_dominant: true,
    },
    Override {
        re: r"frustrant|difficile à utiliser|manque de fonctionnalités",
        category: EmotionCategory::Frustration,
        score: 2.5,
        only_if_no_dominant: false,
    },
];

static CATEGORY_RES: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    CATEGORIES
        .iter()
        .map(|cat| {
            cat.patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid emotion pattern"))
                .collect()
        })
        .collect()
});

static OVERRIDE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    OVERRIDES
        .iter()
        .map(|o| Regex::new(o.re).expect("valid emotion override pattern"))
        .collect()
});

/// Detect emotions in one complete text.
pub fn analyze(text: &str) -> EmotionResult {
    let normalized = segment::normalize(text);
    let mut result = EmotionResult::default();
    let mut best: f32 = 0.0;

    // Generic weighted scan.
    for (cat, res) in CATEGORIES.iter().zip(CATEGORY_RES.iter()) {
        let mut score = 0.0f32;
        for re in res {
            score += re.find_iter(&normalized).count() as f32 * cat.weight;
        }

        // One negation reversal per category, on the first construction hit.
        for pat in cat.patterns {
            if negated_near(&normalized, pat) {
                score *= NEGATION_FACTOR;
                break;
            }
        }

        if score.abs() >= RETAIN_THRESHOLD {
            result.emotions.insert(
                cat.category,
                EmotionScore {
                    score,
                    is_negated: score < 0.0,
                },
            );
            if score.abs() > best {
                best = score.abs();
                result.dominant = Some(cat.category);
            }
        }
    }

    // Hard overrides, layered on top of the generic scan: a priority-ordered
    // rule list, first match wins. An inapplicable rule (the conditional
    // satisfaction shortcut with a dominant already set) falls through to the
    // next one.
    for (ovr, re) in OVERRIDES.iter().zip(OVERRIDE_RES.iter()) {
        if ovr.only_if_no_dominant && result.dominant.is_some() {
            continue;
        }
        if re.is_match(&normalized) {
            result.emotions.insert(
                ovr.category,
                EmotionScore {
                    score: ovr.score,
                    is_negated: ovr.score < 0.0,
                },
            );
            result.dominant = Some(ovr.category);
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_retains_nothing() {
        let r = analyze("Le ciel est bleu aujourd'hui");
        assert!(r.emotions.is_empty());
        assert!(r.dominant.is_none());
    }

    #[test]
    fn jadore_overrides_to_enthusiasm_three() {
        let r = analyze("j'adore ce produit");
        assert_eq!(r.dominant, Some(EmotionCategory::Enthusiasm));
        let e = &r.emotions[&EmotionCategory::Enthusiasm];
        assert_eq!(e.score, 3.0);
        assert!(!e.is_negated);
    }

    #[test]
    fn satisfaction_override_requires_no_dominant() {
        // Generic scan retains SATISFACTION at 1.0 and sets it dominant, so
        // the conditional override is skipped and the generic score stands.
        let r = analyze("je suis content");
        assert_eq!(r.dominant, Some(EmotionCategory::Satisfaction));
    }

    #[test]
    fn enthusiasm_override_outranks_frustration() {
        // Text matching both the enthusiasm and frustration shortcuts: the
        // enthusiasm rule is higher priority, so it wins and the scan stops.
        let r = analyze("c'est génial mais difficile à utiliser");
        assert_eq!(r.dominant, Some(EmotionCategory::Enthusiasm));
        assert_eq!(r.emotions[&EmotionCategory::Enthusiasm].score, 3.0);
        // The generic frustration score stands; the skipped shortcut never
        // rewrites it.
        let f = r.emotions[&EmotionCategory::Frustration].score;
        assert!((f + 1.5).abs() < 1e-6, "got {f}");
    }

    #[test]
    fn frustration_override_applies_when_higher_priorities_miss() {
        let r = analyze("le produit manque de fonctionnalités");
        assert_eq!(r.dominant, Some(EmotionCategory::Frustration));
        assert_eq!(r.emotions[&EmotionCategory::Frustration].score, 2.5);
    }

    #[test]
    fn negation_reverses_the_category_score() {
        let r = analyze("je ne suis pas satisfait");
        let e = &r.emotions[&EmotionCategory::Satisfaction];
        assert!(e.score < 0.0);
        assert!(e.is_negated);
        assert!((e.score + 0.8).abs() < 1e-6);
    }

    #[test]
    fn frustration_weight_marks_negated() {
        let r = analyze("ce produit est décevant");
        let e = &r.emotions[&EmotionCategory::Frustration];
        assert!((e.score + 1.5).abs() < 1e-6);
        assert!(e.is_negated);
        assert_eq!(r.dominant, Some(EmotionCategory::Frustration));
    }

    #[test]
    fn dominant_takes_greatest_magnitude() {
        // ENTHUSIASM (2.0 per match) outweighs SATISFACTION (1.0 per match).
        let r = analyze("service agréable et fantastique");
        assert_eq!(r.dominant, Some(EmotionCategory::Enthusiasm));
    }
}
