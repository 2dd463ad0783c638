//! Score aggregation and forced-distribution calibration.
//!
//! Raw bag-of-words scores cluster near zero, so a recognized idiom forces
//! the final score into one of seven calibrated bands. The band checks are an
//! explicit ordered rule list, first match wins, negatives before positives.
//! Contrast resolution (the clause after "mais" carries the speaker's real
//! conclusion) only runs when no band fired; that shadowing is intentional
//! and preserved.

use tracing::debug;

use super::lexicon;
use super::negation;
use super::phrases::{self, Level, PhraseHit};
use super::segment;
use crate::report::SentimentResult;

/// French contrastive conjunctions. The clause after the last one wins.
const CONTRAST_MARKERS: [&str; 7] = [
    "mais",
    "cependant",
    "toutefois",
    "néanmoins",
    "pourtant",
    "en revanche",
    "par contre",
];

/// Contrast resolution requires substantial signal on both sides.
const CONTRAST_MIN_SIDE_SCORE: f32 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    pos: f32,
    neg: f32,
    pos_hits: usize,
    neg_hits: usize,
}

/// The seven forced bands, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    StrongNegative,
    ModerateNegative,
    MildNegative,
    StrongPositive,
    ModeratePositive,
    MildPositive,
}

fn has_level(hits: &[PhraseHit], level: Level) -> bool {
    hits.iter().any(|h| h.level == level)
}

/// First calibrated override among this band's hits, declaration order.
fn band_override(hits: &[PhraseHit], level: Level) -> Option<f32> {
    hits.iter()
        .filter(|h| h.level == level)
        .find_map(|h| h.calibrated)
}

/// Analyze the sentiment of one complete text.
pub fn analyze(text: &str) -> SentimentResult {
    let normalized = segment::normalize(text);

    // Per-sentence lexicon scoring with negation/intensifier resolution.
    let mut totals = Totals::default();
    for sentence in segment::split_sentences(&normalized) {
        let s = negation::score_sentence(&sentence);
        totals.pos += s.pos;
        totals.neg += s.neg;
        totals.pos_hits += s.pos_hits;
        totals.neg_hits += s.neg_hits;
    }

    // Phrase idioms count into the same totals, and set the band flags.
    let pos_phrases = phrases::match_phrases(&normalized, phrases::positive_phrases());
    let neg_phrases = phrases::match_phrases(&normalized, phrases::negative_phrases());
    for h in &pos_phrases {
        totals.pos += h.score;
        totals.pos_hits += 1;
    }
    for h in &neg_phrases {
        totals.neg += h.score;
        totals.neg_hits += 1;
    }

    // Step 1 — raw score.
    let hits = totals.pos_hits + totals.neg_hits;
    let mut score = if hits == 0 {
        0.0
    } else {
        (totals.pos - totals.neg) / (hits.max(1) as f32 * 2.0)
    };

    // Step 2 — forced categorization, first match wins.
    let band_rules = [
        (has_level(&neg_phrases, Level::Strong), Band::StrongNegative),
        (
            has_level(&neg_phrases, Level::Moderate),
            Band::ModerateNegative,
        ),
        (has_level(&neg_phrases, Level::Mild), Band::MildNegative),
        (has_level(&pos_phrases, Level::Strong), Band::StrongPositive),
        (
            has_level(&pos_phrases, Level::Moderate),
            Band::ModeratePositive,
        ),
        (has_level(&pos_phrases, Level::Mild), Band::MildPositive),
    ];
    let band = band_rules
        .iter()
        .find(|(flag, _)| *flag)
        .map(|&(_, band)| band);

    match band {
        Some(Band::StrongNegative) => {
            score = score.min(-0.7);
            if let Some(v) = band_override(&neg_phrases, Level::Strong) {
                score = v;
            }
        }
        Some(Band::ModerateNegative) => {
            score = score.clamp(-0.7, -0.4);
            if let Some(v) = band_override(&neg_phrases, Level::Moderate) {
                score = v;
            }
        }
        Some(Band::MildNegative) => {
            score = score.clamp(-0.4, -0.1);
            if let Some(v) = band_override(&neg_phrases, Level::Mild) {
                score = v;
            }
        }
        Some(Band::StrongPositive) => score = score.max(0.7),
        Some(Band::ModeratePositive) => score = score.clamp(0.4, 0.7),
        Some(Band::MildPositive) => score = score.clamp(0.1, 0.4),
        None => {
            // Step 3 — contrast resolution, only without a forced band.
            if totals.pos > CONTRAST_MIN_SIDE_SCORE && totals.neg > CONTRAST_MIN_SIDE_SCORE {
                if let Some(after) = after_last_contrast(&normalized) {
                    let after_pos = lexicon::sum_weights(after, lexicon::positive_lexicon());
                    let after_neg = lexicon::sum_weights(after, lexicon::negative_lexicon());
                    if after_pos > after_neg {
                        score = score.max(0.1);
                    } else if after_neg > after_pos {
                        score = score.min(-0.1);
                    }
                    debug!(after_pos, after_neg, "contrast clause resolved");
                }
            }
        }
    }

    // Step 4/5 — clamp and derive the display percentage.
    SentimentResult::from_score(score)
}

/// Substring after the last-occurring contrast marker, if any.
fn after_last_contrast(text: &str) -> Option<&str> {
    CONTRAST_MARKERS
        .iter()
        .filter_map(|m| text.rfind(m).map(|pos| pos + m.len()))
        .max()
        .map(|end| &text[end..])
}
