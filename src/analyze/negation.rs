//! Negation & intensifier resolution over lexicon hits, per sentence.
//!
//! Negation markers are matched by plain substring containment on either the
//! whole sentence or a local window around the hit (10 chars before through
//! 2 chars after). This is deliberately not word-boundary-aware; the scoring
//! tables are calibrated against that behavior and changing it would shift
//! every band.

use regex::Regex;

use super::lexicon::{self, LexiconHit};

/// Substring-matched negation markers.
const NEGATION_MARKERS: [&str; 10] = [
    "ne", "n'", "pas", "plus", "jamais", "aucun", "aucune", "non", "sans", "ni",
];

/// Intensifiers boost both accumulators once per sentence.
const INTENSIFIERS: [&str; 6] = [
    "très",
    "vraiment",
    "extrêmement",
    "totalement",
    "complètement",
    "absolument",
];

/// A negated positive hit lands in the negative accumulator at 0.8x weight;
/// a negated negative hit lands in the positive accumulator at 0.7x weight.
const FLIP_POSITIVE: f32 = 0.8;
const FLIP_NEGATIVE: f32 = 0.7;
const INTENSIFIER_BOOST: f32 = 1.3;

/// Positive/negative accumulators for one sentence, with the hit counts of
/// whichever accumulator each hit landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentenceScore {
    pub pos: f32,
    pub neg: f32,
    pub pos_hits: usize,
    pub neg_hits: usize,
}

pub fn contains_negation(text: &str) -> bool {
    NEGATION_MARKERS.iter().any(|m| text.contains(m))
}

fn contains_intensifier(text: &str) -> bool {
    INTENSIFIERS.iter().any(|m| text.contains(m))
}

/// Local context: the 10 characters preceding the matched term through the
/// 2 characters after it. Offsets are byte positions; slicing is char-safe.
fn context_window(sentence: &str, hit: &LexiconHit) -> String {
    let before: String = sentence[..hit.start]
        .chars()
        .rev()
        .take(10)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let after: String = sentence[hit.start..]
        .chars()
        .take(sentence[hit.start..hit.end].chars().count() + 2)
        .collect();
    before + &after
}

/// Score one (normalized) sentence: run both lexicons, resolve negation per
/// hit, then apply the intensifier boost once if present.
pub fn score_sentence(sentence: &str) -> SentenceScore {
    let sentence_negated = contains_negation(sentence);
    let mut score = SentenceScore::default();

    for hit in lexicon::match_terms(sentence, lexicon::positive_lexicon()) {
        let negated = sentence_negated || contains_negation(&context_window(sentence, &hit));
        if negated {
            score.neg += hit.weight * FLIP_POSITIVE;
            score.neg_hits += 1;
        } else {
            score.pos += hit.weight;
            score.pos_hits += 1;
        }
    }

    for hit in lexicon::match_terms(sentence, lexicon::negative_lexicon()) {
        let negated = sentence_negated || contains_negation(&context_window(sentence, &hit));
        if negated {
            score.pos += hit.weight * FLIP_NEGATIVE;
            score.pos_hits += 1;
        } else {
            score.neg += hit.weight;
            score.neg_hits += 1;
        }
    }

    if contains_intensifier(sentence) {
        score.pos *= INTENSIFIER_BOOST;
        score.neg *= INTENSIFIER_BOOST;
    }

    score
}

/// The six hard-coded negation constructions used by the emotion and urgency
/// detectors: a negation word immediately (or near-immediately) preceding the
/// pattern. Regexes are built at use site; invalid combinations are skipped.
pub fn negated_near(text: &str, pattern: &str) -> bool {
    let constructions = [
        format!(r"ne\s+(?:\w+['\s]\s*)?(?:{pattern})"),
        format!(r"n'(?:est|était|a)\s+(?:pas\s+)?(?:{pattern})"),
        format!(r"pas\s+(?:{pattern})"),
        format!(r"pas\s+(?:très|vraiment|du\s+tout)\s+(?:{pattern})"),
        format!(r"jamais\s+(?:{pattern})"),
        format!(r"aucune?\s+(?:\w+\s+)?(?:{pattern})"),
    ];
    constructions.iter().any(|c| {
        Regex::new(c)
            .map(|re| re.is_match(text))
            .unwrap_or(false)
    })
}
