//! Weighted term lexicons and the greedy multi-word matcher.
//!
//! Both lexicons are embedded JSON (`term -> intensity`, intensities roughly
//! 0.5..=4.0) loaded once at process start and never mutated. Keys may be
//! single words or fixed 2–3 word phrases; multi-word entries win over the
//! single words they contain.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static POSITIVE: Lazy<HashMap<String, f32>> = Lazy::new(|| {
    let raw = include_str!("../../lexicon_positive.json");
    serde_json::from_str::<HashMap<String, f32>>(raw).expect("valid positive lexicon")
});

static NEGATIVE: Lazy<HashMap<String, f32>> = Lazy::new(|| {
    let raw = include_str!("../../lexicon_negative.json");
    serde_json::from_str::<HashMap<String, f32>>(raw).expect("valid negative lexicon")
});

pub fn positive_lexicon() -> &'static HashMap<String, f32> {
    &POSITIVE
}

pub fn negative_lexicon() -> &'static HashMap<String, f32> {
    &NEGATIVE
}

/// One lexicon match. Byte offsets refer to the scanned sentence and bound
/// the surface form (punctuation-trimmed), for the negation context window.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconHit {
    pub term: String,
    pub weight: f32,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug)]
struct Tok {
    text: String,
    start: usize,
    end: usize,
}

/// Whitespace tokenization with byte spans. Tokens are trimmed of leading and
/// trailing non-alphanumeric characters so "satisfait." matches "satisfait";
/// spans are adjusted to the trimmed form.
fn tokenize(sentence: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    let flush = |start: usize, end: usize, out: &mut Vec<Tok>| {
        let raw = &sentence[start..end];
        let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
        if trimmed.is_empty() {
            return;
        }
        let lead = raw.find(trimmed).unwrap_or(0);
        out.push(Tok {
            text: trimmed.to_string(),
            start: start + lead,
            end: start + lead + trimmed.len(),
        });
    };

    for (i, c) in sentence.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                flush(s, i, &mut out);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        flush(s, sentence.len(), &mut out);
    }
    out
}

/// Scan a (normalized) sentence against one lexicon. At each token position
/// the 3-word, then 2-word, then 1-word window is tried; the first window
/// that matches a key is recorded and the scan advances past the consumed
/// tokens (non-overlapping greedy longest-match). Hits come back in
/// left-to-right order.
pub fn match_terms(sentence: &str, lexicon: &HashMap<String, f32>) -> Vec<LexiconHit> {
    let tokens = tokenize(sentence);
    let mut hits = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let mut consumed = 0;
        for n in [3usize, 2, 1] {
            if i + n > tokens.len() {
                continue;
            }
            let key = tokens[i..i + n]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if let Some(&weight) = lexicon.get(&key) {
                hits.push(LexiconHit {
                    term: key,
                    weight,
                    start: tokens[i].start,
                    end: tokens[i + n - 1].end,
                });
                consumed = n;
                break;
            }
        }
        i += consumed.max(1);
    }
    hits
}

/// Sum of weights for all matches of `lexicon` in `text` (no negation, no
/// intensifiers). Used by the contrast-clause rescan.
pub fn sum_weights(text: &str, lexicon: &HashMap<String, f32>) -> f32 {
    match_terms(text, lexicon).iter().map(|h| h.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_hits_in_order() {
        let hits = match_terms("le service est rapide et efficace", positive_lexicon());
        let terms: Vec<&str> = hits.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(terms, vec!["rapide", "efficace"]);
    }

    #[test]
    fn multi_word_entry_beats_contained_single_word() {
        // "très bien" is a 2-word entry; "bien" alone must not double-count.
        let hits = match_terms("c'est très bien", positive_lexicon());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "très bien");
        assert!((hits[0].weight - 2.5).abs() < 1e-6);
    }

    #[test]
    fn punctuation_is_trimmed_from_tokens() {
        let hits = match_terms("je suis satisfait.", positive_lexicon());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "satisfait");
    }

    #[test]
    fn offsets_bound_the_surface_match() {
        let s = "produit lent";
        let hits = match_terms(s, negative_lexicon());
        assert_eq!(hits.len(), 1);
        assert_eq!(&s[hits[0].start..hits[0].end], "lent");
    }

    #[test]
    fn three_word_entries_match() {
        let hits = match_terms("bon rapport qualité prix", positive_lexicon());
        assert!(hits.iter().any(|h| h.term == "rapport qualité prix"));
    }

    #[test]
    fn unknown_words_yield_nothing() {
        assert!(match_terms("le ciel est bleu aujourd'hui", positive_lexicon()).is_empty());
        assert!(match_terms("le ciel est bleu aujourd'hui", negative_lexicon()).is_empty());
    }
}
