//! Phrase pattern tables: sentiment idioms tied to calibrated scores.
//!
//! Each entry is (regex, score, level, optional calibrated override). The
//! tables are data, not logic: the calibrator reads hits and levels, so a
//! pattern can be tuned or audited in isolation. Patterns run against the
//! whole normalized text, independent of sentence boundaries, and each
//! contributes at most one hit no matter how often it matches.

use once_cell::sync::Lazy;
use regex::Regex;

/// Qualitative strength of an idiom, used by the forced-categorization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Strong,
    Moderate,
    Mild,
}

pub struct PhrasePattern {
    pub re: Regex,
    pub score: f32,
    pub level: Level,
    /// Exact score this pattern forces when its band wins (negative idioms
    /// only; positive bands use floor/clamp without per-pattern overrides).
    pub calibrated: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhraseHit {
    pub score: f32,
    pub level: Level,
    pub calibrated: Option<f32>,
}

type Row = (&'static str, f32, Level, Option<f32>);

// Declaration order matters twice: hits are reported in it, and the first
// matching calibrated entry of the winning band supplies the forced score.
const NEGATIVE_ROWS: &[Row] = &[
    // strong
    (
        r"c'est (horrible|une catastrophe|catastrophique)",
        4.0,
        Level::Strong,
        Some(-1.0),
    ),
    (
        r"(très|vraiment|extrêmement) déçu(e)?s?",
        3.5,
        Level::Strong,
        Some(-0.9),
    ),
    (
        r"(inadmissible|inacceptable|scandaleux)",
        3.5,
        Level::Strong,
        Some(-0.8),
    ),
    (
        r"ne (fonctionne|marche) (pas|plus) du tout",
        3.5,
        Level::Strong,
        Some(-0.8),
    ),
    (r"horrible|épouvantable|catastrophique", 3.8, Level::Strong, None),
    // moderate
    (
        r"pas (satisfait|satisfaite|content|contente)",
        2.2,
        Level::Moderate,
        Some(-0.6),
    ),
    (
        r"(mauvaise|très mauvaise) expérience",
        2.5,
        Level::Moderate,
        Some(-0.7),
    ),
    (r"déçu(e)?s?|décevant(e)?s?", 2.2, Level::Moderate, Some(-0.6)),
    (
        r"trop (cher|chère|lent|lente|long|longue|compliqué|compliquée)",
        2.0,
        Level::Moderate,
        Some(-0.5),
    ),
    (
        r"ne (fonctionne|marche) (pas|plus)",
        2.5,
        Level::Moderate,
        Some(-0.6),
    ),
    (r"pas à la hauteur", 2.2, Level::Moderate, Some(-0.5)),
    // mild
    (
        r"pourrait être (mieux|meilleur|meilleure)",
        1.2,
        Level::Mild,
        Some(-0.3),
    ),
    (
        r"(un peu|assez) (déçu|déçue|lent|lente|cher|chère)",
        1.2,
        Level::Mild,
        Some(-0.2),
    ),
    (r"sans plus", 1.0, Level::Mild, Some(-0.3)),
    (r"\bmoyen(ne)?\b|\bpassable\b", 1.0, Level::Mild, Some(-0.2)),
    (r"peut mieux faire", 1.2, Level::Mild, Some(-0.3)),
];

const POSITIVE_ROWS: &[Row] = &[
    // strong
    (r"j'adore", 3.5, Level::Strong, None),
    (
        r"c'est (génial|parfait|excellent|formidable|fantastique)",
        3.5,
        Level::Strong,
        None,
    ),
    (
        r"je recommande (vivement|fortement|à 100%)",
        3.2,
        Level::Strong,
        None,
    ),
    (
        r"(absolument|vraiment) (parfait|génial|excellent)",
        3.2,
        Level::Strong,
        None,
    ),
    (
        r"dépasse (mes|toutes mes) attentes",
        3.0,
        Level::Strong,
        None,
    ),
    // moderate
    (
        r"je suis (très )?(satisfait|satisfaite|content|contente)",
        2.2,
        Level::Moderate,
        None,
    ),
    (
        r"(très|vraiment) (bien|bon|bonne|satisfait|satisfaite|content|contente)",
        2.4,
        Level::Moderate,
        None,
    ),
    (
        r"(bonne|belle|excellente) expérience",
        2.2,
        Level::Moderate,
        None,
    ),
    (r"je recommande", 2.0, Level::Moderate, None),
    (r"répond à mes attentes", 2.0, Level::Moderate, None),
    // mild
    (r"c'est bien", 1.2, Level::Mild, None),
    (r"pas mal", 1.0, Level::Mild, None),
    (
        r"(plutôt|assez) (bien|bon|bonne|satisfait|satisfaite)",
        1.2,
        Level::Mild,
        None,
    ),
    (r"\bcorrecte?\b", 1.0, Level::Mild, None),
    (r"dans l'ensemble (bien|bon|positif)", 1.2, Level::Mild, None),
];

fn compile(rows: &[Row]) -> Vec<PhrasePattern> {
    rows.iter()
        .map(|&(pat, score, level, calibrated)| PhrasePattern {
            re: Regex::new(pat).expect("valid phrase pattern"),
            score,
            level,
            calibrated,
        })
        .collect()
}

static NEGATIVE: Lazy<Vec<PhrasePattern>> = Lazy::new(|| compile(NEGATIVE_ROWS));
static POSITIVE: Lazy<Vec<PhrasePattern>> = Lazy::new(|| compile(POSITIVE_ROWS));

pub fn negative_phrases() -> &'static [PhrasePattern] {
    &NEGATIVE
}

pub fn positive_phrases() -> &'static [PhrasePattern] {
    &POSITIVE
}

/// Test every pattern against the full normalized text; one hit per pattern
/// at most, in declaration order.
pub fn match_phrases(text: &str, patterns: &[PhrasePattern]) -> Vec<PhraseHit> {
    patterns
        .iter()
        .filter(|p| p.re.is_match(text))
        .map(|p| PhraseHit {
            score: p.score,
            level: p.level,
            calibrated: p.calibrated,
        })
        .collect()
}
