//! Sentence segmentation and shared text normalization.
//!
//! Splitting is purely punctuation-based: a boundary after `.`, `!` or `?`
//! whenever the next non-whitespace character is a letter. Abbreviations and
//! decimals are not handled — "M. Dupont" splits after "M." — which is a
//! known, accepted limitation kept for compatibility with the scoring tables.

/// Lowercase the text and fold typographic apostrophes so patterns like
/// `j'adore` match regardless of how the apostrophe was typed.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '\u{2019}' {
            out.push('\'');
        } else {
            for lc in ch.to_lowercase() {
                out.push(lc);
            }
        }
    }
    out
}

/// Split text into sentences. Boundaries sit after sentence-final punctuation
/// followed (possibly across whitespace) by a Unicode letter. Empty and
/// whitespace-only fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            // Look past whitespace for the next letter.
            let next_letter = chars[i + 1..]
                .iter()
                .find(|ch| !ch.is_whitespace())
                .map(|ch| ch.is_alphabetic())
                .unwrap_or(false);
            if next_letter {
                let s = current.trim().to_string();
                if !s.is_empty() {
                    sentences.push(s);
                }
                current.clear();
            }
        }
    }

    let s = current.trim().to_string();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation_before_letters() {
        let out = split_sentences("le service est bon. la livraison est lente! vraiment?");
        assert_eq!(
            out,
            vec![
                "le service est bon.",
                "la livraison est lente!",
                "vraiment?"
            ]
        );
    }

    #[test]
    fn accented_letters_count_as_letters() {
        let out = split_sentences("c'est fini. Évidemment je reviendrai");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn trailing_punctuation_does_not_create_empty_sentence() {
        let out = split_sentences("tout est parfait.");
        assert_eq!(out, vec!["tout est parfait."]);
    }

    #[test]
    fn abbreviation_missplit_is_preserved() {
        // Known limitation: "m." followed by a name splits.
        let out = split_sentences("m. dupont est satisfait.");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "m.");
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn normalize_lowercases_and_folds_apostrophes() {
        assert_eq!(normalize("J\u{2019}ADORE Ça"), "j'adore ça");
    }
}
