//! Sentence and word tokenization.
//!
//! Tokenization is purely pattern based. Text is first cut into sentences at
//! whitespace that follows terminal punctuation (`.`, `!`, `?`), then each
//! sentence is reduced to its lowercase word tokens.
//!
//! The sentence splitter skips a boundary when the text before it looks like
//! an abbreviation:
//! - dotted abbreviations such as `U.S.` (word char, `.`, word char, any char)
//! - titles such as `Mr.` or `Dr.` (uppercase, lowercase, `.`)
//! - single capitalised initials such as `J.` in `J. Smith`
//!
//! Other abbreviations (`etc.`, `approx.`) still split. That is a known
//! limitation of the heuristic.

use regex::Regex;
use std::sync::LazyLock;

/// Terminal punctuation followed by exactly one whitespace character.
static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s").expect("boundary pattern is valid"));

/// A maximal run of word characters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Returns `true` if a boundary whose punctuation ends `before` should be
/// suppressed because `before` ends in an abbreviation.
///
/// `before` includes the terminal punctuation character.
fn ends_in_abbreviation(before: &str) -> bool {
    let mut tail = before.chars().rev();
    let last = tail.next();
    let second = tail.next();
    let third = tail.next();
    let fourth = tail.next();

    // `U.S.`: the dot belongs to a dotted run of single characters.
    if let (Some(w0), Some('.'), Some(w2), Some(_)) = (fourth, third, second, last) {
        if is_word_char(w0) && is_word_char(w2) {
            return true;
        }
    }

    // `Mr.`, `Dr.`
    if let (Some(upper), Some(lower), Some('.')) = (third, second, last) {
        if upper.is_ascii_uppercase() && lower.is_ascii_lowercase() {
            return true;
        }
    }

    // `J.` as a standalone initial.
    if let (Some(initial), Some('.')) = (second, last) {
        if initial.is_ascii_uppercase() && !third.is_some_and(is_word_char) {
            return true;
        }
    }

    false
}

/// Split text into sentences.
///
/// Leading and trailing whitespace of the whole input is trimmed first. Only
/// the single whitespace character after the punctuation is consumed, so runs
/// of whitespace leave the remainder at the start of the next sentence.
///
/// Empty input yields a single empty sentence; callers are expected to reject
/// blank input before tokenizing.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY.find_iter(text) {
        // The punctuation is always a single ASCII byte.
        let punct_end = boundary.start() + 1;
        if ends_in_abbreviation(&text[..punct_end]) {
            continue;
        }
        sentences.push(&text[start..punct_end]);
        start = boundary.end();
    }

    sentences.push(&text[start..]);
    sentences
}

/// Extract the lowercase word tokens of a sentence, in order.
///
/// Punctuation and whitespace contribute no tokens; a sentence made only of
/// punctuation yields an empty vector.
pub fn words(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            split_sentences("I see it. Do you? Yes!"),
            vec!["I see it.", "Do you?", "Yes!"]
        );
    }

    #[test]
    fn trims_outer_whitespace() {
        assert_eq!(
            split_sentences("  \n Hello there. Bye.  \n"),
            vec!["Hello there.", "Bye."]
        );
    }

    #[test]
    fn keeps_dotted_abbreviations_together() {
        assert_eq!(
            split_sentences("He moved to the U.S. last year. It rained."),
            vec!["He moved to the U.S. last year.", "It rained."]
        );
    }

    #[test]
    fn keeps_titles_together() {
        assert_eq!(
            split_sentences("Mr. Smith left. Dr. Who stayed."),
            vec!["Mr. Smith left.", "Dr. Who stayed."]
        );
    }

    #[test]
    fn keeps_initials_together() {
        assert_eq!(
            split_sentences("Ask J. Smith first. Then go."),
            vec!["Ask J. Smith first.", "Then go."]
        );
    }

    #[test]
    fn other_abbreviations_still_split() {
        assert_eq!(
            split_sentences("Bring apples etc. then leave."),
            vec!["Bring apples etc.", "then leave."]
        );
    }

    #[test]
    fn extra_whitespace_stays_with_next_sentence() {
        assert_eq!(split_sentences("One.  Two."), vec!["One.", " Two."]);
    }

    #[test]
    fn no_punctuation_is_one_sentence() {
        assert_eq!(split_sentences("just some words"), vec!["just some words"]);
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        assert_eq!(split_sentences("a.b?c!d"), vec!["a.b?c!d"]);
    }

    #[test]
    fn words_are_lowercased_and_stripped() {
        assert_eq!(
            words("Hello, World! It's snake_case 42."),
            vec!["hello", "world", "it", "s", "snake_case", "42"]
        );
    }

    #[test]
    fn punctuation_only_sentence_has_no_words() {
        assert!(words("...").is_empty());
        assert!(words("?! ,;").is_empty());
    }
}
