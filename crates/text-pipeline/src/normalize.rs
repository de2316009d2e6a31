//! Text normalization for review and metadata documents.
//!
//! [`clean_text`] turns raw text into the canonical token stream both
//! vectorizers consume: lowercase, letters only, stop words dropped,
//! remaining tokens reduced to a lemma form.
//!
//! The stop-word set and the irregular-form table are process-wide,
//! read-only tables initialized once on first use.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Common English function words dropped before vectorization.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "aren", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can",
    "cannot", "could", "couldn", "did", "didn", "do", "does", "doesn",
    "doing", "don", "down", "during", "each", "few", "for", "from",
    "further", "had", "hadn", "has", "hasn", "have", "haven", "having",
    "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just",
    "ll", "me", "might", "mightn", "more", "most", "must", "mustn", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "re", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "ve", "very", "was", "wasn", "we",
    "were", "weren", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "won", "would", "wouldn", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Irregular forms the suffix rules cannot reach.
const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("agreed", "agree"),
    ("came", "come"),
    ("children", "child"),
    ("died", "die"),
    ("done", "do"),
    ("dying", "die"),
    ("feet", "foot"),
    ("felt", "feel"),
    ("found", "find"),
    ("gave", "give"),
    ("geese", "goose"),
    ("given", "give"),
    ("gone", "go"),
    ("kept", "keep"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("made", "make"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("said", "say"),
    ("seen", "see"),
    ("selves", "self"),
    ("series", "series"),
    ("species", "species"),
    ("taken", "take"),
    ("teeth", "tooth"),
    ("thieves", "thief"),
    ("told", "tell"),
    ("took", "take"),
    ("used", "use"),
    ("went", "go"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
    ("written", "write"),
    ("wrote", "write"),
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

fn lemma_exceptions() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| LEMMA_EXCEPTIONS.iter().copied().collect())
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn has_vowel(stem: &str) -> bool {
    stem.bytes().any(is_vowel)
}

/// Stem ends consonant-vowel-consonant, where the final consonant is not
/// `w`, `x`, or `y`. Used to restore a trailing `e` ("mak" -> "make").
fn ends_cvc(stem: &str) -> bool {
    let b = stem.as_bytes();
    let n = b.len();
    n >= 3
        && !is_vowel(b[n - 1])
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
        && is_vowel(b[n - 2])
        && !is_vowel(b[n - 3])
}

/// Number of vowel-to-consonant transitions, the Porter "measure".
fn measure(stem: &str) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for b in stem.bytes() {
        let vowel = is_vowel(b);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

/// Undo consonant doubling after stripping a suffix ("runn" -> "run").
/// `l`, `s`, and `z` stay doubled ("call", "miss", "buzz").
fn undouble(stem: &mut String) {
    let b = stem.as_bytes();
    let n = b.len();
    if n >= 2
        && b[n - 1] == b[n - 2]
        && !is_vowel(b[n - 1])
        && !matches!(b[n - 1], b'l' | b's' | b'z')
    {
        stem.pop();
    }
}

fn strip_participle(token: &str, suffix: &str) -> Option<String> {
    let stem = token.strip_suffix(suffix)?;
    if !has_vowel(stem) {
        return None;
    }
    let mut stem = stem.to_string();
    let len_before = stem.len();
    undouble(&mut stem);
    // Restore the dropped 'e' only when nothing was undoubled and the
    // stem is short enough to plausibly need one ("mak" -> "make", but
    // "visit" stays "visit")
    if stem.len() == len_before && ends_cvc(&stem) && measure(&stem) == 1 {
        stem.push('e');
    }
    Some(stem)
}

/// Reduce a single lowercase token to its lemma form.
///
/// Exceptions cover common irregular forms; everything else goes through
/// deterministic suffix rules (plural `-s` family, `-ing`, `-ed`). Tokens
/// shorter than four characters pass through unchanged.
pub fn lemmatize(token: &str) -> String {
    if token.len() < 4 {
        return token.to_string();
    }
    if let Some(&lemma) = lemma_exceptions().get(token) {
        return lemma.to_string();
    }

    // Plural nouns / third-person verbs
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    for suffix in ["ches", "shes", "xes", "zes", "oes"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if !token.ends_with("ss") && !token.ends_with("us") && !token.ends_with("is") {
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
    }

    // Participles and past tense. "-eed" is left alone ("agreed" is an
    // exception entry; "speed" must not become "spe").
    if token.len() > 5 && !token.ends_with("eeing") {
        if let Some(stem) = strip_participle(token, "ing") {
            return stem;
        }
    }
    if token.len() > 4 && !token.ends_with("eed") {
        if let Some(stem) = strip_participle(token, "ed") {
            return stem;
        }
    }

    token.to_string()
}

/// Normalize raw text into a cleaned, space-joined token stream.
///
/// Steps, in order: lowercase; strip every character that is not a
/// lowercase letter or whitespace (digits and punctuation are discarded
/// entirely); tokenize on whitespace; drop stop words; lemmatize; rejoin
/// with single spaces. Empty input yields empty output.
pub fn clean_text(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    lowered
        .split_whitespace()
        .filter(|token| !stop_words().contains(token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \t\n  "), "");
    }

    #[test]
    fn test_lowercases_and_strips_punctuation_and_digits() {
        assert_eq!(clean_text("Great!!! 10/10 movie."), "great movie");
    }

    #[test]
    fn test_drops_stop_words() {
        assert_eq!(clean_text("the plot of the film"), "plot film");
    }

    #[test]
    fn test_all_stop_words_yields_empty() {
        assert_eq!(clean_text("it was the and of a"), "");
    }

    #[test]
    fn test_lemmatizes_gerunds() {
        assert_eq!(lemmatize("running"), "run");
        assert_eq!(lemmatize("making"), "make");
        assert_eq!(lemmatize("fighting"), "fight");
        assert_eq!(lemmatize("acting"), "act");
    }

    #[test]
    fn test_lemmatizes_past_tense() {
        assert_eq!(lemmatize("loved"), "love");
        assert_eq!(lemmatize("hated"), "hate");
        assert_eq!(lemmatize("jumped"), "jump");
        assert_eq!(lemmatize("stripped"), "strip");
    }

    #[test]
    fn test_lemmatizes_plurals() {
        assert_eq!(lemmatize("heroes"), "hero");
        assert_eq!(lemmatize("stories"), "story");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("watches"), "watch");
        assert_eq!(lemmatize("actors"), "actor");
    }

    #[test]
    fn test_lemmatizes_irregular_forms() {
        assert_eq!(lemmatize("movies"), "movie");
        assert_eq!(lemmatize("men"), "men"); // below length cutoff
        assert_eq!(lemmatize("women"), "woman");
        assert_eq!(lemmatize("children"), "child");
    }

    #[test]
    fn test_short_tokens_pass_through() {
        assert_eq!(lemmatize("run"), "run");
        assert_eq!(lemmatize("act"), "act");
    }

    #[test]
    fn test_suffix_rules_leave_false_matches_alone() {
        assert_eq!(lemmatize("string"), "string"); // no vowel before -ing
        assert_eq!(lemmatize("speed"), "speed"); // -eed left alone
        assert_eq!(lemmatize("focus"), "focus"); // -us is not a plural
    }

    #[test]
    fn test_clean_text_end_to_end() {
        assert_eq!(
            clean_text("The heroes were running and fighting!"),
            "hero run fight"
        );
    }

    #[test]
    fn test_clean_text_is_pure() {
        let input = "Running Movies, 42 classes!";
        assert_eq!(clean_text(input), clean_text(input));
    }
}
