use std::sync::OnceLock;

use regex::Regex;

use super::models::WordCount;

/// One or more ASCII letters, digits or underscores.
const WORD_PATTERN: &str = r"(?-u:\w)+";

fn word_regex() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| Regex::new(WORD_PATTERN).unwrap())
}

pub fn count_words(text: &str) -> WordCount {
    let lowered = text.to_lowercase();
    let mut counts = WordCount::new();

    for token in word_regex().find_iter(&lowered) {
        counts.increment(token.as_str());
    }

    counts
}
