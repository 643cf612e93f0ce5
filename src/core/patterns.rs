//! Compiled regular expressions used during enrichment and validation

use super::constants::{LONG_WORD_MIN_LEN, PRIORITY_KEYWORDS};
use once_cell::sync::Lazy;
use regex::Regex;

pub static LONG_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b\w{{{LONG_WORD_MIN_LEN},}}\b")).expect("long word pattern is valid")
});

pub static PRIORITY_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", PRIORITY_KEYWORDS.join("|")))
        .expect("priority keyword pattern is valid")
});

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Number of words with at least six word characters, bounded by word boundaries.
pub fn count_long_words(text: &str) -> usize {
    LONG_WORD.find_iter(text).count()
}

/// Whether `text` mentions any priority keyword as a whole word, ignoring case.
pub fn has_priority_keyword(text: &str) -> bool {
    PRIORITY_KEYWORD.is_match(text)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
