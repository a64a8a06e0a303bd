//! Page text to tokens, and tokens to normalized words.

use std::sync::LazyLock;

use regex::Regex;

use crate::morphology::{Morphology, Reducer};

/// Boundary characters left behind by PDF-to-text extraction.
const STRIP_CHARS: &[char] = &[
    '(', ')', '\'', '"', ':', ',', '”', '“', '‘', '?', ';', '-', '•', '’', '—', '…', '[', ']',
    '!',
];

/// Contractions and footnote markers dropped from the end of a token.
const STRIP_SUFFIXES: &[&str] = &[
    "'s", "'re", "'ve", "'t", "[0]", "[1]", "[2]", "[3]", "[4]", "[5]", "[6]",
];

static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://|www\.)[^\s/]+\.[a-z]{2,6}(?:[/:?#]\S*)?$").unwrap()
});

/// Collapse every whitespace run (newlines and tabs included) to one space and trim the ends.
pub fn clean_page(page: &str) -> String {
    let mut cleaned = String::with_capacity(page.len());
    for word in page.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(word);
    }
    cleaned
}

/// Split a cleaned page into tokens.
pub fn tokens(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.split(' ').filter(|token| !token.is_empty())
}

/// True for `http(s)://host.tld...` and `www.host.tld...`.
pub fn is_url(token: &str) -> bool {
    URL_SHAPE.is_match(token)
}

/// Trim extraction artifacts from both ends of a token until nothing changes.
fn strip_boundaries(token: &str) -> String {
    let mut word = token.replace('’', "'");
    loop {
        let before = word.len();
        for suffix in STRIP_SUFFIXES {
            if let Some(keep) = word.strip_suffix(suffix).map(str::len) {
                word.truncate(keep);
            }
        }
        let trimmed = word.trim_matches(STRIP_CHARS).trim_end_matches('.');
        if trimmed.len() != word.len() {
            word = trimmed.to_string();
        }
        if word.len() == before {
            return word;
        }
    }
}

/// Turns raw tokens into the canonical words the index is keyed on.
#[derive(Default)]
pub struct Normalizer {
    reducer: Reducer,
}

impl Normalizer {
    pub fn new(morphology: Morphology) -> Self {
        Self {
            reducer: Reducer::new(morphology),
        }
    }

    /// Normalize one raw token.
    ///
    /// URLs come back as-is (minus boundary punctuation). Anything else keeps only its
    /// letters and is reduced to its base form. Case is left to the caller, and
    /// `normalize(normalize(x)) == normalize(x)`.
    pub fn normalize(&self, raw: &str) -> String {
        let stripped = strip_boundaries(raw);
        if is_url(&stripped) {
            return stripped;
        }
        let letters: String = stripped.chars().filter(|c| c.is_alphabetic()).collect();
        self.reducer.reduce(&letters)
    }
}
