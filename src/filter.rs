//! Eligibility rules deciding which normalized words make it into the index.

use crate::noise::NoiseWords;
use crate::tokenize;

/// Shortest word the index keeps by default.
pub const DEFAULT_MIN_LEN: usize = 3;

/// A policy deciding whether a normalized, lowercased word is indexed.
pub trait Eligibility {
    fn is_eligible(&self, word: &str) -> bool;
}

/// Length, leading-digit, noise-word and URL checks, all of which must pass.
///
/// URLs survive normalization unchanged and are rejected here.
#[derive(Debug, Clone)]
pub struct WordFilter<'a> {
    noise: &'a NoiseWords,
    min_len: usize,
}

impl<'a> WordFilter<'a> {
    pub fn new(noise: &'a NoiseWords) -> Self {
        Self {
            noise,
            min_len: DEFAULT_MIN_LEN,
        }
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }
}

impl Eligibility for WordFilter<'_> {
    fn is_eligible(&self, word: &str) -> bool {
        if word.chars().count() < self.min_len {
            return false;
        }
        if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        if self.noise.contains_or_plural(word) {
            return false;
        }
        !(tokenize::is_url(word) || word.starts_with("http://") || word.starts_with("https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> NoiseWords {
        NoiseWords::from_words(["the", "has", "uses", "too"])
    }

    #[test]
    fn test_length() {
        let noise = noise();
        let filter = WordFilter::new(&noise);
        assert!(!filter.is_eligible(""));
        assert!(!filter.is_eligible("ab"));
        assert!(filter.is_eligible("abc"));
        assert!(!WordFilter::new(&noise).with_min_len(5).is_eligible("abcd"));
    }

    #[test]
    fn test_length_counts_chars() {
        let noise = noise();
        let filter = WordFilter::new(&noise);
        // two chars, four bytes
        assert!(!filter.is_eligible("éé"));
        assert!(filter.is_eligible("café"));
    }

    #[test]
    fn test_leading_digit() {
        let noise = noise();
        let filter = WordFilter::new(&noise);
        assert!(!filter.is_eligible("3rd"));
        assert!(!filter.is_eligible("2048"));
        assert!(filter.is_eligible("rd3x"));
    }

    #[test]
    fn test_noise_words() {
        let noise = noise();
        let filter = WordFilter::new(&noise);
        assert!(!filter.is_eligible("the"));
        assert!(!filter.is_eligible("too"));
        // "use" + "s" is a noise word
        assert!(!filter.is_eligible("use"));
        assert!(filter.is_eligible("server"));
    }

    #[test]
    fn test_urls() {
        let noise = noise();
        let filter = WordFilter::new(&noise);
        assert!(!filter.is_eligible("http://example.com"));
        assert!(!filter.is_eligible("https://www.sans.org/blog"));
        assert!(filter.is_eligible("httpd"));
    }

    #[test]
    fn test_www_urls() {
        let noise = noise();
        let filter = WordFilter::new(&noise);
        assert!(!filter.is_eligible("www.sans.org"));
        assert!(!filter.is_eligible("www.example.co.uk/path"));
        assert!(filter.is_eligible("wwwsansorg"));
    }
}
