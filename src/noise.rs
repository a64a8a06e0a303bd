//! Noise words: words too common to be worth indexing.
//!
//! The set is resolved once before indexing starts, either from a large common-English
//! wordlist (fetched over HTTP or read from disk) or from the bundled English stopwords,
//! and is read-only from then on.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use stop_words::{get, LANGUAGE};
use tracing::debug;
use url::Url;

use crate::error::{IndexError, Result};

/// One word per line, several hundred thousand entries.
pub const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words.txt";

/// Where the noise words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseSource {
    /// Common-English wordlist fetched from `url`.
    Common { url: String },
    /// Common-English wordlist read from a local file.
    CommonFile { path: PathBuf },
    /// Bundled English stopword list.
    Stopwords,
}

impl NoiseSource {
    pub fn describe(&self) -> String {
        match self {
            NoiseSource::Common { url } => url.clone(),
            NoiseSource::CommonFile { path } => path.display().to_string(),
            NoiseSource::Stopwords => "bundled stopwords".to_string(),
        }
    }
}

/// Lowercase set of words excluded from the index.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    /// Build from arbitrary words; entries are trimmed and lowercased, blanks dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a one-word-per-line list.
    pub fn parse_wordlist(body: &str) -> Self {
        Self::from_words(body.lines())
    }

    /// NLTK English stopwords (function words only) with punctuation removed ("don't" -> "dont").
    pub fn stopwords() -> Self {
        Self::from_words(get(LANGUAGE::English).iter().map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        }))
    }

    /// Resolve `source` into a word set. Fetch and read failures are fatal.
    pub fn load(source: &NoiseSource) -> Result<Self> {
        let words = match source {
            NoiseSource::Stopwords => return Ok(Self::stopwords()),
            NoiseSource::Common { url } => Self::parse_wordlist(&fetch_wordlist(url)?),
            NoiseSource::CommonFile { path } => {
                let body = fs::read_to_string(path).map_err(|e| IndexError::io(path, e))?;
                Self::parse_wordlist(&body)
            }
        };
        if words.is_empty() {
            return Err(IndexError::EmptyWordlist(source.describe()));
        }
        Ok(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// `word` or `word + "s"` is a noise word. The reverse (stripping an "s") is not checked.
    pub fn contains_or_plural(&self, word: &str) -> bool {
        self.contains(word) || self.contains(&format!("{word}s"))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

async fn fetch_wordlist_async(client: &reqwest::Client, url: Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(IndexError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

/// Fetch a wordlist body. No retry: any failure ends the run.
pub fn fetch_wordlist(url: &str) -> Result<String> {
    let url = Url::parse(url)?;
    debug!(%url, "fetching common-word list");
    let rt = tokio::runtime::Runtime::new().map_err(IndexError::Runtime)?;
    let client = reqwest::Client::new();
    rt.block_on(fetch_wordlist_async(&client, url))
}
