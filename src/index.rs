//! Word index (word -> set of page numbers), rendering and saving.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::filter::Eligibility;
use crate::pages::Page;
use crate::tokenize::Normalizer;

/// Entries found on this many pages or more are too common to print.
pub const DEFAULT_THRESHOLD: usize = 15;

/// Order of rendered entries. Only the order changes, never which lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// Alphabetical by word, then by page list.
    #[default]
    Word,
    /// By page list compared as a sequence, then by word.
    Pages,
}

/// Index: word -> pages containing that word. Page sets are ascending and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    entries: BTreeMap<String, BTreeSet<usize>>,
}

impl WordIndex {
    /// Build from segmented pages.
    pub fn build(pages: &[Page], normalizer: &Normalizer, filter: &dyn Eligibility) -> Self {
        let mut index = Self::default();
        for page in pages {
            for token in page.tokens() {
                let word = normalizer.normalize(&token.to_lowercase());
                if filter.is_eligible(&word) {
                    index.insert(word, page.index);
                }
            }
        }
        index
    }

    pub fn insert(&mut self, word: String, page: usize) {
        self.entries.entry(word).or_default().insert(page);
    }

    #[cfg(test)]
    pub fn pages(&self, word: &str) -> Option<&BTreeSet<usize>> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by `order`.
    pub fn sorted_entries(&self, order: SortOrder) -> Vec<(&str, Vec<usize>)> {
        let mut entries: Vec<(&str, Vec<usize>)> = self
            .entries
            .iter()
            .map(|(word, pages)| (word.as_str(), pages.iter().copied().collect()))
            .collect();
        if order == SortOrder::Pages {
            entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        }
        entries
    }

    /// One `word: p1, p2` line per entry found on fewer than `threshold` pages.
    pub fn render(&self, order: SortOrder, threshold: usize) -> Vec<String> {
        self.sorted_entries(order)
            .into_iter()
            .filter(|(_, pages)| pages.len() < threshold)
            .map(|(word, pages)| format_entry(word, &pages))
            .collect()
    }
}

/// `"word: 0, 4, 12"`
pub fn format_entry(word: &str, pages: &[usize]) -> String {
    let pages: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
    format!("{word}: {}", pages.join(", "))
}

/// Write rendered lines to `path` in one go, each newline-terminated.
pub fn save_index(lines: &[String], path: &Path) -> Result<()> {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| IndexError::io(path, e))
}
