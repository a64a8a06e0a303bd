//! Split a transcribed book into pages on its per-page license watermark.

use crate::error::{IndexError, Result};
use crate::tokenize;

/// Every page of the source material carries this stamp, optionally followed by a name.
pub const DELIMITER_PREFIX: &str = "Licensed To: ";

/// Front matter pages skipped by [`PageSelection::Strict`].
const STRICT_SKIP_FRONT: usize = 1;
/// Back matter pages skipped by [`PageSelection::Strict`].
const STRICT_SKIP_BACK: usize = 2;

/// Which pages after the watermark split are indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSelection {
    /// Every page after the first watermark.
    #[default]
    All,
    /// Also drop the table of contents (first page) and the appendix (last two pages).
    Strict,
}

/// One cleaned page and its position among all pages after the first watermark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub text: String,
}

impl Page {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        tokenize::tokens(&self.text)
    }
}

/// The watermark that separates pages, e.g. `"Licensed To: Alice"`.
pub fn delimiter_for(student_name: Option<&str>) -> String {
    match student_name {
        Some(name) => format!("{DELIMITER_PREFIX}{name}"),
        None => DELIMITER_PREFIX.to_string(),
    }
}

/// Split `document` on `delimiter` into cleaned pages.
///
/// Text before the first delimiter is never a page. A document without the delimiter
/// has no pages. Page indices stay those of the full split, so under
/// [`PageSelection::Strict`] the first page returned has index 1.
pub fn segment(document: &str, delimiter: &str, selection: PageSelection) -> Result<Vec<Page>> {
    if delimiter.is_empty() {
        return Err(IndexError::EmptyDelimiter);
    }
    let segments: Vec<&str> = document.split(delimiter).skip(1).collect();
    let kept = match selection {
        PageSelection::All => 0..segments.len(),
        PageSelection::Strict if segments.len() > STRICT_SKIP_FRONT + STRICT_SKIP_BACK => {
            STRICT_SKIP_FRONT..segments.len() - STRICT_SKIP_BACK
        }
        PageSelection::Strict => 0..0,
    };
    Ok(kept
        .map(|index| Page {
            index,
            text: tokenize::clean_page(segments[index]),
        })
        .collect())
}
