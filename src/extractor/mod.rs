mod bibliography;
mod citations;

pub use bibliography::BibliographyExtractor;
pub use citations::CitationExtractor;

use crate::error::{CiteCheckError, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

/// Set of normalized (trimmed, lowercased, non-empty) keys produced by an
/// extractor. A `BTreeSet` keeps listings sorted without a separate pass.
pub type KeySet = BTreeSet<String>;

/// A `%` voids the remainder of its line, in both input formats. Stripping
/// happens before any scanning so commented-out entries and citations are
/// never extracted.
fn comment_regex() -> Result<Regex> {
    Ok(Regex::new(r"(?m)%.*$")?)
}

fn read_file_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CiteCheckError::from_read_error(path, e))
}
