use super::{comment_regex, read_file_text, KeySet};
use crate::config::CitationConfig;
use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Command families recognized out of the box. Unlike bibliography entry
/// types, command names are matched case-sensitively (`\Cite` is not a
/// citation).
const BASE_COMMANDS: &[&str] = &[
    r"\\cite[tp]?\*?",                  // \cite, \citet, \citep and * variants
    r"\\citeauthor\*?",                 // \citeauthor and \citeauthor*
    r"\\citeyear",                      // \citeyear
    r"\\cite(?:alt|alp|num|text|url)",  // other common cite variants
];

/// Extracts the set of cited keys from a LaTeX file.
///
/// One invocation may carry several comma-separated keys; each is cleaned
/// of bracketed optional arguments, trimmed and lowercased independently.
pub struct CitationExtractor {
    cite_regex: Regex,
    optional_arg_regex: Regex,
    comment_regex: Regex,
}

impl CitationExtractor {
    pub fn new(config: &CitationConfig) -> Result<Self> {
        let mut commands: Vec<String> = BASE_COMMANDS.iter().map(|c| c.to_string()).collect();
        for command in &config.extra_commands {
            commands.push(format!(r"\\{}", regex::escape(command)));
        }

        // Payload stops at the first closing brace.
        let cite_regex = Regex::new(&format!(r"(?:{})\s*\{{([^}}]+)\}}", commands.join("|")))?;

        Ok(Self {
            cite_regex,
            optional_arg_regex: Regex::new(r"\[.*?\]")?,
            comment_regex: comment_regex()?,
        })
    }

    /// Read `path` and return its cited keys, normalized to lowercase.
    pub fn extract_file(&self, path: &Path) -> Result<KeySet> {
        let content = read_file_text(path)?;
        Ok(self.extract(&content))
    }

    pub fn extract(&self, content: &str) -> KeySet {
        let content = self.comment_regex.replace_all(content, "");

        let mut citations = KeySet::new();
        for captures in self.cite_regex.captures_iter(&content) {
            let Some(payload) = captures.get(1) else {
                continue;
            };
            for candidate in payload.as_str().split(',') {
                let cleaned = self.optional_arg_regex.replace_all(candidate, "");
                let key = cleaned.trim();
                if !key.is_empty() {
                    citations.insert(key.to_lowercase());
                }
            }
        }

        citations
    }
}
