use super::{comment_regex, read_file_text, KeySet};
use crate::config::BibliographyConfig;
use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Extracts the set of declared keys from a BibTeX file.
///
/// Entry types are matched case-insensitively (`@Article` and `@ARTICLE`
/// both count), and the key is everything between the opening brace and the
/// first comma.
pub struct BibliographyExtractor {
    entry_regex: Regex,
    comment_regex: Regex,
}

impl BibliographyExtractor {
    pub fn new(config: &BibliographyConfig) -> Result<Self> {
        let types = config
            .entry_types
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        let entry_regex = Regex::new(&format!(r"(?i)@(?:{})\s*\{{([^,]+),", types))?;

        Ok(Self {
            entry_regex,
            comment_regex: comment_regex()?,
        })
    }

    /// Read `path` and return its declared keys, normalized to lowercase.
    pub fn extract_file(&self, path: &Path) -> Result<KeySet> {
        let content = read_file_text(path)?;
        Ok(self.extract(&content))
    }

    pub fn extract(&self, content: &str) -> KeySet {
        let content = self.comment_regex.replace_all(content, "");

        let mut keys = KeySet::new();
        for captures in self.entry_regex.captures_iter(&content) {
            if let Some(raw_key) = captures.get(1) {
                let key = raw_key.as_str().trim();
                if !key.is_empty() {
                    keys.insert(key.to_lowercase());
                }
            }
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CiteCheckError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn extractor() -> BibliographyExtractor {
        BibliographyExtractor::new(&BibliographyConfig::default()).unwrap()
    }

    #[test]
    fn test_extracts_recognized_entry_types() {
        let content = "\
@article{doe2019, title={A}, year={2019}}
@misc{lee2021, note={B}}
@inproceedings{kim2020, booktitle={C}}
@techreport{acme1999, institution={D}}
@book{ignored2000, title={not a recognized type}}
";
        let keys = extractor().extract(content);
        assert_eq!(keys.len(), 4);
        assert!(keys.contains("doe2019"));
        assert!(keys.contains("lee2021"));
        assert!(keys.contains("kim2020"));
        assert!(keys.contains("acme1999"));
        assert!(!keys.contains("ignored2000"));
    }

    #[test]
    fn test_entry_type_matching_is_case_insensitive() {
        let keys = extractor().extract("@Article{Smith2020, title={X}}\n@MISC{jones2018, x=y}");
        assert!(keys.contains("smith2020"));
        assert!(keys.contains("jones2018"));
    }

    #[test]
    fn test_keys_are_trimmed_and_lowercased() {
        let keys = extractor().extract("@article{  DoE2019  , title={X}}");
        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["doe2019"]);
    }

    #[test]
    fn test_whitespace_between_type_and_brace() {
        let keys = extractor().extract("@article  {spaced2021, title={X}}");
        assert!(keys.contains("spaced2021"));
    }

    #[test]
    fn test_commented_entries_are_ignored() {
        let content = "% @article{hidden2020, title={X}}\n@article{visible2020, title={Y}}";
        let keys = extractor().extract(content);
        assert!(!keys.contains("hidden2020"));
        assert!(keys.contains("visible2020"));
    }

    #[test]
    fn test_trailing_comment_does_not_eat_entry() {
        let content = "@article{kept2020, title={X}} % trailing note";
        let keys = extractor().extract(content);
        assert!(keys.contains("kept2020"));
    }

    #[test]
    fn test_duplicate_declarations_collapse() {
        let content = "@article{dup2020, a=b}\n@misc{DUP2020, c=d}";
        let keys = extractor().extract(content);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let content = "@article{a2020, x=y}\n@misc{b2021, x=y}";
        let ex = extractor();
        assert_eq!(ex.extract(content), ex.extract(content));
    }

    #[test]
    fn test_custom_entry_types() {
        let config = BibliographyConfig {
            entry_types: vec!["book".to_string()],
        };
        let ex = BibliographyExtractor::new(&config).unwrap();
        let keys = ex.extract("@book{tome1990, x=y}\n@article{paper2020, x=y}");
        assert!(keys.contains("tome1990"));
        assert!(!keys.contains("paper2020"));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let error = extractor()
            .extract_file(Path::new("no-such-refs.bib"))
            .unwrap_err();
        match error {
            CiteCheckError::FileNotFound { path } => {
                assert_eq!(path, Path::new("no-such-refs.bib"));
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_file_reads_content() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "@article{{fromdisk2022, title={{X}}}}").unwrap();

        let keys = extractor().extract_file(file.path()).unwrap();
        assert!(keys.contains("fromdisk2022"));
    }
}
