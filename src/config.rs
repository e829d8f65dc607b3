use crate::error::{CiteCheckError, Result};
use serde::Serialize;

/// Runtime configuration for a single analysis pass. There are no config
/// files and no environment variables; defaults mirror the recognized
/// BibTeX/LaTeX forms and CLI flags may extend or replace them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisConfig {
    pub bibliography: BibliographyConfig,
    pub citations: CitationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct BibliographyConfig {
    /// Entry types recognized when scanning `@TYPE{key, ...}` declarations.
    /// Matched case-insensitively.
    pub entry_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CitationConfig {
    /// Command names (without the leading backslash) recognized in addition
    /// to the built-in cite families. Matched case-sensitively.
    pub extra_commands: Vec<String>,
}

impl Default for BibliographyConfig {
    fn default() -> Self {
        Self {
            entry_types: vec![
                "article".to_string(),
                "misc".to_string(),
                "inbook".to_string(),
                "inproceedings".to_string(),
                "techreport".to_string(),
                "incollection".to_string(),
            ],
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply CLI overrides: a full replacement for the entry-type list and
    /// additional citation command names.
    pub fn merge_with_cli_args(
        &mut self,
        entry_types: Option<&[String]>,
        extra_commands: &[String],
    ) {
        if let Some(types) = entry_types {
            self.bibliography.entry_types = types
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
        }

        self.citations.extra_commands.extend(
            extra_commands
                .iter()
                .map(|c| c.trim().trim_start_matches('\\').to_string())
                .filter(|c| !c.is_empty()),
        );
    }

    pub fn validate(&self) -> Result<()> {
        if self.bibliography.entry_types.is_empty() {
            return Err(CiteCheckError::Config {
                message: "at least one bibliography entry type is required".to_string(),
            });
        }

        for entry_type in &self.bibliography.entry_types {
            if !entry_type.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(CiteCheckError::Config {
                    message: format!("invalid entry type name: {}", entry_type),
                });
            }
        }

        for command in &self.citations.extra_commands {
            let valid = command
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '*');
            if !valid {
                return Err(CiteCheckError::Config {
                    message: format!("invalid citation command name: {}", command),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_types() {
        let config = AnalysisConfig::default();
        assert_eq!(config.bibliography.entry_types.len(), 6);
        assert!(config
            .bibliography
            .entry_types
            .contains(&"inproceedings".to_string()));
        assert!(config.citations.extra_commands.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_entry_type_override() {
        let mut config = AnalysisConfig::default();
        let types = vec!["Article".to_string(), " book ".to_string()];
        config.merge_with_cli_args(Some(types.as_slice()), &[]);

        assert_eq!(config.bibliography.entry_types, vec!["article", "book"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_extra_commands_strips_backslash() {
        let mut config = AnalysisConfig::default();
        config.merge_with_cli_args(None, &["\\fullcite".to_string(), "autocite".to_string()]);

        assert_eq!(config.citations.extra_commands, vec!["fullcite", "autocite"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut config = AnalysisConfig::default();
        config.bibliography.entry_types = vec!["art{icle".to_string()];
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.citations.extra_commands = vec!["cite}".to_string()];
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.bibliography.entry_types.clear();
        assert!(config.validate().is_err());
    }
}
