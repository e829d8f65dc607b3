pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{AnalysisConfig, BibliographyConfig, CitationConfig};
pub use error::{CiteCheckError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{BibliographyExtractor, CitationExtractor, KeySet};
pub use report::{AnalysisReport, AnalysisStats};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for the citation analysis pipeline.
pub struct CiteCheck {
    config: AnalysisConfig,
    output_formatter: OutputFormatter,
}

impl CiteCheck {
    /// Create a new CiteCheck instance with the provided configuration
    pub fn new(config: AnalysisConfig, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create a CiteCheck instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run the full analysis: extract both key sets and compare them.
    ///
    /// The two extractions are independent pure functions of their input
    /// path; the report is derived from the returned sets alone.
    pub fn analyze(&self, bib_file: &Path, tex_file: &Path) -> Result<AnalysisReport> {
        self.output_formatter
            .debug(&format!("Scanning bibliography: {}", bib_file.display()));
        let bib_keys = self.extract_bibliography(bib_file)?;

        self.output_formatter
            .debug(&format!("Scanning document: {}", tex_file.display()));
        let citations = self.extract_citations(tex_file)?;

        self.output_formatter.info(&format!(
            "Found {} bibliography keys and {} cited keys",
            bib_keys.len(),
            citations.len()
        ));

        let report = AnalysisReport::compare(&bib_keys, &citations);
        if !report.unknown.is_empty() {
            self.output_formatter.warning(&format!(
                "{} cited key(s) have no bibliography entry",
                report.stats.unknown
            ));
        }

        Ok(report)
    }

    /// Extract the declared key set from a bibliography file.
    pub fn extract_bibliography(&self, path: &Path) -> Result<KeySet> {
        let extractor = BibliographyExtractor::new(&self.config.bibliography)?;
        extractor.extract_file(path)
    }

    /// Extract the cited key set from a document file.
    pub fn extract_citations(&self, path: &Path) -> Result<KeySet> {
        let extractor = CitationExtractor::new(&self.config.citations)?;
        extractor.extract_file(path)
    }

    /// Get configuration reference
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &CiteCheckError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to run an analysis with default settings.
pub fn analyze_simple(bib_file: &Path, tex_file: &Path) -> Result<AnalysisReport> {
    let checker = CiteCheck::new(AnalysisConfig::default(), OutputMode::Plain, 0, true);
    checker.analyze(bib_file, tex_file)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_end_to_end_analysis() {
        let bib = temp_file("@article{doe2019, title={A}}\n@misc{lee2021, note={B}}\n");
        let tex = temp_file("Intro \\citep{doe2019} and more text.\n");

        let report = analyze_simple(bib.path(), tex.path()).unwrap();
        assert_eq!(report.unused, vec!["lee2021"]);
        assert_eq!(report.used, vec!["doe2019"]);
        assert!(report.unknown.is_empty());
        assert_eq!(report.stats.total_bib_keys, 2);
        assert_eq!(report.stats.total_citations, 1);
    }

    #[test]
    fn test_case_insensitive_matching_across_files() {
        let bib = temp_file("@article{Smith2020, title={X}}\n");
        let tex = temp_file("\\cite{SMITH2020}\n");

        let report = analyze_simple(bib.path(), tex.path()).unwrap();
        assert_eq!(report.used, vec!["smith2020"]);
        assert!(report.unused.is_empty());
        assert!(report.unknown.is_empty());
    }

    #[test]
    fn test_unknown_citation_reported() {
        let bib = temp_file("@article{foo2020, title={X}}\n");
        let tex = temp_file("\\citet{foo2020,bar2021}\n");

        let report = analyze_simple(bib.path(), tex.path()).unwrap();
        assert_eq!(report.unknown, vec!["bar2021"]);
        assert_eq!(report.used, vec!["foo2020"]);
        assert!(report.unused.is_empty());
    }

    #[test]
    fn test_missing_bibliography_propagates() {
        let tex = temp_file("\\cite{a}\n");
        let error = analyze_simple(Path::new("missing.bib"), tex.path()).unwrap_err();
        matches!(error, CiteCheckError::FileNotFound { .. });
    }

    #[test]
    fn test_from_cli_respects_flags() {
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "citecheck",
            "refs.bib",
            "paper.tex",
            "--entry-types",
            "book",
        ])
        .unwrap();

        let checker = CiteCheck::from_cli(&cli).unwrap();
        assert_eq!(checker.config().bibliography.entry_types, vec!["book"]);
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
