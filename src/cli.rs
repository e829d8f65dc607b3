use crate::config::AnalysisConfig;
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "citecheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cross-reference LaTeX citations against a BibTeX bibliography")]
#[command(
    long_about = "CiteCheck scans a BibTeX file for entry declarations and a LaTeX file for \
                  citation commands, then reports bibliography entries that are never cited \
                  and citations that have no matching bibliography entry."
)]
#[command(after_help = "EXAMPLES:\n  \
    citecheck references.bib paper.tex\n  \
    citecheck references.bib paper.tex --output-format json\n  \
    citecheck references.bib paper.tex --entry-types article,book,misc\n  \
    citecheck references.bib paper.tex --cite-command autocite --cite-command fullcite")]
pub struct Cli {
    /// Path to the BibTeX bibliography file
    pub bib_file: PathBuf,

    /// Path to the LaTeX document file
    pub tex_file: PathBuf,

    /// Entry types to recognize in the bibliography (comma-separated,
    /// replaces the default list)
    #[arg(long, value_delimiter = ',')]
    pub entry_types: Option<Vec<String>>,

    /// Additional citation command name to recognize (repeatable)
    #[arg(long = "cite-command")]
    pub cite_commands: Vec<String>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::default();
        config.merge_with_cli_args(self.entry_types.as_deref(), &self.cite_commands);
        config.validate()?;

        Ok(config)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
