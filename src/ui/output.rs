use crate::error::{CiteCheckError, UserFriendlyError};
use crate::report::AnalysisReport;
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    #[allow(dead_code)]
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods. Everything goes to stdout: the CLI contract is
    // "report on stdout", errors included.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => println!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    // User-friendly error handling. The default error is a single line;
    // suggestions only appear at verbosity >= 1.
    pub fn print_user_friendly_error(&self, error: &CiteCheckError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if !self.should_show_message(1) {
            return;
        }

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    /// Render the full analysis report in the selected output mode.
    pub fn print_analysis_report(&self, report: &AnalysisReport) {
        match self.mode {
            OutputMode::Human => self.print_human_report(report),
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => self.print_plain_report(report),
        }
    }

    pub fn print_header(&self, title: &str) {
        match self.mode {
            OutputMode::Human => {
                println!();
                if self.use_colors {
                    println!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    println!("=== {} ===", title);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                println!("=== {} ===", title);
            }
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if self.use_colors {
            let (emoji, styled) = match msg_type {
                MessageType::Error => (CROSS, style(message).red().bold()),
                MessageType::Warning => (WARNING, style(message).yellow().bold()),
                MessageType::Info => (INFO, style(message).cyan()),
            };
            println!("{}{}", emoji, styled);
        } else {
            let prefix = match msg_type {
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };
            println!("{} {}", prefix, message);
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_report(&self, report: &AnalysisReport) {
        self.print_header("Reference Analysis Results");

        println!();
        if !report.unused.is_empty() {
            let label = format!("Unused references ({}):", report.stats.unused);
            if self.use_colors {
                println!("{}", style(label).bold());
            } else {
                println!("{}", label);
            }
            for key in &report.unused {
                println!("- {}", key);
            }
        } else {
            let message = "No unused references found!";
            if self.use_colors {
                println!("{}", style(message).green());
            } else {
                println!("{}", message);
            }
        }

        if !report.unknown.is_empty() {
            println!();
            let label = format!(
                "Warning: Citations not found in BibTeX file ({}):",
                report.stats.unknown
            );
            if self.use_colors {
                println!("{}", style(label).yellow().bold());
            } else {
                println!("{}", label);
            }
            for key in &report.unknown {
                println!("- {}", key);
            }
        }

        println!();
        println!("Statistics:");
        println!(
            "- Total references in bib file: {}",
            report.stats.total_bib_keys
        );
        println!(
            "- Total citations in tex file: {}",
            report.stats.total_citations
        );
        println!("- Used references: {}", report.stats.used);
        println!("- Unused references: {}", report.stats.unused);
        println!("- Unknown citations: {}", report.stats.unknown);
    }

    fn print_plain_report(&self, report: &AnalysisReport) {
        println!("=== Reference Analysis Results ===");

        if !report.unused.is_empty() {
            println!("Unused references ({}):", report.stats.unused);
            for key in &report.unused {
                println!("- {}", key);
            }
        } else {
            println!("No unused references found!");
        }

        if !report.unknown.is_empty() {
            println!(
                "Warning: Citations not found in BibTeX file ({}):",
                report.stats.unknown
            );
            for key in &report.unknown {
                println!("- {}", key);
            }
        }

        println!("Statistics:");
        println!(
            "- Total references in bib file: {}",
            report.stats.total_bib_keys
        );
        println!(
            "- Total citations in tex file: {}",
            report.stats.total_citations
        );
        println!("- Used references: {}", report.stats.used);
        println!("- Unused references: {}", report.stats.unused);
        println!("- Unknown citations: {}", report.stats.unknown);
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
    Info,
}
