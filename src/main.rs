use citecheck::{CiteCheck, CiteCheckError, Cli, OutputFormatter, OutputMode};
use clap::error::ErrorKind;
use clap::Parser;
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                return 0;
            }
            // Wrong argument count or malformed flags: one-line usage on
            // stdout, before any file IO happens.
            println!("Usage: citecheck <BIB_FILE> <TEX_FILE>");
            return 1;
        }
    };

    let checker = match CiteCheck::from_cli(&cli) {
        Ok(checker) => checker,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    match checker.analyze(&cli.bib_file, &cli.tex_file) {
        Ok(report) => {
            checker.output_formatter().print_analysis_report(&report);
            0
        }
        Err(e) => {
            // Missing or unreadable inputs are reported, not escalated: the
            // tool still exits 0, matching its report-only contract.
            checker.handle_error(&e);
            0
        }
    }
}

fn print_startup_error(error: &CiteCheckError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
