//! CLI module for jackc
//!
//! This module is the collaborator around the front end: it reads one source file, hands the text to the scanner and
//! parser, prints the result, and owns the process exit code.
//!
//! ## Usage
//!
//! - `jackc <FILE>` - print the output trace
//! - `jackc --lex <FILE>` - print the classified tokens
//! - `jackc --indent 2 <FILE>` - print the trace with nested lines indented
//!
//! ## Design
//!
//! Arguments are declared with clap's derive API. Commands report failure as a `CliError` value; `run()` alone turns
//! that into stderr output and a process exit status.

// Failures travel as `CliError`, never as panics
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::output::OutputConfig;

// ============================================================================
// Errors and exit status
// ============================================================================

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A failed command: what to print on stderr and which status to exit with.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// Fully rendered text for stderr
    pub message: String,
    /// Status handed back to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Build an error with an explicit status.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Build an error exiting with status 1.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Outcome of a CLI command.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Arguments
// ============================================================================

/// Scanner and syntax analyzer for the Jack language
#[derive(Parser, Debug)]
#[command(name = "jackc")]
#[command(version = VERSION)]
#[command(about = "Scan and syntax-check a Jack source file", long_about = None)]
pub struct Cli {
    /// Source file to analyze (prints the output trace)
    #[arg(value_name = "FILE", required_unless_present = "lex_file")]
    pub file: Option<PathBuf>,

    /// Tokenize only: print one `kind: text` line per token
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Indent nested trace lines by N spaces per level
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub indent: usize,
}

impl Cli {
    /// Output configuration selected by the flags.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new().with_indent_width(self.indent)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse arguments, run the selected command, and exit non-zero on failure.
///
/// No other function in the crate calls `process::exit`.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{e}");
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Dispatch to `--lex` or the default trace command.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.output_config();

    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), &config);
    }

    match cli.file {
        Some(file) => commands::parse_file(&file.to_string_lossy(), &config),
        None => Err(CliError::failure("Error: a source file is required")),
    }
}
