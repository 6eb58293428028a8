//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{NamedSource, Report};

use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::{lexer, parser};
use crate::output::{self, OutputConfig};

use super::{CliError, CliResult, ExitCode};

/// Read a source file, rejecting files over the configured size limit.
pub fn read_source(file_path: &str, config: &OutputConfig) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > config.max_source_size {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            config.max_source_size
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a syntax error against its source, with file name, line, column and a caret.
pub fn format_error(file_path: &str, source: &str, error: &SyntaxError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
    format!("{report:?}")
}

/// Scan a file and return its `kind: text` token lines.
pub fn lex_lines(file_path: &str, config: &OutputConfig) -> CliResult<Vec<String>> {
    let source = read_source(file_path, config)?;
    let tokens = lexer::lex(&source).map_err(|e| CliError::failure(format_error(file_path, &source, &e)))?;
    Ok(output::render_tokens(&tokens))
}

/// Scan and parse a file and return its rendered trace lines.
pub fn trace_lines(file_path: &str, config: &OutputConfig) -> CliResult<Vec<String>> {
    let source = read_source(file_path, config)?;
    let tokens = lexer::lex(&source).map_err(|e| CliError::failure(format_error(file_path, &source, &e)))?;
    let trace = parser::parse(&tokens).map_err(|e| {
        tracing::debug!(error = %e, offset = e.span().start, "syntax error");
        CliError::failure(format_error(file_path, &source, &e))
    })?;
    Ok(output::render_trace(&trace, config))
}

/// Tokenize and display classified tokens.
pub fn lex_file(file_path: &str, config: &OutputConfig) -> CliResult<ExitCode> {
    for line in lex_lines(file_path, config)? {
        println!("{line}");
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the output trace.
pub fn parse_file(file_path: &str, config: &OutputConfig) -> CliResult<ExitCode> {
    for line in trace_lines(file_path, config)? {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}
