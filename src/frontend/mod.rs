//! Jack compiler frontend
//!
//! - `lexer`: source text to classified tokens
//! - `parser`: tokens to output trace
//! - `trace`: the tagged-line output model
//! - `diagnostics`: the error taxonomy

// Syntax components are provided by the jack_syntax crate.
pub use jack_syntax::{diagnostics, lexer, parser, trace};

use jack_syntax::diagnostics::SyntaxError;
use jack_syntax::trace::Trace;

/// Run the whole front end over one source text: scan once, parse once.
///
/// ## Errors
/// Returns the first [`SyntaxError`] found.
pub fn analyze(source: &str) -> Result<Trace, SyntaxError> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
