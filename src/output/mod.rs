//! Text rendering of front-end results.
//!
//! - `render_tokens` - one `kind: text` line per token (the `--lex` view)
//! - `render_trace` - the output trace, optionally indented

pub mod config;

pub use config::OutputConfig;

use jack_syntax::lexer::Token;
use jack_syntax::trace::Trace;

/// Render one `kind: text` line per token, kinds spelled `keyword`, `symbol`, `integerConstant`, `stringConstant`,
/// `identifier`.
pub fn render_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| format!("{}: {}", t.kind, t.text)).collect()
}

/// Render the trace lines using the configured indentation.
pub fn render_trace(trace: &Trace, config: &OutputConfig) -> Vec<String> {
    trace.render(config.indent_width)
}
