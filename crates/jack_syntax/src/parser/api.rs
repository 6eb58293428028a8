/// Parse a token sequence into an output [`Trace`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token sequence produced by `jack_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; no partial trace is produced.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Trace, SyntaxError> {
    let trace = Parser::new(tokens).parse()?;
    tracing::debug!(line_count = trace.len(), "parsed token sequence");
    Ok(trace)
}
