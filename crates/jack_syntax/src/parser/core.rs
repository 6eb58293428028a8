// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, the grammar-context stack it carries, and the top-level `parse()` loop.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Kind of construct on the grammar-context stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// Bottom-of-stack sentinel: outside every construct.
    Top,
    Class,
    Function,
    Method,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextKind::Top => "top level",
            ContextKind::Class => "class",
            ContextKind::Function => "function",
            ContextKind::Method => "method",
        };
        f.write_str(name)
    }
}

/// Parser state for one run.
///
/// ## Notes
/// - The cursor, the context stack and the trace belong to this value alone; two runs never share them.
/// - The parser is fail-fast: the first violation is returned and parsing stops. There is no recovery.
/// - The context stack always holds [`ContextKind::Top`] at the bottom. A construct is pushed on entry and popped when
///   its production returns.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    contexts: Vec<ContextKind>,
    trace: Trace,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token sequence.
    ///
    /// ## Parameters
    /// - `tokens`: Token sequence produced by `jack_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            contexts: vec![ContextKind::Top],
            trace: Trace::new(),
        }
    }

    /// Parse the entire token sequence into a [`Trace`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered.
    pub fn parse(mut self) -> Result<Trace, SyntaxError> {
        while !self.is_at_end() {
            self.item()?;
        }
        Ok(self.trace)
    }
}
