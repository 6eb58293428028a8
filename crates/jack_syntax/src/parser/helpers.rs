/// Cursor primitives, expectations, and context tracking.
///
/// This chunk contains the low-level operations used throughout parsing:
/// - Reading the current token (`current`) and advancing the cursor
/// - Expecting a token kind, a keyword, a symbol, or a bare lexeme
/// - Emitting leaves into the trace
/// - Entering and leaving constructs on the grammar-context stack (`within`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the token under the cursor without consuming it.
    ///
    /// `expected` describes what the production wanted, for the [`SyntaxError::TruncatedInput`] raised when the
    /// sequence is exhausted.
    fn current(&self, expected: &str) -> Result<&'a Token, SyntaxError> {
        self.tokens.get(self.pos).ok_or_else(|| SyntaxError::TruncatedInput {
            expected: expected.to_string(),
            span: self.end_span(),
        })
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Zero-width span just past the last token.
    fn end_span(&self) -> Span {
        self.tokens.last().map(|t| Span::point(t.span.end)).unwrap_or_default()
    }

    /// Return `true` if the current token is the given symbol. `false` at end of input.
    fn check_symbol(&self, id: SymbolId) -> bool {
        self.tokens.get(self.pos).is_some_and(|t| t.is_symbol(id))
    }

    // ========================================================================
    // Expectations
    // ========================================================================

    /// Consume a token of the given kind.
    fn expect_kind(&mut self, kind: TokenKind) -> Result<&'a Token, SyntaxError> {
        let token = self.current(&format!("token of type {kind}"))?;
        if token.kind != kind {
            return Err(SyntaxError::unexpected_kind(token, kind));
        }
        self.advance();
        Ok(token)
    }

    /// Consume the given keyword. A non-keyword is a kind error; a different keyword is a lexeme error.
    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, SyntaxError> {
        let spelling = jack_core::lang::keywords::as_str(id);
        let token = self.current(&format!("`{spelling}`"))?;
        if token.kind != TokenKind::Keyword {
            return Err(SyntaxError::unexpected_kind(token, TokenKind::Keyword));
        }
        if !token.is_keyword(id) {
            return Err(SyntaxError::unexpected_lexeme(token, spelling));
        }
        self.advance();
        Ok(token)
    }

    /// Consume the given symbol. A non-symbol is a kind error; a different symbol is a lexeme error.
    fn expect_symbol(&mut self, id: SymbolId) -> Result<&'a Token, SyntaxError> {
        let token = self.separator(&[id])?;
        self.advance();
        Ok(token)
    }

    /// Consume a token whose lexeme is exactly the given symbol, whatever its kind.
    fn expect_lexeme(&mut self, id: SymbolId) -> Result<&'a Token, SyntaxError> {
        let spelling = symbols::as_str(id);
        let token = self.current(&format!("`{spelling}`"))?;
        if token.text != spelling {
            return Err(SyntaxError::unexpected_lexeme(token, spelling));
        }
        self.advance();
        Ok(token)
    }

    /// Check that the current token is one of `allowed` symbols, without consuming it.
    ///
    /// A lexeme error names the first allowed symbol.
    fn separator(&self, allowed: &[SymbolId]) -> Result<&'a Token, SyntaxError> {
        let first = allowed.first().map_or("", |id| symbols::as_str(*id));
        let token = self.current(&format!("`{first}`"))?;
        if token.kind != TokenKind::Symbol {
            return Err(SyntaxError::unexpected_kind(token, TokenKind::Symbol));
        }
        if !allowed.iter().any(|id| token.is_symbol(*id)) {
            return Err(SyntaxError::unexpected_lexeme(token, first));
        }
        Ok(token)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Re-emit a token as a leaf of its own kind.
    fn emit(&mut self, token: &Token) {
        self.trace.leaf(token);
    }

    // ========================================================================
    // Grammar contexts
    // ========================================================================

    /// Run `production` as construct `context`.
    ///
    /// Fails with [`SyntaxError::IllegalReentrantContext`] if `context` is already the innermost open construct.
    /// Otherwise the context is pushed for the duration of the production and popped afterwards.
    fn within(
        &mut self,
        context: ContextKind,
        production: impl FnOnce(&mut Self) -> Result<(), SyntaxError>,
    ) -> Result<(), SyntaxError> {
        let keyword = self.current("declaration")?;
        if self.contexts.last() == Some(&context) {
            return Err(SyntaxError::IllegalReentrantContext {
                keyword: keyword.text.clone(),
                context,
                span: keyword.span,
            });
        }

        self.contexts.push(context);
        tracing::debug!(construct = %context, depth = self.contexts.len() - 1, "entering construct");
        let result = production(self);
        self.contexts.pop();
        tracing::debug!(construct = %context, ok = result.is_ok(), "leaving construct");
        result
    }
}
