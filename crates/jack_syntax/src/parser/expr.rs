/// Expression parsing.
///
/// There is no expression grammar yet: no precedence, grouping, or sub-expression structure. The placeholder
/// production below passes tokens through verbatim. A real expression grammar replaces `expression` without touching
/// its callers.
impl<'a> Parser<'a> {
    /// Placeholder expression production: re-emit every token up to the terminating `;`, then consume the `;`.
    fn expression(&mut self) -> Result<(), SyntaxError> {
        loop {
            let token = self.current("`;`")?;
            self.advance();
            if token.is_symbol(SymbolId::Semicolon) {
                return Ok(());
            }
            self.emit(token);
        }
    }
}
