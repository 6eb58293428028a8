/// Declaration parsing methods.
///
/// This chunk parses the construct productions: classes, subroutine declarations, and parameter lists.
///
/// ## Notes
/// - Constructs are entered through `Parser::within` (in `helpers.rs`), which owns the re-entrancy check.
/// - Construct keywords are validated but not emitted; the opening tag stands in for them.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `class Name { item* }`
    fn class_dec(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword(KeywordId::Class)?;
        self.trace.open(Tag::Class);

        let name = self.expect_kind(TokenKind::Identifier)?;
        self.emit(name);
        self.block()?;

        self.trace.close(Tag::Class);
        Ok(())
    }

    /// `function ...` is recognized but has no grammar yet.
    fn function_dec(&mut self) -> Result<(), SyntaxError> {
        let keyword = self.expect_keyword(KeywordId::Function)?;
        tracing::warn!(offset = keyword.span.start, "function declarations are not supported yet");
        Err(SyntaxError::UnsupportedConstruct {
            keyword: keyword.text.clone(),
            span: keyword.span,
        })
    }

    /// `method ReturnType name ( parameterList ) { statement* }`
    ///
    /// The closing `)` is consumed but not emitted. The body holds statements only, so no construct opens inside a
    /// method.
    fn method_dec(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword(KeywordId::Method)?;
        self.trace.open(Tag::SubroutineDec);

        let return_type = self.expect_kind(TokenKind::Identifier)?;
        self.emit(return_type);
        let name = self.expect_kind(TokenKind::Identifier)?;
        self.emit(name);

        let open = self.expect_symbol(SymbolId::LParen)?;
        self.emit(open);
        self.parameter_list()?;
        self.expect_symbol(SymbolId::RParen)?;

        let open = self.expect_symbol(SymbolId::LBrace)?;
        self.emit(open);
        while !self.current("`}`")?.is_symbol(SymbolId::RBrace) {
            self.statement()?;
        }
        let close = self.expect_symbol(SymbolId::RBrace)?;
        self.emit(close);

        self.trace.close(Tag::SubroutineDec);
        Ok(())
    }

    /// `( type name (, type name)* )?` up to, not including, the closing `)`.
    ///
    /// Types must be keywords and names identifiers. A `,` is only legal right after a complete pair and must be
    /// followed by another type. Commas are not emitted.
    fn parameter_list(&mut self) -> Result<(), SyntaxError> {
        self.trace.open(Tag::ParameterList);

        if !self.check_symbol(SymbolId::RParen) {
            loop {
                let ty = self.expect_kind(TokenKind::Keyword)?;
                self.emit(ty);
                let name = self.expect_kind(TokenKind::Identifier)?;
                self.emit(name);

                let next = self.separator(&[SymbolId::Comma, SymbolId::RParen])?;
                if next.is_symbol(SymbolId::RParen) {
                    break;
                }
                self.advance();
            }
        }

        self.trace.close(Tag::ParameterList);
        Ok(())
    }

    /// Class body: `{ item* }`, emitting both braces.
    fn block(&mut self) -> Result<(), SyntaxError> {
        let open = self.expect_symbol(SymbolId::LBrace)?;
        self.emit(open);

        while !self.current("`}`")?.is_symbol(SymbolId::RBrace) {
            self.item()?;
        }

        let close = self.expect_symbol(SymbolId::RBrace)?;
        self.emit(close);
        Ok(())
    }
}
