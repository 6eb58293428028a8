/// Item dispatch and statement parsing.
///
/// An item is either a construct (`class`, `function`, `method`) or a statement. Items appear at the top level and in
/// class bodies; method bodies hold statements only.
///
/// ## Notes
/// - Statement terminators (`;`) and variable separators (`,`) are consumed but never emitted.
impl<'a> Parser<'a> {
    // ========================================================================
    // Items
    // ========================================================================

    fn item(&mut self) -> Result<(), SyntaxError> {
        let token = self.current("declaration or statement")?;
        match token.keyword_id() {
            Some(KeywordId::Class) => self.within(ContextKind::Class, Self::class_dec),
            Some(KeywordId::Function) => self.within(ContextKind::Function, Self::function_dec),
            Some(KeywordId::Method) => self.within(ContextKind::Method, Self::method_dec),
            _ => self.statement(),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<(), SyntaxError> {
        let token = self.current("statement")?;
        match token.keyword_id() {
            Some(KeywordId::Var) => self.var_dec(),
            Some(KeywordId::Let) => self.let_statement(),
            Some(KeywordId::Return) => self.return_statement(),
            _ => Err(SyntaxError::unexpected_lexeme(token, "var | let | return")),
        }
    }

    /// `var type name (, name)* ;`
    fn var_dec(&mut self) -> Result<(), SyntaxError> {
        self.trace.open(Tag::VarDec);
        let keyword = self.expect_keyword(KeywordId::Var)?;
        self.emit(keyword);

        let ty = self.expect_kind(TokenKind::Keyword)?;
        self.emit(ty);

        loop {
            let name = self.expect_kind(TokenKind::Identifier)?;
            self.emit(name);

            let separator = self.separator(&[SymbolId::Comma, SymbolId::Semicolon])?;
            self.advance();
            if separator.is_symbol(SymbolId::Semicolon) {
                break;
            }
            if self.check_symbol(SymbolId::Semicolon) {
                // `, ;`: the comma stands where the terminator belongs.
                return Err(SyntaxError::unexpected_lexeme(separator, symbols::as_str(SymbolId::Semicolon)));
            }
        }

        self.trace.close(Tag::VarDec);
        Ok(())
    }

    /// `let name = expression ;`
    fn let_statement(&mut self) -> Result<(), SyntaxError> {
        self.trace.open(Tag::LetDec);
        let keyword = self.expect_keyword(KeywordId::Let)?;
        self.emit(keyword);

        let target = self.expect_kind(TokenKind::Identifier)?;
        self.emit(target);
        let assign = self.expect_lexeme(SymbolId::Eq)?;
        self.emit(assign);

        self.expression()?;

        self.trace.close(Tag::LetDec);
        Ok(())
    }

    /// `return ;`
    fn return_statement(&mut self) -> Result<(), SyntaxError> {
        self.trace.open(Tag::ReturnDec);
        let keyword = self.expect_keyword(KeywordId::Return)?;
        self.emit(keyword);

        self.expect_lexeme(SymbolId::Semicolon)?;

        self.trace.close(Tag::ReturnDec);
        Ok(())
    }
}
