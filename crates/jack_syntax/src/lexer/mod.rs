//! Lexer for the Jack programming language
//!
//! Splits source text into raw lexical units and classifies each one:
//! - ASCII whitespace separates units and is dropped
//! - `// line` and `/* block */` comments are dropped
//! - Quoted runs (`"..."`, `'...'`) are single units, spaces and symbols included
//! - Words, digit runs, and single characters are units of their own
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and classification

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::SyntaxError;
use crate::span::Span;

/// Lexer for Jack source code.
///
/// The lexer never rejects input: characters outside the language's alphabet become single-character identifier
/// units, and an unterminated string runs to the end of its line.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// ## Errors
    /// Only [`SyntaxError::LexClassificationGap`], which guards the scanner's own invariant that every unit is
    /// non-empty. No input reaches it.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), SyntaxError> {
        let Some(c) = self.peek() else {
            return Ok(());
        };

        if c.is_ascii_whitespace() {
            self.advance();
            return Ok(());
        }

        if c == '/' {
            match self.peek_next() {
                Some('/') => {
                    self.skip_line_comment();
                    return Ok(());
                }
                Some('*') => {
                    self.skip_block_comment();
                    return Ok(());
                }
                _ => {}
            }
        }

        let start = self.current_pos;
        self.advance();
        match c {
            '"' | '\'' => self.scan_quoted(c),
            '0'..='9' => self.scan_while(|c| c.is_ascii_digit()),
            _ if is_ident_start(c) => self.scan_while(is_ident_continue),
            _ => {}
        }
        self.add_unit(start)
    }

    // ========================================================================
    // Unit scanning
    // ========================================================================

    fn scan_while(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.advance();
        }
    }

    /// Scan the rest of a quoted run. The opening quote is already consumed.
    fn scan_quoted(&mut self, quote: char) {
        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '\\' => {
                    self.advance();
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ if c == quote => {
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.scan_while(|c| c != '\n');
    }

    /// Skip `/* ... */`. An unterminated comment runs to the end of input.
    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'
        while let Some(c) = self.advance() {
            if c == '*' && self.peek() == Some('/') {
                self.advance();
                return;
            }
        }
    }

    fn add_unit(&mut self, start: usize) -> Result<(), SyntaxError> {
        let span = Span::new(start, self.current_pos);
        let text = &self.source[start..self.current_pos];
        if text.is_empty() {
            return Err(SyntaxError::LexClassificationGap {
                text: text.to_string(),
                span,
            });
        }
        self.tokens.push(Token::new(TokenKind::classify(text), text, span));
        Ok(())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================
