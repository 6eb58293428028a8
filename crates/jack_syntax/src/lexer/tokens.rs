//! Token types for the Jack lexer.
//!
//! A token is a classified lexeme: one of five [`TokenKind`]s plus the exact source text. Classification is total:
//! [`TokenKind::classify`] assigns every non-empty lexeme exactly one kind.
//!
//! ## Notes
//! - Keyword and symbol identity is available through `crate::token_helpers` (`Token::keyword_id`,
//!   `Token::symbol_id`), backed by the `jack_core::lang` registries.

use std::fmt;

use crate::span::Span;
use jack_core::lang::{keywords, symbols};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Symbol,
    IntegerConstant,
    StringConstant,
    Identifier,
}

impl TokenKind {
    /// Classify a lexeme. First match wins:
    ///
    /// 1. reserved word -> `Keyword`
    /// 2. single-character symbol -> `Symbol`
    /// 3. base-10 (optionally signed) 64-bit integer -> `IntegerConstant`
    /// 4. quoted with a matching `"` or `'` pair, at least 3 bytes long -> `StringConstant`
    /// 5. anything else -> `Identifier`
    pub fn classify(text: &str) -> TokenKind {
        if keywords::is_keyword(text) {
            TokenKind::Keyword
        } else if symbols::is_symbol(text) {
            TokenKind::Symbol
        } else if is_integer(text) {
            TokenKind::IntegerConstant
        } else if is_string(text) {
            TokenKind::StringConstant
        } else {
            TokenKind::Identifier
        }
    }

    /// Tag name used for this kind's leaf lines in the output trace.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::IntegerConstant => "integer",
            TokenKind::StringConstant => "string",
            TokenKind::Identifier => "identifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
            TokenKind::Identifier => "identifier",
        };
        f.write_str(name)
    }
}

/// A classified lexeme with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

fn is_integer(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

fn is_string(text: &str) -> bool {
    if text.len() < 3 {
        return false;
    }
    let bytes = text.as_bytes();
    let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
    first == last && (first == b'"' || first == b'\'')
}
