//! Diagnostics for the Jack front end.
//!
//! Every failure is a [`SyntaxError`] value carrying the offending [`Span`]. The front end is fail-fast: the first
//! violation aborts the run and is returned to the caller, who decides how to report it and whether to exit.
//!
//! `SyntaxError` implements [`miette::Diagnostic`], so callers can render it against the source text:
//!
//! ```rust
//! use jack_syntax::{lexer, parser};
//!
//! let source = "class 123 { }";
//! let tokens = lexer::lex(source).unwrap();
//! let err = parser::parse(&tokens).unwrap_err();
//! let report = miette::Report::new(err).with_source_code(source.to_string());
//! assert!(report.to_string().contains("123"));
//! ```

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::{Token, TokenKind};
use crate::parser::ContextKind;
use crate::span::Span;

/// A lexical or syntax error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// A scanned unit matched none of the token kinds.
    ///
    /// Unreachable while `Identifier` remains the catch-all classification; raised only if the scanner produces an
    /// empty unit.
    #[error("cannot classify lexeme `{text}`")]
    #[diagnostic(
        code(jack::lex::classification_gap),
        help("this is a scanner bug: every lexeme classifies as at least an identifier")
    )]
    LexClassificationGap {
        text: String,
        #[label("scanned here")]
        span: Span,
    },

    /// The token's kind does not fit the grammar position.
    #[error("unexpected `{found}`, expected token of type {expected}")]
    #[diagnostic(code(jack::syntax::unexpected_token_kind))]
    UnexpectedTokenKind {
        found: String,
        expected: TokenKind,
        #[label("wrong kind of token")]
        span: Span,
    },

    /// The token's kind is acceptable but its lexeme breaks a positional rule.
    #[error("unexpected `{found}`, expected `{expected}`")]
    #[diagnostic(code(jack::syntax::unexpected_lexeme))]
    UnexpectedLexeme {
        found: String,
        expected: String,
        #[label("not allowed here")]
        span: Span,
    },

    /// A construct keyword appeared while the same construct kind is the innermost open context.
    #[error("`{keyword}` cannot start a new {context} inside an open {context}")]
    #[diagnostic(
        code(jack::syntax::reentrant_context),
        help("close the enclosing declaration before starting another of the same kind")
    )]
    IllegalReentrantContext {
        keyword: String,
        context: ContextKind,
        #[label("nested declaration starts here")]
        span: Span,
    },

    /// The token sequence ended while a production still needed tokens.
    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(code(jack::syntax::truncated_input))]
    TruncatedInput {
        expected: String,
        #[label("input ends here")]
        span: Span,
    },

    /// A recognized construct whose grammar is not implemented yet.
    #[error("`{keyword}` declarations are not supported yet")]
    #[diagnostic(
        code(jack::syntax::unsupported_construct),
        help("declare the subroutine with `method` instead")
    )]
    UnsupportedConstruct {
        keyword: String,
        #[label("unsupported declaration")]
        span: Span,
    },
}

impl SyntaxError {
    /// Kind mismatch at `token`.
    pub fn unexpected_kind(token: &Token, expected: TokenKind) -> Self {
        SyntaxError::UnexpectedTokenKind {
            found: token.text.clone(),
            expected,
            span: token.span,
        }
    }

    /// Lexeme mismatch at `token`.
    pub fn unexpected_lexeme(token: &Token, expected: impl Into<String>) -> Self {
        SyntaxError::UnexpectedLexeme {
            found: token.text.clone(),
            expected: expected.into(),
            span: token.span,
        }
    }

    /// Source location of the offending token (or of the end of input).
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::LexClassificationGap { span, .. }
            | SyntaxError::UnexpectedTokenKind { span, .. }
            | SyntaxError::UnexpectedLexeme { span, .. }
            | SyntaxError::IllegalReentrantContext { span, .. }
            | SyntaxError::TruncatedInput { span, .. }
            | SyntaxError::UnsupportedConstruct { span, .. } => *span,
        }
    }
}
