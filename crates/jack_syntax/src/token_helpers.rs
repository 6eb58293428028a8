//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive string comparisons at call sites and to make it easy to work with the
//! registry IDs behind keyword and symbol tokens.

use crate::lexer::{Token, TokenKind};
use jack_core::lang::keywords::{self, KeywordId};
use jack_core::lang::symbols::{self, SymbolId};

impl Token {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::Keyword => keywords::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the symbol id, if this is a symbol token.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        match self.kind {
            TokenKind::Symbol => symbols::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given symbol.
    pub fn is_symbol(&self, id: SymbolId) -> bool {
        self.symbol_id() == Some(id)
    }
}
