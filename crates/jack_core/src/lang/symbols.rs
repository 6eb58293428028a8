//! Symbol vocabulary.
//!
//! The Jack language has a fixed set of single-character symbols: delimiters, separators, and operators. This module
//! records their spellings; it does not tokenize source text.
//!
//! ## Notes
//! - Every symbol is exactly one character. Lookup via [`from_str`] on a longer string always fails.
//! - `_` is not a symbol; it is an identifier character.
//!
//! ## Examples
//! ```rust
//! use jack_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_char(';'), Some(SymbolId::Semicolon));
//! assert_eq!(symbols::as_str(SymbolId::Tilde), "~");
//! assert_eq!(symbols::from_str("=="), None);
//! ```

/// Broad syntactic grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Brackets and braces.
    Delimiter,
    /// `,` `;` `.`
    Separator,
    /// Arithmetic, logical and comparison operators, plus `=`.
    Operator,
}

/// Stable identifier for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,

    // Separators
    Dot,
    Comma,
    Semicolon,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Lt,
    Gt,
    Eq,
    Tilde,
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub spelling: char,
    pub canonical: &'static str,
    pub category: SymbolCategory,
}

/// Registry of all symbols.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(SymbolId::LBrace, '{', "{", SymbolCategory::Delimiter),
    info(SymbolId::RBrace, '}', "}", SymbolCategory::Delimiter),
    info(SymbolId::LParen, '(', "(", SymbolCategory::Delimiter),
    info(SymbolId::RParen, ')', ")", SymbolCategory::Delimiter),
    info(SymbolId::LBracket, '[', "[", SymbolCategory::Delimiter),
    info(SymbolId::RBracket, ']', "]", SymbolCategory::Delimiter),
    info(SymbolId::Dot, '.', ".", SymbolCategory::Separator),
    info(SymbolId::Comma, ',', ",", SymbolCategory::Separator),
    info(SymbolId::Semicolon, ';', ";", SymbolCategory::Separator),
    info(SymbolId::Plus, '+', "+", SymbolCategory::Operator),
    info(SymbolId::Minus, '-', "-", SymbolCategory::Operator),
    info(SymbolId::Star, '*', "*", SymbolCategory::Operator),
    info(SymbolId::Slash, '/', "/", SymbolCategory::Operator),
    info(SymbolId::Amp, '&', "&", SymbolCategory::Operator),
    info(SymbolId::Pipe, '|', "|", SymbolCategory::Operator),
    info(SymbolId::Lt, '<', "<", SymbolCategory::Operator),
    info(SymbolId::Gt, '>', ">", SymbolCategory::Operator),
    info(SymbolId::Eq, '=', "=", SymbolCategory::Operator),
    info(SymbolId::Tilde, '~', "~", SymbolCategory::Operator),
];

/// Return the canonical spelling for a symbol.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a symbol.
pub fn category(id: SymbolId) -> SymbolCategory {
    info_for(id).category
}

/// Return the full metadata entry for a symbol.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    SYMBOLS.iter().find(|s| s.id == id).expect("symbol info missing")
}

/// Resolve a single character to a symbol id.
pub fn from_char(c: char) -> Option<SymbolId> {
    SYMBOLS.iter().find(|s| s.spelling == c).map(|s| s.id)
}

/// Resolve a spelling to a symbol id. Only one-character spellings can match.
pub fn from_str(s: &str) -> Option<SymbolId> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => from_char(c),
        _ => None,
    }
}

/// Return `true` if `s` is a symbol.
pub fn is_symbol(s: &str) -> bool {
    from_str(s).is_some()
}

const fn info(id: SymbolId, spelling: char, canonical: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo {
        id,
        spelling,
        canonical,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_is_not_a_symbol() {
        assert_eq!(from_char('_'), None);
        assert!(!is_symbol("_"));
    }

    #[test]
    fn test_multi_char_spellings_never_match() {
        assert_eq!(from_str(""), None);
        assert_eq!(from_str("<="), None);
        assert_eq!(from_str("{}"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(category(SymbolId::LParen), SymbolCategory::Delimiter);
        assert_eq!(category(SymbolId::Comma), SymbolCategory::Separator);
        assert_eq!(category(SymbolId::Tilde), SymbolCategory::Operator);
    }
}
