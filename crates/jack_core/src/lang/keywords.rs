//! Define the reserved keyword vocabulary for the Jack language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; `Class` is an identifier, `class` is a keyword.
//! - A lexeme that is a keyword is never an identifier, even though every keyword has identifier shape.
//!
//! ## Examples
//! ```rust
//! use jack_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("method"), Some(KeywordId::Method));
//! assert_eq!(keywords::as_str(KeywordId::Method), "method");
//! assert_eq!(keywords::from_str("Main"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Class,
    Constructor,
    Function,
    Method,
    Field,
    Static,
    Var,

    // Types
    Int,
    Char,
    Boolean,
    Void,

    // Constants
    True,
    False,
    Null,
    This,

    // Statements
    Let,
    Do,
    If,
    Else,
    While,
    Return,
}

/// High-level grouping for documentation and diagnostics.
///
/// ## Notes
/// - Categories are metadata only; the parser owns grammatical legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Declarations of classes, subroutines and variables.
    Declaration,
    /// Built-in type names.
    Type,
    /// Keyword constants (`true`, `false`, `null`, `this`).
    Constant,
    /// Statement introducers.
    Statement,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Constructor, "constructor", KeywordCategory::Declaration),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::Method, "method", KeywordCategory::Declaration),
    info(KeywordId::Field, "field", KeywordCategory::Declaration),
    info(KeywordId::Static, "static", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Char, "char", KeywordCategory::Type),
    info(KeywordId::Boolean, "boolean", KeywordCategory::Type),
    info(KeywordId::Void, "void", KeywordCategory::Type),
    info(KeywordId::True, "true", KeywordCategory::Constant),
    info(KeywordId::False, "false", KeywordCategory::Constant),
    info(KeywordId::Null, "null", KeywordCategory::Constant),
    info(KeywordId::This, "this", KeywordCategory::Constant),
    info(KeywordId::Let, "let", KeywordCategory::Statement),
    info(KeywordId::Do, "do", KeywordCategory::Statement),
    info(KeywordId::If, "if", KeywordCategory::Statement),
    info(KeywordId::Else, "else", KeywordCategory::Statement),
    info(KeywordId::While, "while", KeywordCategory::Statement),
    info(KeywordId::Return, "return", KeywordCategory::Statement),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling to a keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `s` is a reserved word.
pub fn is_keyword(s: &str) -> bool {
    from_str(s).is_some()
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
