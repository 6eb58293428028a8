//! Jack language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `SymbolId`) and look up spellings and metadata via the registry
//! tables instead of comparing strings throughout the front end.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - Membership is all that matters for classification; table order carries no meaning.
//!
//! ## Examples
//! ```rust
//! use jack_core::lang::keywords::{self, KeywordId};
//! use jack_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(symbols::from_str("{"), Some(SymbolId::LBrace));
//! ```

pub mod keywords;
pub mod symbols;
