//! Syntax frontend for the Jack language: lexer, parser, output trace, diagnostics.
//!
//! The crate turns one in-memory source text into a validated, nested structural trace of the program's syntax. It
//! does no file IO and keeps no state between calls, so independent sources can be processed in parallel.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no symbol tables, type checking, or code generation.
//! - Vocabulary identity (keywords/symbols) comes from `jack_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use jack_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("class Main { }").unwrap();
//! let trace = parser::parse(&tokens).unwrap();
//! assert_eq!(trace.len(), 5);
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token_helpers;
pub mod trace;
