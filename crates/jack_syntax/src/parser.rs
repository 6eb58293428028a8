//! Parser for the Jack programming language
//!
//! Recursive-descent syntax analyzer over the lexer's token sequence. Each production validates the token kinds and
//! lexemes it expects and appends tagged lines to a [`Trace`].
//!
//! ## Examples
//!
//! ```rust
//! use jack_syntax::{lexer, parser};
//!
//! let source = "class Main { method Main run ( ) { return ; } }";
//! let tokens = lexer::lex(source).unwrap();
//! let trace = parser::parse(&tokens).unwrap();
//! assert_eq!(trace.lines().first().map(|l| l.to_string()).as_deref(), Some("<class>"));
//! ```

use std::fmt;

use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use crate::trace::{Tag, Trace};
use jack_core::lang::keywords::KeywordId;
use jack_core::lang::symbols::{self, SymbolId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
