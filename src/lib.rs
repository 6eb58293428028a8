#![forbid(unsafe_code)]
//! Jack compiler front end.
//!
//! Scans a Jack source text into classified tokens, checks it against the grammar, and emits a nested tagged trace of
//! its syntax. The scanner and parser live in `jack_syntax`; this crate adds the command-line collaborator that reads
//! files, prints traces, and reports diagnostics.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod frontend;
pub mod output;

pub use frontend::{analyze, diagnostics, lexer, parser, trace};
pub use output::OutputConfig;
