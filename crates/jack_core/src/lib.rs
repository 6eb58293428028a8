//! Canonical language vocabulary for the Jack compiler front end.
//!
//! This crate is intentionally small and dependency-free. It owns the reserved-word and symbol tables that the lexer
//! classifies against and that the parser uses to name grammar positions.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no syntax types.

pub mod lang;
