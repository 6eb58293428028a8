//! Output trace: the nested, tagged-line rendering of a parsed program.
//!
//! A [`Trace`] is an append-only list of [`TraceLine`]s. Each line is an opening tag, a closing tag, or a leaf that
//! wraps one token's kind and exact lexeme:
//!
//! ```text
//! <class>
//! <identifier>Main</identifier>
//! <symbol>{</symbol>
//! <symbol>}</symbol>
//! </class>
//! ```
//!
//! ## Notes
//! - Leaf text is the lexeme as scanned. Nothing is escaped; string constants keep their quotes.

use std::fmt;

use crate::lexer::{Token, TokenKind};

/// Structural node names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Class,
    SubroutineDec,
    ParameterList,
    VarDec,
    LetDec,
    ReturnDec,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Class => "class",
            Tag::SubroutineDec => "subroutineDec",
            Tag::ParameterList => "parameterList",
            Tag::VarDec => "varDec",
            Tag::LetDec => "letDec",
            Tag::ReturnDec => "returnDec",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLine {
    Open(Tag),
    Close(Tag),
    Leaf { kind: TokenKind, text: String },
}

impl TraceLine {
    /// Leaf line re-emitting `token` under its own kind's tag.
    pub fn leaf(token: &Token) -> Self {
        TraceLine::Leaf {
            kind: token.kind,
            text: token.text.clone(),
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLine::Open(tag) => write!(f, "<{tag}>"),
            TraceLine::Close(tag) => write!(f, "</{tag}>"),
            TraceLine::Leaf { kind, text } => {
                let tag = kind.tag();
                write!(f, "<{tag}>{text}</{tag}>")
            }
        }
    }
}

/// Ordered, append-only sequence of trace lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    lines: Vec<TraceLine>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: Tag) {
        self.lines.push(TraceLine::Open(tag));
    }

    pub fn close(&mut self, tag: Tag) {
        self.lines.push(TraceLine::Close(tag));
    }

    pub fn leaf(&mut self, token: &Token) {
        self.lines.push(TraceLine::leaf(token));
    }

    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceLine> {
        self.lines.iter()
    }

    /// Render every line as text, indenting nested lines by `indent_width` spaces per open tag.
    ///
    /// An `indent_width` of 0 yields the flat form.
    pub fn render(&self, indent_width: usize) -> Vec<String> {
        let mut depth = 0usize;
        let mut out = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if let TraceLine::Close(_) = line {
                depth = depth.saturating_sub(1);
            }
            out.push(format!("{:width$}{line}", "", width = depth * indent_width));
            if let TraceLine::Open(_) = line {
                depth += 1;
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceLine;
    type IntoIter = std::slice::Iter<'a, TraceLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
