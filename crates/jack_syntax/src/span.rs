//! Source locations.

/// Byte range `[start, end)` of a lexeme in its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_span_conversion() {
        let span: miette::SourceSpan = Span::new(4, 9).into();
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_point_is_empty() {
        assert!(Span::point(3).is_empty());
        assert!(!Span::new(3, 4).is_empty());
    }
}
