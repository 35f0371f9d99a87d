use crate::SourcePosition;

/// A half-open `[start_inclusive, end_exclusive)` span of source text.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span positioned at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// Produce a span starting where `self` starts and ending where `other`
    /// ends.
    pub fn through(&self, other: &GraphQLSourceSpan) -> Self {
        Self::new(self.start_inclusive, other.end_exclusive)
    }

    /// The source text covered by this span, if `source` is the text the span
    /// was produced from.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset())
    }
}
