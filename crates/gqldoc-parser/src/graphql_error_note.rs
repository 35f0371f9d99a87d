use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Rendered as `= note: ...`.
    General,

    /// Actionable suggestion. Rendered as `= help: ...`.
    Help,

    /// Link to the relevant section of the GraphQL specification. Rendered as
    /// `= spec: ...`.
    Spec,
}

impl GraphQLErrorNoteKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}

/// Additional context attached to a lexer or parser error.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Optional related location (e.g. where an unclosed `{` was opened).
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }

    pub(crate) fn format_line(&self) -> String {
        match &self.span {
            Some(span) => format!(
                "  = {}: {} (at {}:{})",
                self.kind.prefix(),
                self.message,
                span.start_inclusive.line() + 1,
                span.start_inclusive.col_utf8() + 1,
            ),
            None => format!("  = {}: {}", self.kind.prefix(), self.message),
        }
    }
}

/// Most errors carry 0-2 notes, so these are stored inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
