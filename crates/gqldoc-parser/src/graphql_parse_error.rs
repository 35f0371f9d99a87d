use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A parse error with location information and contextual notes.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Primary, human readable description (e.g. "Expected `:` after
    /// argument name").
    message: String,

    /// Where the error was detected. For "expected X" errors this is where X
    /// should have appeared.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,

    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Converts a lexer error token into a parse error, keeping the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self::with_notes(message, span, GraphQLParseErrorKind::LexerError, lexer_notes)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// When `source` is provided the offending line is echoed with a caret
    /// under the error column:
    /// ```text
    /// error: Expected `:` after argument name
    ///   --> 1:12
    ///    |
    ///  1 | { user(id 4) { name } }
    ///    |           ^
    ///   = help: ...
    /// ```
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let line = self.span.start_inclusive.line();
        let col = self.span.start_inclusive.col_utf8();
        let mut out = format!("error: {}\n  --> {}:{}\n", self.message, line + 1, col + 1);

        if let Some(line_text) = source.and_then(|src| src.lines().nth(line)) {
            let gutter = (line + 1).to_string();
            let pad = " ".repeat(gutter.len());
            out.push_str(&format!("{pad} |\n"));
            out.push_str(&format!("{gutter} | {line_text}\n"));
            out.push_str(&format!("{pad} | {}^\n", " ".repeat(col)));
        }

        for note in &self.notes {
            out.push_str(&note.format_line());
            out.push('\n');
        }
        out
    }

    /// Formats this error as `line:col: message` (1-based).
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}: {}",
            self.span.start_inclusive.line() + 1,
            self.span.start_inclusive.col_utf8() + 1,
            self.message,
        )
    }
}
