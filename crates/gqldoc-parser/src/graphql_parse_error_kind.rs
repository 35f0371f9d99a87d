use crate::DocumentKind;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant carries only the data needed to make decisions. Human
/// readable context belongs in the notes of the owning
/// [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token. The lexer's message and notes are
    /// carried by the owning error.
    #[error("lexer error")]
    LexerError,

    /// A `{`, `[` or `(` was opened but never closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A construct that must contain at least one item was empty, e.g. `{}`
    /// or `()`.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A definition that is not allowed in the kind of document being parsed
    /// (e.g. `type Foo` in an executable document).
    #[error("definition not allowed in {document_kind} document")]
    WrongDocumentKind {
        found: String,
        document_kind: DocumentKind,
    },

    /// Nesting exceeded the parser's recursion limit.
    #[error("maximum nesting depth exceeded")]
    RecursionLimit,

    /// A literal whose text could not be interpreted (integer overflow, bad
    /// string escape).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
