//! A GraphQL lexer and recursive descent parser that records every syntax
//! error it can recover from and produces an arena-allocated [`SyntaxTree`].
//!
//! Executable documents (operations and fragments), schema documents (type
//! system definitions), and documents mixing both can be parsed. Downstream
//! semantic analysis walks the tree by [`SyntaxNodeId`] rather than by
//! reference, so a tree is released by simply dropping it.

mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod parse_result;
mod source_position;
pub mod syntax;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::DocumentKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_result::ParseResult;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use syntax::SyntaxNode;
pub use syntax::SyntaxNodeId;
pub use syntax::SyntaxNodeKind;
pub use syntax::SyntaxNodeKindTag;
pub use syntax::SyntaxTree;

/// Parse `source` as a document that may contain both executable and
/// type-system definitions.
pub fn parse_mixed_document(source: &str) -> ParseResult<SyntaxTree> {
    GraphQLParser::new(source).parse_mixed_document()
}

/// Parse `source` as an executable document (operations and fragments only).
pub fn parse_executable_document(source: &str) -> ParseResult<SyntaxTree> {
    GraphQLParser::new(source).parse_executable_document()
}

/// Parse `source` as a schema document (type-system definitions only).
pub fn parse_schema_document(source: &str) -> ParseResult<SyntaxTree> {
    GraphQLParser::new(source).parse_schema_document()
}

#[cfg(test)]
mod tests;
