use crate::token::GraphQLToken;

/// Marker trait for lexers: iterators that produce [`GraphQLToken`]s.
///
/// Lexers skip ignored tokens (whitespace, commas, comments), emit
/// [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error) tokens
/// instead of stopping at bad input, and finish with exactly one
/// [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token.
/// Lookahead and buffering live in
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
