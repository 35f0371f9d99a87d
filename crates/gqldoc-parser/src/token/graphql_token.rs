use crate::GraphQLSourceSpan;
use crate::token::GraphQLTokenKind;

/// A GraphQL token with its source span.
///
/// Ignored tokens (whitespace, commas, comments) never surface as tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }
}
