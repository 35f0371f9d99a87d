use crate::GraphQLSourceSpan;
use crate::SmallVec;
use crate::syntax::SyntaxNodeKind;

/// Index of a node within its [`SyntaxTree`](crate::SyntaxTree).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SyntaxNodeId(pub(crate) u32);

impl SyntaxNodeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

pub type SyntaxNodeChildren = SmallVec<[SyntaxNodeId; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    pub kind: SyntaxNodeKind,
    pub span: GraphQLSourceSpan,
    pub parent: Option<SyntaxNodeId>,
    pub children: SyntaxNodeChildren,
}
