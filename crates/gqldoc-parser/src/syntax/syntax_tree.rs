use crate::GraphQLSourceSpan;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeChildren;
use crate::syntax::SyntaxNodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxNodeKindTag;

/// The node table produced by one parse.
///
/// Node `0` is always the `Document` root.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub(crate) fn new() -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.push_root();
        tree
    }

    fn push_root(&mut self) {
        self.nodes.push(SyntaxNode {
            kind: SyntaxNodeKind::Document,
            span: GraphQLSourceSpan::default(),
            parent: None,
            children: SyntaxNodeChildren::new(),
        });
    }

    pub fn root(&self) -> SyntaxNodeId {
        SyntaxNodeId(0)
    }

    /// `true` when the document contains at least one definition.
    pub fn has_definitions(&self) -> bool {
        !self.nodes[0].children.is_empty()
    }

    pub fn node(&self, id: SyntaxNodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: SyntaxNodeId) -> &SyntaxNodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn tag(&self, id: SyntaxNodeId) -> SyntaxNodeKindTag {
        self.nodes[id.index()].kind.tag()
    }

    pub fn span(&self, id: SyntaxNodeId) -> &GraphQLSourceSpan {
        &self.nodes[id.index()].span
    }

    pub fn parent(&self, id: SyntaxNodeId) -> Option<SyntaxNodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: SyntaxNodeId) -> &[SyntaxNodeId] {
        &self.nodes[id.index()].children
    }

    /// Children of `id` whose kind has the given tag.
    pub fn children_tagged(
        &self,
        id: SyntaxNodeId,
        tag: SyntaxNodeKindTag,
    ) -> impl Iterator<Item = SyntaxNodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.tag(*child) == tag)
    }

    /// The first child that is a value node, e.g. an argument's value or a
    /// variable's default value.
    pub fn value_child(&self, id: SyntaxNodeId) -> Option<SyntaxNodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.tag(*child).is_value())
    }

    /// Every node id in depth-first pre-order, starting at the root.
    pub fn walk(&self) -> Vec<SyntaxNodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Releases every node, leaving an empty document root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.push_root();
    }

    // =========================================================================
    // Construction (parser only)
    // =========================================================================

    pub(crate) fn add_node(
        &mut self,
        kind: SyntaxNodeKind,
        span: GraphQLSourceSpan,
        parent: SyntaxNodeId,
    ) -> SyntaxNodeId {
        let id = SyntaxNodeId(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode {
            kind,
            span,
            parent: Some(parent),
            children: SyntaxNodeChildren::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub(crate) fn kind_mut(&mut self, id: SyntaxNodeId) -> &mut SyntaxNodeKind {
        &mut self.nodes[id.index()].kind
    }

    pub(crate) fn set_span_end(&mut self, id: SyntaxNodeId, span: &GraphQLSourceSpan) {
        self.nodes[id.index()].span.end_exclusive = span.end_exclusive;
    }

    pub(crate) fn set_root_span(&mut self, span: GraphQLSourceSpan) {
        self.nodes[0].span = span;
    }

    /// Number of nodes allocated so far, for use with
    /// [`truncate`](Self::truncate).
    pub(crate) fn mark(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node created after `mark` and unlinks them from their
    /// parents. Used to discard a definition that failed to parse.
    pub(crate) fn truncate(&mut self, mark: usize) {
        if mark >= self.nodes.len() {
            return;
        }
        self.nodes.truncate(mark);
        for node in &mut self.nodes {
            node.children.retain(|child| child.index() < mark);
        }
    }
}
