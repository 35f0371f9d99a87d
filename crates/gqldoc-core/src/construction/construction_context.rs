use crate::document::DocumentPart;
use crate::document::DocumentPartData;
use crate::document::PartId;
use crate::loc::SourceLocation;
use crate::messages::GraphQLMessage;
use crate::messages::codes;
use crate::QueryDocument;
use crate::schema::Schema;
use gqldoc_parser::SyntaxNodeId;
use gqldoc_parser::SyntaxNodeKind;
use gqldoc_parser::SyntaxTree;

/// The state a [`ConstructionRule`](crate::construction::ConstructionRule)
/// sees for the node being processed.
pub struct ConstructionContext<'a> {
    pub(crate) created_part: Option<PartId>,
    pub(crate) document: &'a mut QueryDocument,
    pub(crate) node: SyntaxNodeId,
    pub(crate) parent_part: Option<PartId>,
    pub(crate) schema: &'a Schema,
    pub(crate) tree: &'a SyntaxTree,
}
impl<'a> ConstructionContext<'a> {
    /// Adds a part beneath the current parent part. Children of the current
    /// node will be attached to it.
    pub fn create_part(&mut self, data: DocumentPartData) -> PartId {
        let id = self.document.add_part(data, self.parent_part, self.location());
        self.created_part = Some(id);
        id
    }

    pub fn document(&self) -> &QueryDocument {
        self.document
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::from_span(self.tree.span(self.node))
    }

    pub fn node(&self) -> SyntaxNodeId {
        self.node
    }

    pub fn node_kind(&self) -> &'a SyntaxNodeKind {
        self.tree.kind(self.node)
    }

    pub fn parent_part(&self) -> Option<&DocumentPart> {
        self.parent_part.map(|id| self.document.part(id))
    }

    pub fn parent_part_id(&self) -> Option<PartId> {
        self.parent_part
    }

    /// Records a Critical `INVALID_DOCUMENT` message at the current node.
    pub fn report(&mut self, message: impl Into<String>) {
        let location = self.location();
        self.document.messages_mut().add(
            GraphQLMessage::critical(codes::INVALID_DOCUMENT, message)
                .with_location(location),
        );
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }
}
