use crate::SchemaConfiguration;
use crate::document::PartId;
use crate::loc::SourceLocation;
use crate::messages::GraphQLMessage;
use crate::messages::GraphQLMessageCollection;
use crate::messages::GraphQLMessageSeverity;
use crate::messages::codes;
use crate::QueryDocument;
use crate::schema::Schema;

/// What a [`DocumentValidationRule`](crate::validation::DocumentValidationRule)
/// checks, plus the messages recorded so far.
pub struct DocumentValidationContext<'a> {
    document: &'a QueryDocument,
    messages: GraphQLMessageCollection,
    schema: &'a Schema,
}
impl<'a> DocumentValidationContext<'a> {
    pub fn new(document: &'a QueryDocument, schema: &'a Schema) -> Self {
        Self {
            document,
            messages: GraphQLMessageCollection::new(),
            schema,
        }
    }

    /// Every part owned by an operation or named fragment, definitions
    /// included, in document order. Parts detached from the tree are left
    /// out.
    pub fn attached_parts(&self) -> Vec<PartId> {
        let document = self.document;
        let mut definitions: Vec<PartId> = document
            .operations()
            .iter()
            .chain(document.named_fragments())
            .copied()
            .collect();
        definitions.sort();

        let mut parts = vec![];
        for definition in definitions {
            parts.push(definition);
            parts.extend(document.descendants(definition));
        }
        parts
    }

    pub fn configuration(&self) -> &'a SchemaConfiguration {
        self.schema.configuration()
    }

    /// Records a Critical `INVALID_DOCUMENT` message.
    pub fn critical(
        &mut self,
        rule_reference: &str,
        location: SourceLocation,
        message: impl Into<String>,
    ) {
        self.report(GraphQLMessageSeverity::Critical, rule_reference, location, message);
    }

    pub fn document(&self) -> &'a QueryDocument {
        self.document
    }

    pub fn into_messages(self) -> GraphQLMessageCollection {
        self.messages
    }

    pub fn messages(&self) -> &GraphQLMessageCollection {
        &self.messages
    }

    pub fn report(
        &mut self,
        severity: GraphQLMessageSeverity,
        rule_reference: &str,
        location: SourceLocation,
        message: impl Into<String>,
    ) {
        self.messages.add(
            GraphQLMessage::new(severity, codes::INVALID_DOCUMENT, message)
                .with_location(location)
                .with_rule_reference(rule_reference),
        );
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}
