use crate::construction::DocumentConstructionRuleProcessor;
use crate::linking::DocumentAggregator;
use crate::linking::FragmentLinker;
use crate::messages::GraphQLMessage;
use crate::messages::codes;
use crate::QueryDocument;
use crate::schema::Schema;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRuleProcessor;
use gqldoc_parser::GraphQLParseError;

type Result<T> = std::result::Result<T, DocumentGeneratorError>;

/// Query text that could not be turned into a [`QueryDocument`] at all.
///
/// Semantic problems are not errors: they are recorded as messages on the
/// returned document.
#[derive(Clone, Debug, thiserror::Error)]
pub enum DocumentGeneratorError {
    #[error("The query text is empty")]
    EmptyQueryText,

    #[error("The query text contains {} syntax error(s)", .0.len())]
    Syntax(Vec<GraphQLParseError>),
}

/// Builds [`QueryDocument`]s from query text against one schema.
///
/// A generator holds no per-document state; one can be shared by every
/// request against its schema.
#[derive(Clone, Copy, Debug)]
pub struct DocumentGenerator<'schema> {
    aggregator: DocumentAggregator,
    construction: DocumentConstructionRuleProcessor,
    linker: FragmentLinker,
    schema: &'schema Schema,
    validation: DocumentValidationRuleProcessor,
}
impl<'schema> DocumentGenerator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            aggregator: DocumentAggregator::new(),
            construction: DocumentConstructionRuleProcessor::new(),
            linker: FragmentLinker::new(),
            schema,
            validation: DocumentValidationRuleProcessor::new(),
        }
    }

    /// Parses, constructs, links and aggregates `query_text`.
    ///
    /// A document that construction could not finish is returned unlinked,
    /// with the reason among its messages.
    pub fn create_document(&self, query_text: &str) -> Result<QueryDocument> {
        if query_text.trim().is_empty() {
            return Err(DocumentGeneratorError::EmptyQueryText);
        }

        let parse_result = gqldoc_parser::parse_mixed_document(query_text);
        if parse_result.has_errors() {
            tracing::debug!(errors = parse_result.errors.len(), "query text failed to parse");
            return Err(DocumentGeneratorError::Syntax(parse_result.errors));
        }

        let mut document = QueryDocument::new();
        let Some(tree) = parse_result.into_ast().filter(|tree| tree.has_definitions()) else {
            document.messages_mut().add(GraphQLMessage::critical(
                codes::SYNTAX_ERROR,
                "The query document does not contain any operations or fragments.",
            ));
            return Ok(document);
        };
        tracing::trace!(nodes = tree.node_count(), "parsed query text");

        if !self.construction.execute(self.schema, &tree, &mut document) {
            return Ok(document);
        }
        self.linker.link(&mut document);
        self.aggregator.aggregate(&mut document);
        Ok(document)
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Runs the validation rules and records their messages on `document`.
    /// Returns `true` when the document has no Critical message.
    ///
    /// Validating a document a second time adds no messages.
    pub fn validate_document(&self, document: &mut QueryDocument) -> bool {
        if !document.is_validated() {
            let mut context = DocumentValidationContext::new(document, self.schema);
            self.validation.execute(&mut context);
            let messages = context.into_messages();
            document.messages_mut().extend(messages);
            document.is_validated = true;
        }
        !document.messages().has_critical()
    }
}
