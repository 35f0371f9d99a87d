use crate::document::PartId;
use crate::messages::GraphQLMessage;
use crate::messages::GraphQLMessageCollection;
use crate::messages::codes;
use crate::plan::ExecutionPlan;
use crate::plan::ExecutionPlanGenerator;
use crate::DocumentGenerator;
use crate::DocumentGeneratorError;
use crate::QueryDocument;
use crate::schema::Schema;

/// Runs a single request's query text through the whole pipeline: build,
/// validate, select the operation, plan.
///
/// Every failure ends up as a message on the returned plan; nothing here
/// returns an error.
#[derive(Clone, Debug)]
pub struct QueryExecutionPlanGenerator<'schema> {
    document_generator: DocumentGenerator<'schema>,
    plan_generator: ExecutionPlanGenerator<'schema>,
}
impl<'schema> QueryExecutionPlanGenerator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            document_generator: DocumentGenerator::new(schema),
            plan_generator: ExecutionPlanGenerator::new(schema),
        }
    }

    pub async fn plan_query(&self, query_text: &str, operation_name: Option<&str>) -> ExecutionPlan {
        let mut document = match self.document_generator.create_document(query_text) {
            Ok(document) => document,
            Err(DocumentGeneratorError::EmptyQueryText) => {
                return request_error("The query text is empty.");
            },
            Err(DocumentGeneratorError::Syntax(errors)) => {
                let mut messages = GraphQLMessageCollection::new();
                messages.extend(errors.iter().map(GraphQLMessage::from_parse_error));
                return ExecutionPlan::from_messages(messages);
            },
        };

        if !self.document_generator.validate_document(&mut document) {
            tracing::debug!(messages = document.messages().len(), "query document is invalid");
            return ExecutionPlan::from_messages(document.messages().clone());
        }

        let operation = match select_operation(&document, operation_name) {
            Ok(operation) => operation,
            Err(message) => {
                let mut messages = document.messages().clone();
                messages.add(message);
                return ExecutionPlan::from_messages(messages);
            },
        };

        let mut plan = self.plan_generator.create_plan(&document, operation).await;
        let mut messages = document.messages().clone();
        messages.extend(plan.messages);
        plan.messages = messages;
        plan
    }
}

fn request_error(message: &str) -> ExecutionPlan {
    let mut messages = GraphQLMessageCollection::new();
    messages.add(GraphQLMessage::critical(codes::BAD_REQUEST, message));
    ExecutionPlan::from_messages(messages)
}

fn select_operation(
    document: &QueryDocument,
    operation_name: Option<&str>,
) -> Result<PartId, GraphQLMessage> {
    if let Some(name) = operation_name {
        return document.operation_named(name).ok_or_else(|| {
            GraphQLMessage::critical(
                codes::BAD_REQUEST,
                format!("Unknown operation named \"{name}\"."),
            )
        });
    }
    match document.operations() {
        [operation] => Ok(*operation),
        [] => Err(GraphQLMessage::critical(
            codes::BAD_REQUEST,
            "The query document does not contain any operations.",
        )),
        _ => Err(GraphQLMessage::critical(
            codes::BAD_REQUEST,
            "Must provide operation name if query contains multiple operations.",
        )),
    }
}
