use crate::complexity::DefaultOperationComplexityCalculator;
use crate::complexity::OperationComplexityCalculator;
use crate::depth::OperationDepthCalculator;
use crate::document::PartId;
use crate::messages::GraphQLMessage;
use crate::messages::codes;
use crate::plan::DefaultExecutableOperationGenerator;
use crate::plan::ExecutableOperationGenerator;
use crate::plan::ExecutionPlan;
use crate::QueryDocument;
use crate::schema::Schema;

/// Turns one operation of a validated document into an [`ExecutionPlan`],
/// enforcing the schema's
/// [`max_query_depth`](crate::SchemaConfiguration::max_query_depth) and
/// [`max_query_complexity`](crate::SchemaConfiguration::max_query_complexity).
///
/// An operation that is too deep is rejected before any conversion work is
/// done. An operation that is too complex still carries its executable
/// operation, so callers can report what it would have cost.
#[derive(Clone, Debug)]
pub struct ExecutionPlanGenerator<
    'schema,
    G = DefaultExecutableOperationGenerator,
    C = DefaultOperationComplexityCalculator,
> {
    complexity_calculator: C,
    depth_calculator: OperationDepthCalculator,
    operation_generator: G,
    schema: &'schema Schema,
}
impl<'schema> ExecutionPlanGenerator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self::with_components(
            schema,
            DefaultExecutableOperationGenerator::new(),
            DefaultOperationComplexityCalculator::new(),
        )
    }
}
impl<'schema, G, C> ExecutionPlanGenerator<'schema, G, C>
where
    G: ExecutableOperationGenerator,
    C: OperationComplexityCalculator,
{
    pub fn with_components(
        schema: &'schema Schema,
        operation_generator: G,
        complexity_calculator: C,
    ) -> Self {
        Self {
            complexity_calculator,
            depth_calculator: OperationDepthCalculator::new(),
            operation_generator,
            schema,
        }
    }

    pub async fn create_plan(&self, document: &QueryDocument, operation: PartId) -> ExecutionPlan {
        let configuration = self.schema.configuration();
        let mut plan = ExecutionPlan::default();

        plan.depth = self.depth_calculator.calculate(document, operation);
        if let Some(max_depth) = configuration.max_query_depth
            && plan.depth > max_depth
        {
            tracing::warn!(depth = plan.depth, max_depth, "operation exceeds the maximum depth");
            plan.messages.add(
                GraphQLMessage::critical(
                    codes::REQUEST_ABORTED,
                    format!(
                        "The operation has a depth of {}, which exceeds the maximum allowed \
                        depth of {max_depth}.",
                        plan.depth,
                    ),
                )
                .with_location(document.part(operation).location()),
            );
            return plan;
        }

        let executable = self
            .operation_generator
            .generate(self.schema, document, operation)
            .await;
        plan.messages.extend(executable.messages().iter().cloned());

        if !plan.messages.has_critical() {
            let calculated =
                self.complexity_calculator.calculate(document, operation, configuration);
            plan.estimated_complexity = calculated.max(executable.estimated_complexity());
        }
        if let Some(max_complexity) = configuration.max_query_complexity
            && plan.estimated_complexity > max_complexity
        {
            tracing::warn!(
                complexity = plan.estimated_complexity,
                max_complexity,
                "operation exceeds the maximum complexity",
            );
            plan.messages.add(
                GraphQLMessage::critical(
                    codes::REQUEST_ABORTED,
                    format!(
                        "The operation has an estimated complexity of {}, which exceeds the \
                        maximum allowed complexity of {max_complexity}.",
                        plan.estimated_complexity,
                    ),
                )
                .with_location(document.part(operation).location()),
            );
        }

        plan.operation = Some(executable);
        tracing::debug!(
            depth = plan.depth,
            complexity = plan.estimated_complexity,
            executable = plan.is_executable(),
            "created execution plan",
        );
        plan
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }
}
