use crate::complexity::OperationComplexityCalculator;
use crate::document::PartId;
use crate::messages::codes;
use crate::plan::DefaultExecutableOperationGenerator;
use crate::plan::ExecutableOperation;
use crate::plan::ExecutableOperationGenerator;
use crate::plan::ExecutionPlan;
use crate::plan::ExecutionPlanGenerator;
use crate::schema::Schema;
use crate::tests::utils::build_document;
use crate::tests::utils::only_operation;
use crate::tests::utils::test_schema;
use crate::tests::utils::test_schema_with;
use crate::QueryDocument;
use crate::SchemaConfiguration;

async fn plan(schema: &Schema, text: &str) -> ExecutionPlan {
    let document = build_document(schema, text);
    ExecutionPlanGenerator::new(schema)
        .create_plan(&document, only_operation(&document))
        .await
}

fn limited(max_query_depth: Option<usize>, max_query_complexity: Option<f64>) -> Schema {
    test_schema_with(SchemaConfiguration {
        max_query_depth,
        max_query_complexity,
        ..SchemaConfiguration::default()
    })
}

struct ConstantComplexity(f64);
impl OperationComplexityCalculator for ConstantComplexity {
    fn calculate(&self, _: &QueryDocument, _: PartId, _: &SchemaConfiguration) -> f64 {
        self.0
    }
}

/// Wraps the default generator and attaches its own estimate.
struct EstimatingGenerator(f64);
impl ExecutableOperationGenerator for EstimatingGenerator {
    async fn generate(
        &self,
        schema: &Schema,
        document: &QueryDocument,
        operation: PartId,
    ) -> ExecutableOperation {
        let mut executable = DefaultExecutableOperationGenerator::new()
            .generate(schema, document, operation)
            .await;
        executable.set_estimated_complexity(self.0);
        executable
    }
}

mod basics {
    use super::*;

    #[tokio::test]
    async fn unlimited_schema_plans_everything() {
        let schema = test_schema();
        let plan = plan(&schema, "{ user(id: 1) { friends { friends { id } } } }").await;
        assert!(plan.is_executable());
        assert_eq!(plan.depth(), 4);
        // user(1) + friends(1 + 10 * friends(1 + 10 * id(1)))
        assert_eq!(plan.estimated_complexity(), 112.0);
        assert_eq!(plan.operation().map(|op| op.fields().len()), Some(1));
    }
}

mod limits {
    use super::*;

    #[tokio::test]
    async fn too_deep_operations_are_not_converted() {
        let schema = limited(Some(2), None);
        let plan = plan(&schema, "{ user(id: 1) { friends { id } } }").await;

        assert!(!plan.is_executable());
        assert!(plan.operation().is_none());
        assert_eq!(plan.depth(), 3);
        assert_eq!(plan.estimated_complexity(), 0.0);
        let message = plan.messages().iter().next().unwrap();
        assert!(message.is_critical());
        assert_eq!(message.code, codes::REQUEST_ABORTED);
    }

    #[tokio::test]
    async fn depth_equal_to_the_limit_is_allowed() {
        let schema = limited(Some(2), None);
        let plan = plan(&schema, "{ user(id: 1) { id } }").await;
        assert!(plan.is_executable());
        assert_eq!(plan.depth(), 2);
    }

    #[tokio::test]
    async fn too_complex_operations_keep_their_operation() {
        let schema = limited(None, Some(5.0));
        let plan = plan(&schema, "{ users { id } }").await;

        assert!(!plan.is_executable());
        assert!(plan.operation().is_some());
        assert_eq!(plan.estimated_complexity(), 11.0);
        assert!(plan.messages().contains_code(codes::REQUEST_ABORTED));
    }

    #[tokio::test]
    async fn complexity_equal_to_the_limit_is_allowed() {
        let schema = limited(None, Some(11.0));
        let plan = plan(&schema, "{ users { id } }").await;
        assert!(plan.is_executable());
    }

    #[tokio::test]
    async fn negative_page_sizes_do_not_hide_complexity() {
        let schema = limited(None, Some(50.0));
        let plan = plan(&schema, concat!(
            "{ a: users(first: -1001000) { id } ",
            "b: users(first: 1000) { friends(first: 1000) { id } } }",
        ))
        .await;

        assert!(!plan.is_executable());
        assert_eq!(plan.estimated_complexity(), 1_001_002.0);
        assert!(plan.messages().contains_code(codes::REQUEST_ABORTED));
    }

    #[tokio::test]
    async fn conflicts_skip_the_complexity_check() {
        let schema = limited(None, Some(0.5));
        let plan = plan(&schema, "{ dog { name: barks name } }").await;
        assert_eq!(plan.estimated_complexity(), 0.0);
        assert!(!plan.messages().contains_code(codes::REQUEST_ABORTED));
        assert_eq!(plan.messages().for_rule("5.3.2").count(), 1);
    }
}

mod components {
    use super::*;

    #[tokio::test]
    async fn custom_calculator_is_used() {
        let schema = limited(None, Some(50.0));
        let document = build_document(&schema, "{ version }");
        let generator = ExecutionPlanGenerator::with_components(
            &schema,
            DefaultExecutableOperationGenerator::new(),
            ConstantComplexity(99.0),
        );
        let plan = generator.create_plan(&document, only_operation(&document)).await;
        assert_eq!(plan.estimated_complexity(), 99.0);
        assert!(!plan.is_executable());
    }

    #[tokio::test]
    async fn larger_generator_estimate_wins() {
        let schema = test_schema();
        let document = build_document(&schema, "{ version }");
        let generator = ExecutionPlanGenerator::with_components(
            &schema,
            EstimatingGenerator(42.0),
            ConstantComplexity(3.0),
        );
        let plan = generator.create_plan(&document, only_operation(&document)).await;
        assert_eq!(plan.estimated_complexity(), 42.0);
        assert_eq!(plan.operation().map(ExecutableOperation::estimated_complexity), Some(42.0));
    }
}
