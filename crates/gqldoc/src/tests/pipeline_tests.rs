use crate::plan::QueryExecutionPlanGenerator;
use crate::schema::SchemaBuilder;
use crate::GraphQLMessageSeverity;
use crate::SchemaConfiguration;

const SCHEMA: &str = r#"
    type Query {
        user(id: ID!): User
    }

    type User {
        id: ID
        name: String
        friends: [User]
    }
"#;

fn schema(max_query_depth: usize) -> crate::schema::Schema {
    SchemaBuilder::from_str(None, SCHEMA)
        .unwrap()
        .set_configuration(SchemaConfiguration {
            max_query_depth: Some(max_query_depth),
            ..SchemaConfiguration::default()
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn simple_query_is_planned() {
    let schema = schema(2);
    let plan = QueryExecutionPlanGenerator::new(&schema)
        .plan_query("query { user(id: 1) { id name } }", None)
        .await;

    assert_eq!(plan.messages().severity(), None);
    assert!(plan.is_executable());
    assert_eq!(plan.depth(), 2);
}

#[tokio::test]
async fn one_level_past_the_depth_limit_is_aborted() {
    let schema = schema(2);
    let plan = QueryExecutionPlanGenerator::new(&schema)
        .plan_query("query { user(id: 1) { friends { id } } }", None)
        .await;

    assert_eq!(plan.messages().severity(), Some(GraphQLMessageSeverity::Critical));
    assert!(plan.messages().contains_code(crate::messages::codes::REQUEST_ABORTED));
}

#[test]
fn parser_is_reexported() {
    let result = crate::parser::parse_executable_document("{ user(id: 1) { id } }");
    assert!(!result.has_errors());
}
