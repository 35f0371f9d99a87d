use super::rule_messages;
use crate::messages::GraphQLMessageSeverity;
use crate::tests::utils::test_schema;
use crate::tests::utils::test_schema_with;
use crate::tests::utils::validated_document;
use crate::SchemaConfiguration;

#[test]
fn variable_names_are_unique() {
    let schema = test_schema();
    let document = validated_document(&schema, "query ($a: Int, $a: Int) { users(first: $a) { id } }");
    assert_eq!(
        rule_messages(&document, "5.8.1"),
        vec!["There can be only one variable named \"$a\"."],
    );
}

#[test]
fn variables_are_input_types() {
    let schema = test_schema();
    let document = validated_document(&schema, "query ($u: User, $r: [Role!]) { version }");
    assert_eq!(
        rule_messages(&document, "5.8.2"),
        vec!["Variable \"$u\" cannot be non-input type \"User\"."],
    );
}

#[test]
fn variables_must_be_defined() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "query Q { dog { ...F } } fragment F on Dog { owner { friends(first: $n) { id } } }",
    );
    assert_eq!(
        rule_messages(&document, "5.8.3"),
        vec!["Variable \"$n\" is not defined by operation \"Q\"."],
    );
}

#[test]
fn fragment_usages_count_as_used() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "query Q($n: Int) { dog { ...F } } fragment F on Dog { owner { friends(first: $n) { id } } }",
    );
    assert!(document.messages().is_empty(), "{:?}", document.messages());
}

#[test]
fn unused_variables_use_configured_severity() {
    let schema = test_schema();
    let document = validated_document(&schema, "query Q($unused: Int) { version }");
    let message = document.messages().for_rule("5.8.4").next().unwrap();
    assert_eq!(message.severity, GraphQLMessageSeverity::Warning);
    assert_eq!(message.message, "Variable \"$unused\" is never used in operation \"Q\".");

    let schema = test_schema_with(SchemaConfiguration {
        unused_variable_severity: GraphQLMessageSeverity::Critical,
        ..SchemaConfiguration::default()
    });
    let document = validated_document(&schema, "query Q($unused: Int) { version }");
    assert!(document.messages().has_critical());
}

#[test]
fn variable_types_must_fit_their_positions() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        concat!(
            "query ($maybe: ID, $id: ID!, $count: Int = 3, $name: String, $fallback: ID = 1) {",
            "  a: user(id: $maybe) { id }",
            "  b: user(id: $id) { id }",
            "  c: users(first: $count, filter: { name: $name }) { id }",
            "  d: user(id: $count) { id }",
            "  e: user(id: $fallback) { id }",
            "}",
        ),
    );
    assert_eq!(
        rule_messages(&document, "5.8.5"),
        vec![
            "Variable \"$maybe\" of type \"ID\" used in position expecting type \"ID!\".",
            "Variable \"$count\" of type \"Int\" used in position expecting type \"ID!\".",
        ],
    );
}
