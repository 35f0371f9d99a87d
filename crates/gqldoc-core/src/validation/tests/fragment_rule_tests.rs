use super::rule_messages;
use crate::messages::GraphQLMessageSeverity;
use crate::tests::utils::test_schema;
use crate::tests::utils::validated_document;

#[test]
fn fragment_names_are_unique() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "{ dog { ...A } } fragment A on Dog { name } fragment A on Dog { barks }",
    );
    assert_eq!(
        rule_messages(&document, "5.5.1.1"),
        vec!["There can be only one fragment named \"A\"."],
    );
    // Both definitions count as used.
    assert!(rule_messages(&document, "5.5.1.4").is_empty());
}

#[test]
fn fragments_condition_on_composite_types() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "{ dog { ...Scalar ... on Boolean { name } } } fragment Scalar on String { length }",
    );
    assert_eq!(
        rule_messages(&document, "5.5.1.3"),
        vec![
            "Fragment cannot condition on non composite type \"Boolean\".",
            "Fragment \"Scalar\" cannot condition on non composite type \"String\".",
        ],
    );
}

#[test]
fn unused_fragments_are_warnings() {
    let schema = test_schema();
    let document = validated_document(&schema, "{ version } fragment Unused on Dog { name }");
    let message = document.messages().for_rule("5.5.1.4").next().unwrap();
    assert_eq!(message.severity, GraphQLMessageSeverity::Warning);
    assert_eq!(message.message, "Fragment \"Unused\" is never used.");
}

#[test]
fn fragments_spread_only_by_unused_fragments_are_unused() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "{ version } fragment U on User { ...V } fragment V on User { id }",
    );
    assert_eq!(
        rule_messages(&document, "5.5.1.4"),
        vec!["Fragment \"U\" is never used.", "Fragment \"V\" is never used."],
    );
}

#[test]
fn fragments_reached_through_other_fragments_are_used() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "{ me { ...U } } fragment U on User { ...V } fragment V on User { id }",
    );
    assert!(rule_messages(&document, "5.5.1.4").is_empty());
}

#[test]
fn spreads_must_name_a_fragment() {
    let schema = test_schema();
    let document = validated_document(&schema, "{ dog { ...Missing } }");
    assert_eq!(rule_messages(&document, "5.5.2.1"), vec!["Unknown fragment \"Missing\"."]);

    let spread = document.part(document.fragment_spreads()[0]).as_fragment_spread().unwrap();
    assert_eq!(spread.fragment(), None);
}

#[test]
fn fragment_cycles_are_rejected() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        concat!(
            "{ dog { owner { ...A } } }",
            "fragment A on User { friends { ...B } }",
            "fragment B on User { friends { ...A } }",
            "fragment Self on User { ...Self }",
        ),
    );
    assert_eq!(
        rule_messages(&document, "5.5.2.2"),
        vec![
            "Cannot spread fragment \"A\" within itself: A -> B -> A.",
            "Cannot spread fragment \"Self\" within itself: Self -> Self.",
        ],
    );
}

#[test]
fn spreads_must_be_possible() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "{ dog { ... on User { id } ...UserFields ... on Node { id } } } fragment UserFields on User { name }",
    );
    assert_eq!(
        rule_messages(&document, "5.5.2.3"),
        vec![
            "Fragment cannot be spread here as objects of type \"Dog\" can never be of type \"User\".",
            "Fragment \"UserFields\" cannot be spread here as objects of type \"Dog\" can never be of \
            type \"User\".",
        ],
    );

    let document = validated_document(
        &schema,
        "{ search(text: \"x\") { ... on Dog { barks } ... on Node { id } } }",
    );
    assert!(rule_messages(&document, "5.5.2.3").is_empty());
}
