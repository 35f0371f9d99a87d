use super::rule_messages;
use crate::tests::utils::test_schema;
use crate::tests::utils::validated_document;

#[test]
fn operation_names_are_unique() {
    let schema = test_schema();
    let document = validated_document(&schema, "query A { version } query A { version } query B { version }");
    assert_eq!(
        rule_messages(&document, "5.2.1.1"),
        vec!["There can be only one operation named \"A\"."],
    );
}

#[test]
fn anonymous_operation_must_be_alone() {
    let schema = test_schema();
    let document = validated_document(&schema, "{ version } query B { version }");
    assert_eq!(
        rule_messages(&document, "5.2.2.1"),
        vec!["This anonymous operation must be the only defined operation."],
    );

    let document = validated_document(&schema, "{ version }");
    assert!(document.messages().is_empty());
}

#[test]
fn subscriptions_select_one_root_field() {
    let schema = test_schema();
    let document = validated_document(
        &schema,
        "subscription S { userRenamed { id } ...More } fragment More on Subscription { dogAdopted { id } }",
    );
    assert_eq!(
        rule_messages(&document, "5.2.3.1"),
        vec!["Subscription \"S\" must select only one top level field."],
    );

    let document = validated_document(&schema, "subscription { userRenamed { id } __typename }");
    assert_eq!(
        rule_messages(&document, "5.2.3.1"),
        vec!["Anonymous subscription must not select an introspection top level field."],
    );

    let document = validated_document(&schema, "subscription { a: userRenamed { id } a: userRenamed { name } }");
    assert!(rule_messages(&document, "5.2.3.1").is_empty());
}

#[test]
fn composite_fields_need_selections() {
    let schema = test_schema();
    let document = validated_document(&schema, "{ user(id: 1) }");
    assert_eq!(
        rule_messages(&document, "5.3.3"),
        vec!["Field \"user\" of type \"User\" must have a selection of subfields."],
    );
}

#[test]
fn arguments_are_unique_and_required_ones_present() {
    let schema = test_schema();
    let document = validated_document(&schema, "{ user(id: 1, id: 2) { id } node { id } }");
    assert_eq!(
        rule_messages(&document, "5.4.2"),
        vec!["There can be only one argument named \"id\"."],
    );
    assert_eq!(
        rule_messages(&document, "5.4.2.1"),
        vec!["Field \"node\" argument \"id\" of type \"ID!\" is required, but it was not provided."],
    );
}

#[test]
fn directive_arguments_are_required_too() {
    let schema = test_schema();
    let document = validated_document(&schema, "{ version @skip }");
    assert_eq!(
        rule_messages(&document, "5.4.2.1"),
        vec!["Directive \"@skip\" argument \"if\" of type \"Boolean!\" is required, but it was not provided."],
    );
}

#[test]
fn directives_in_valid_locations() {
    let schema = test_schema();
    let document = validated_document(&schema, "query @tag(name: \"x\") { version @cached @cached }");
    assert_eq!(
        rule_messages(&document, "5.7.2"),
        vec!["Directive \"@tag\" may not be used on QUERY."],
    );
    assert_eq!(
        rule_messages(&document, "5.7.3"),
        vec!["The directive \"@cached\" can only be used once at this location."],
    );

    let document = validated_document(&schema, "{ version @tag(name: \"a\") @tag(name: \"b\") }");
    assert!(rule_messages(&document, "5.7.3").is_empty());
}
