use crate::construction::rules::rules_for;
use crate::document::DocumentPartKind;
use crate::messages::codes;
use crate::tests::utils::construct;
use crate::tests::utils::message_texts;
use crate::tests::utils::test_schema;
use gqldoc_parser::SyntaxNodeKindTag;

#[test]
fn every_node_kind_has_rules() {
    let tags = [
        SyntaxNodeKindTag::Document,
        SyntaxNodeKindTag::Operation,
        SyntaxNodeKindTag::Variable,
        SyntaxNodeKindTag::FieldSelectionSet,
        SyntaxNodeKindTag::Field,
        SyntaxNodeKindTag::InputArgument,
        SyntaxNodeKindTag::Directive,
        SyntaxNodeKindTag::FragmentSpread,
        SyntaxNodeKindTag::InlineFragment,
        SyntaxNodeKindTag::NamedFragment,
        SyntaxNodeKindTag::ScalarValue,
        SyntaxNodeKindTag::ListValue,
        SyntaxNodeKindTag::ComplexValueField,
        SyntaxNodeKindTag::TypeDefinition,
    ];
    for tag in tags {
        assert!(!rules_for(tag).is_empty(), "no rules for {tag:?}");
    }
}

#[test]
fn builds_parts_in_source_order() {
    let schema = test_schema();
    let (document, completed) = construct(&schema, "{ user(id: 1) { id name } version }");
    assert!(completed);
    assert!(document.messages().is_empty());

    let operation = document.operations()[0];
    let root_set = document.selection_set_of(operation).unwrap();
    let fields: Vec<_> = document
        .children_of_kind(root_set, DocumentPartKind::Field)
        .map(|id| document.part(id).as_field().unwrap().name().to_string())
        .collect();
    assert_eq!(fields, vec!["user", "version"]);

    let kinds: Vec<_> = document
        .descendants(operation)
        .into_iter()
        .map(|id| document.kind(id))
        .collect();
    assert_eq!(
        kinds,
        vec![
            DocumentPartKind::FieldSelectionSet,
            DocumentPartKind::Field,
            DocumentPartKind::InputArgument,
            DocumentPartKind::SuppliedValue,
            DocumentPartKind::FieldSelectionSet,
            DocumentPartKind::Field,
            DocumentPartKind::Field,
            DocumentPartKind::Field,
        ],
    );
}

#[test]
fn empty_document_aborts() {
    let schema = test_schema();
    let (document, completed) = construct(&schema, "");
    assert!(!completed);
    assert!(document.messages().contains_code(codes::INVALID_DOCUMENT));
    assert_eq!(document.part_count(), 0);
}

#[test]
fn unknown_field_skips_only_its_branch() {
    let schema = test_schema();
    let (document, completed) = construct(&schema, "{ nope { deeper } version }");
    assert!(completed);
    assert_eq!(
        message_texts(&document),
        vec!["Cannot query field \"nope\" on type \"Query\"."],
    );

    let root_set = document.selection_set_of(document.operations()[0]).unwrap();
    let set = document.part(root_set).as_field_selection_set().unwrap();
    assert!(set.contains_alias("version"));
    assert!(!set.contains_alias("nope"));
}

#[test]
fn diagnostics_follow_source_order() {
    let schema = test_schema();
    let (document, _) = construct(&schema, "{ first second }");
    assert_eq!(
        message_texts(&document),
        vec![
            "Cannot query field \"first\" on type \"Query\".",
            "Cannot query field \"second\" on type \"Query\".",
        ],
    );
    let location = document.messages().iter().next().unwrap().location.unwrap();
    assert_eq!((location.line, location.column), (1, 3));
}
