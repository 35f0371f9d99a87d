use crate::GraphQLParseErrorKind;
use crate::SyntaxNodeKindTag;
use crate::parse_executable_document;
use crate::parse_schema_document;

#[test]
fn empty_document_has_no_errors_and_no_definitions() {
    let result = parse_executable_document("  # nothing here\n");
    assert!(result.is_ok());
    assert!(!result.ast().expect("tree").has_definitions());
}

#[test]
fn unclosed_selection_set_points_at_the_opening_brace() {
    let result = parse_executable_document("query { user { id }");
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnclosedDelimiter { delimiter: "{".to_string() },
    );
    let opened_at = error.notes()[0].span.expect("note points at the delimiter");
    assert_eq!(opened_at.start_inclusive.col_utf8(), 6);
}

#[test]
fn one_error_per_broken_definition() {
    let result = parse_executable_document(
        "query A { a(: 1) }
         query B { b }
         query C { c(x 1) }",
    );
    assert_eq!(result.errors.len(), 2);

    // Broken definitions are dropped, the healthy one survives.
    let tree = result.ast().expect("tree");
    assert_eq!(tree.children(tree.root()).len(), 1);
    assert_eq!(tree.tag(tree.children(tree.root())[0]), SyntaxNodeKindTag::Operation);
}

#[test]
fn empty_selection_set_is_reported() {
    let result = parse_executable_document("{ user {} }");
    assert!(result.errors.iter().any(|e| matches!(
        e.kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { .. },
    )));
}

#[test]
fn type_definition_in_executable_document_is_wrong_kind() {
    let result = parse_executable_document("type Foo { a: Int } query { a }");
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(
        result.errors[0].kind(),
        GraphQLParseErrorKind::WrongDocumentKind { .. },
    ));
    let tree = result.ast().expect("tree");
    assert_eq!(tree.children(tree.root()).len(), 1);
}

#[test]
fn operation_in_schema_document_is_wrong_kind() {
    let result = parse_schema_document("query { a }");
    assert!(matches!(
        result.errors[0].kind(),
        GraphQLParseErrorKind::WrongDocumentKind { .. },
    ));
}

#[test]
fn lexer_errors_surface_as_parse_errors() {
    let result = parse_executable_document("{ a ^ }");
    assert!(result.errors.iter().any(|e| e.kind() == &GraphQLParseErrorKind::LexerError));
}

#[test]
fn excessive_nesting_is_rejected_without_overflow() {
    let depth = 500;
    let source = format!("{}{}", "{ a ".repeat(depth), "}".repeat(depth));
    let result = parse_executable_document(&source);
    assert!(result.errors.iter().any(|e| e.kind() == &GraphQLParseErrorKind::RecursionLimit));
}

#[test]
fn unknown_directive_location_suggests_a_fix() {
    let result = parse_schema_document("directive @a on field");
    let error = &result.errors[0];
    assert!(error.message().contains("field"));
    assert!(error.notes().iter().any(|n| n.message.contains("FIELD")));
}
