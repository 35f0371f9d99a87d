use crate::SyntaxNodeId;
use crate::SyntaxNodeKind;
use crate::SyntaxTree;
use crate::parse_executable_document;
use crate::parse_mixed_document;
use crate::parse_schema_document;

pub(super) fn parse_executable(source: &str) -> SyntaxTree {
    let result = parse_executable_document(source);
    assert!(
        !result.has_errors(),
        "unexpected parse errors:\n{}",
        result.format_errors(Some(source)),
    );
    result.into_ast().expect("a tree is always produced")
}

pub(super) fn parse_schema(source: &str) -> SyntaxTree {
    let result = parse_schema_document(source);
    assert!(
        !result.has_errors(),
        "unexpected parse errors:\n{}",
        result.format_errors(Some(source)),
    );
    result.into_ast().expect("a tree is always produced")
}

pub(super) fn parse_mixed(source: &str) -> SyntaxTree {
    let result = parse_mixed_document(source);
    assert!(!result.has_errors(), "{}", result.format_errors(Some(source)));
    result.into_ast().expect("a tree is always produced")
}

/// The `index`th definition of the document.
pub(super) fn definition(tree: &SyntaxTree, index: usize) -> SyntaxNodeId {
    tree.children(tree.root())[index]
}

/// Descends through the `path` of child indexes starting at `from`.
pub(super) fn descend(tree: &SyntaxTree, from: SyntaxNodeId, path: &[usize]) -> SyntaxNodeId {
    path.iter().fold(from, |node, index| tree.children(node)[*index])
}

pub(super) fn field_name(tree: &SyntaxTree, id: SyntaxNodeId) -> &str {
    match tree.kind(id) {
        SyntaxNodeKind::Field { name, .. } => name,
        other => panic!("expected a field, found {other:?}"),
    }
}
