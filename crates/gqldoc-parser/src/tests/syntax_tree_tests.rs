use crate::SyntaxNodeKindTag;
use crate::tests::utils::parse_executable;

#[test]
fn walk_is_preorder_in_source_order() {
    let tree = parse_executable("{ a { b } c }");
    let tags: Vec<_> = tree.walk().into_iter().map(|id| tree.tag(id)).collect();
    assert_eq!(
        tags,
        vec![
            SyntaxNodeKindTag::Document,
            SyntaxNodeKindTag::Operation,
            SyntaxNodeKindTag::FieldSelectionSet,
            SyntaxNodeKindTag::Field,
            SyntaxNodeKindTag::FieldSelectionSet,
            SyntaxNodeKindTag::Field,
            SyntaxNodeKindTag::Field,
        ],
    );
}

#[test]
fn parents_point_back_up() {
    let tree = parse_executable("{ a { b } }");
    for id in tree.walk() {
        for child in tree.children(id) {
            assert_eq!(tree.parent(*child), Some(id));
        }
    }
    assert_eq!(tree.parent(tree.root()), None);
}

#[test]
fn reset_releases_all_nodes() {
    let mut tree = parse_executable("{ a { b } }");
    assert!(tree.node_count() > 1);
    tree.reset();
    assert_eq!(tree.node_count(), 1);
    assert!(!tree.has_definitions());
}
