use crate::depth::OperationDepthCalculator;
use crate::schema::SchemaBuilder;
use crate::tests::utils::build_document;
use crate::tests::utils::only_operation;
use crate::tests::utils::test_schema;
use proptest::prelude::*;

fn depth_of(text: &str) -> usize {
    let schema = test_schema();
    let document = build_document(&schema, text);
    OperationDepthCalculator::new().calculate(&document, only_operation(&document))
}

#[test]
fn leaf_fields_count_one() {
    assert_eq!(depth_of("{ version }"), 1);
    assert_eq!(depth_of("{ user(id: 1) { id name } }"), 2);
}

#[test]
fn longest_chain_wins() {
    assert_eq!(depth_of("{ version user(id: 1) { friends { friends { id } } name } }"), 4);
}

#[test]
fn inline_fragments_add_nothing() {
    assert_eq!(depth_of("{ node(id: 1) { ... on User { friends { id } } } }"), 3);
    assert_eq!(depth_of("{ dog { ... { ... { name } } } }"), 2);
}

#[test]
fn spreads_count_in_each_branch() {
    let depth = depth_of(concat!(
        "{ a: user(id: 1) { ...Friends } b: user(id: 2) { friends { ...Friends } } }",
        "fragment Friends on User { friends { id } }",
    ));
    assert_eq!(depth, 4);
}

#[test]
fn fragment_cycles_terminate() {
    let depth = depth_of(concat!(
        "{ me { ...A } }",
        "fragment A on User { friends { ...B } }",
        "fragment B on User { friends { ...A } }",
    ));
    assert_eq!(depth, 3);
    assert_eq!(depth_of("{ me { ...Self } } fragment Self on User { id ...Self }"), 2);
}

#[test]
fn unlinked_spreads_count_zero() {
    assert_eq!(depth_of("{ me { ...Missing } }"), 1);
}

proptest! {
    #[test]
    fn depth_matches_nesting(levels in 1usize..24) {
        let schema = SchemaBuilder::from_str(None, "type Query { node: Node } type Node { child: Node leaf: Int }")
            .unwrap()
            .build()
            .unwrap();
        let mut text = String::from("{ node {");
        for _ in 1..levels {
            text.push_str(" child {");
        }
        text.push_str(" leaf");
        for _ in 0..levels {
            text.push_str(" }");
        }
        text.push_str(" }");

        let document = build_document(&schema, &text);
        let depth = OperationDepthCalculator::new().calculate(&document, only_operation(&document));
        prop_assert_eq!(depth, levels + 1);
    }
}
