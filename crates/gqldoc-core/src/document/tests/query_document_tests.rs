use crate::document::DocumentPartError;
use crate::document::DocumentPartKind;
use crate::tests::utils::build_document;
use crate::tests::utils::only_operation;
use crate::tests::utils::test_schema;

mod structure {
    use super::*;

    #[test]
    fn definitions_are_indexed_in_source_order() {
        let schema = test_schema();
        let document = build_document(
            &schema,
            "fragment F on Dog { name } query A { dog { ...F } } query B { version }",
        );
        assert_eq!(document.operations().len(), 2);
        assert_eq!(document.named_fragments().len(), 1);
        assert_eq!(document.operation_named("B"), Some(document.operations()[1]));
        assert_eq!(document.operation_named("C"), None);
    }

    #[test]
    fn enclosing_definition_walks_up_to_the_owner() {
        let schema = test_schema();
        let document =
            build_document(&schema, "{ dog { ...F } } fragment F on Dog { owner { id } }");
        let fragment = document.named_fragments()[0];
        let deepest = *document.descendants(fragment).last().unwrap();

        assert_eq!(document.kind(deepest), DocumentPartKind::Field);
        assert_eq!(document.enclosing_definition(deepest), Some(fragment));
        assert_eq!(document.enclosing_definition(fragment), Some(fragment));
    }

    #[test]
    fn selection_sets_track_response_names() {
        let schema = test_schema();
        let mut document = build_document(&schema, "{ dog { name name alias: barks } }");
        let root = document.selection_set_of(only_operation(&document)).unwrap();
        let dog = document.children(root)[0];
        let set = document.selection_set_of(dog).unwrap();
        let names = |document: &crate::QueryDocument| -> Vec<String> {
            let part = document.part(set).as_field_selection_set().unwrap();
            part.response_names().map(str::to_string).collect()
        };
        assert_eq!(names(&document), vec!["name", "alias"]);

        let [first, second, alias] = *document.children(set) else {
            panic!("expected three selections");
        };
        document.detach_part(first);
        assert_eq!(names(&document), vec!["name", "alias"]);
        document.detach_part(second);
        document.detach_part(alias);
        assert!(names(&document).is_empty());
        assert!(document.children(set).is_empty());
        assert_eq!(document.parent(alias), None);
    }
}

mod fragments {
    use super::*;

    #[test]
    fn spreads_link_only_once() {
        let schema = test_schema();
        let mut document = build_document(&schema, "{ dog { ...F } } fragment F on Dog { name }");
        let spread = document.fragment_spreads()[0];
        let fragment = document.named_fragments()[0];

        assert_eq!(
            document.link_fragment(spread, fragment),
            Err(DocumentPartError::FragmentAlreadyAssigned {
                spread_name: "F".to_string(),
            }),
        );
    }

    #[test]
    fn duplicate_fragments_are_all_found_by_name() {
        let schema = test_schema();
        let document = build_document(
            &schema,
            "{ dog { ...F } } fragment F on Dog { name } fragment F on Dog { barks }",
        );
        let called_f: Vec<_> = document.named_fragments_called("F").collect();
        assert_eq!(called_f, document.named_fragments().to_vec());
        assert_eq!(document.named_fragments_called("G").count(), 0);
    }

    #[test]
    fn reachable_fragments_are_transitive_and_unique() {
        let schema = test_schema();
        let document = build_document(
            &schema,
            concat!(
                "{ dog { ...A ...B } }",
                "fragment A on Dog { ...B }",
                "fragment B on Dog { name ...A }",
                "fragment C on Dog { barks }",
            ),
        );
        let [a, b, _c] = *document.named_fragments() else {
            panic!("expected three fragments");
        };
        assert_eq!(document.reachable_fragments(only_operation(&document)), vec![a, b]);
        assert_eq!(document.reachable_fragments(a), vec![b]);
    }
}
