use crate::document::DocumentPartKind;
use crate::document::SuppliedValueKind;
use crate::tests::utils::construct;
use crate::tests::utils::message_texts;
use crate::tests::utils::test_schema;
use gqldoc_parser::syntax::DirectiveLocation;
use gqldoc_parser::syntax::OperationType;
use gqldoc_parser::syntax::TypeExpression;

mod operations {
    use super::*;

    #[test]
    fn resolves_root_types() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "mutation M { rename(id: 1, name: \"x\") { id } }");
        let operation = document.part(document.operations()[0]).as_operation().unwrap();
        assert_eq!(operation.operation_type(), OperationType::Mutation);
        assert_eq!(operation.name(), Some("M"));
        assert_eq!(operation.root_type(), "Mutation");
        assert!(operation.selection_set().is_some());
    }

    #[test]
    fn unsupported_operation_type_is_reported() {
        let schema = crate::schema::SchemaBuilder::from_str(None, "type Query { a: Int }")
            .unwrap()
            .build()
            .unwrap();
        let (document, completed) = construct(&schema, "mutation { a } query { a }");
        assert!(completed);
        assert_eq!(document.operations().len(), 1);
        assert_eq!(
            message_texts(&document),
            vec!["The schema does not support mutation operations."],
        );
    }

    #[test]
    fn type_system_definitions_are_rejected() {
        let schema = test_schema();
        let (document, completed) = construct(&schema, "type Extra { a: Int } { version }");
        assert!(completed);
        assert_eq!(
            message_texts(&document),
            vec!["Type system definitions are not allowed in an executable document."],
        );
        assert_eq!(document.operations().len(), 1);
    }
}

mod variables {
    use super::*;

    #[test]
    fn declares_variables_and_defaults() {
        let schema = test_schema();
        let (document, _) = construct(
            &schema,
            "query Q($first: Int = 5, $id: ID!) { users(first: $first) { id } user(id: $id) { id } }",
        );
        let operation = document.part(document.operations()[0]).as_operation().unwrap();
        assert_eq!(operation.variables().keys().collect::<Vec<_>>(), vec!["first", "id"]);

        let first = document.part(operation.variables()["first"]).as_variable().unwrap();
        assert_eq!(first.type_expression(), &TypeExpression::named("Int", false));
        let default = document.part(first.default_value().unwrap()).as_supplied_value().unwrap();
        assert_eq!(default.value(), &SuppliedValueKind::Int("5".to_string()));
        assert_eq!(default.expected_type(), Some(&TypeExpression::named("Int", false)));
    }

    #[test]
    fn duplicates_do_not_overwrite() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "query ($a: Int, $a: String) { version }");
        let operation = document.part(document.operations()[0]).as_operation().unwrap();
        assert_eq!(operation.variables().len(), 1);
        assert_eq!(operation.duplicate_variables().len(), 1);

        let first = document.part(operation.variables()["a"]).as_variable().unwrap();
        assert_eq!(first.type_expression(), &TypeExpression::named("Int", false));
    }

    #[test]
    fn unknown_variable_type_is_reported() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "query ($a: Missing) { version }");
        assert_eq!(
            message_texts(&document),
            vec!["Unknown type \"Missing\" for variable \"$a\"."],
        );
    }
}

mod fields {
    use super::*;

    #[test]
    fn resolves_schema_fields() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ who: me { secret __typename } }");
        let fields: Vec<_> = document
            .descendants(document.operations()[0])
            .into_iter()
            .filter_map(|id| document.part(id).as_field().cloned())
            .collect();

        assert_eq!(fields[0].response_name(), "who");
        assert_eq!(fields[0].owner_type(), "Query");
        assert!(fields[0].is_secure());
        assert_eq!(fields[1].owner_type(), "User");
        assert!(fields[1].is_secure());
        assert_eq!(fields[2].name(), "__typename");
        assert!(!fields[2].is_secure());
    }

    #[test]
    fn leaf_types_cannot_have_selections() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ version { length } }");
        assert_eq!(
            message_texts(&document),
            vec!["Field \"version\" of type \"String\" cannot have a selection set."],
        );
    }

    #[test]
    fn fragment_selections_remember_their_condition() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ node(id: 1) { ... on Dog { barks } id } }");
        let fields: Vec<_> = document
            .descendants(document.operations()[0])
            .into_iter()
            .filter_map(|id| document.part(id).as_field().cloned())
            .collect();
        let barks = fields.iter().find(|f| f.name() == "barks").unwrap();
        assert_eq!(barks.owner_type(), "Dog");
        assert_eq!(barks.target_graph_type(), Some("Dog"));
        let id = fields.iter().find(|f| f.name() == "id").unwrap();
        assert_eq!(id.target_graph_type(), None);
    }
}

mod arguments_and_values {
    use super::*;

    #[test]
    fn arguments_carry_expected_types() {
        let schema = test_schema();
        let (document, _) = construct(
            &schema,
            "{ users(filter: { role: ADMIN, tags: [\"a\", \"b\"] }) { id } }",
        );
        let parts = document.descendants(document.operations()[0]);
        let argument = parts
            .iter()
            .find_map(|id| document.part(*id).as_input_argument())
            .unwrap();
        assert_eq!(argument.name(), "filter");
        assert_eq!(argument.expected_type(), &TypeExpression::named("UserFilter", false));

        let tag_items: Vec<_> = parts
            .iter()
            .filter_map(|id| document.part(*id).as_supplied_value())
            .filter(|value| matches!(value.value(), SuppliedValueKind::String(_)))
            .collect();
        assert_eq!(tag_items.len(), 2);
        assert_eq!(tag_items[0].expected_type(), Some(&TypeExpression::named("String", true)));

        let role = parts
            .iter()
            .find_map(|id| document.part(*id).as_input_object_field().filter(|f| f.name() == "role"))
            .unwrap();
        assert_eq!(role.expected_type(), Some(&TypeExpression::named("Role", false)));
    }

    #[test]
    fn unknown_argument_is_reported() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ version(format: 1) }");
        assert_eq!(
            message_texts(&document),
            vec!["Unknown argument \"format\" on field \"Query.version\"."],
        );
    }

    #[test]
    fn unknown_input_field_is_reported() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ users(filter: { colour: 1 }) { id } }");
        assert_eq!(
            message_texts(&document),
            vec!["Unknown field \"colour\" on input type \"UserFilter\"."],
        );
    }
}

mod directives_and_fragments {
    use super::*;

    #[test]
    fn directives_record_location_and_rank() {
        let schema = test_schema();
        let (document, _) = construct(
            &schema,
            "query @cached { version @tag(name: \"a\") @tag(name: \"b\") }",
        );
        let directives: Vec<_> = document
            .descendants(document.operations()[0])
            .into_iter()
            .filter_map(|id| document.part(id).as_directive().cloned())
            .filter(|directive| directive.location() == DirectiveLocation::Field)
            .collect();
        let operation_directive = document
            .children_of_kind(document.operations()[0], DocumentPartKind::Directive)
            .next()
            .unwrap();
        assert_eq!(
            document.part(operation_directive).as_directive().unwrap().location(),
            DirectiveLocation::Query,
        );
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].location(), DirectiveLocation::Field);
        assert_eq!(directives[0].rank(), 0);
        assert_eq!(directives[1].rank(), 1);
    }

    #[test]
    fn unknown_directive_is_reported() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ version @nope }");
        assert_eq!(message_texts(&document), vec!["Unknown directive \"@nope\"."]);
    }

    #[test]
    fn fragments_are_created_unlinked() {
        let schema = test_schema();
        let (document, _) = construct(
            &schema,
            "{ dog { ...DogFields ... { name } } } fragment DogFields on Dog { barks }",
        );
        assert_eq!(document.named_fragments().len(), 1);
        assert_eq!(document.fragment_spreads().len(), 1);

        let spread = document.part(document.fragment_spreads()[0]).as_fragment_spread().unwrap();
        assert_eq!(spread.name(), "DogFields");
        assert_eq!(spread.fragment(), None);

        let inline = document
            .descendants(document.operations()[0])
            .into_iter()
            .find_map(|id| document.part(id).as_inline_fragment().cloned())
            .unwrap();
        assert_eq!(inline.type_condition(), None);
        assert_eq!(inline.target_graph_type(), "Dog");

        let fragment = document.part(document.named_fragments()[0]);
        assert_eq!(fragment.parent(), None);
        let fragment = fragment.as_named_fragment().unwrap();
        assert_eq!(fragment.type_condition(), "Dog");
        assert!(!fragment.is_referenced());
    }

    #[test]
    fn unknown_type_condition_is_reported() {
        let schema = test_schema();
        let (document, _) = construct(&schema, "{ dog { ... on Cat { name } } }");
        assert_eq!(
            message_texts(&document),
            vec!["Unknown type \"Cat\" in fragment type condition."],
        );
    }
}
