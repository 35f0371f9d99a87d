use crate::SyntaxNodeKind;
use crate::SyntaxNodeKindTag;
use crate::syntax::DirectiveLocation;
use crate::syntax::OperationType;
use crate::syntax::TypeDefinitionKind;
use crate::syntax::TypeExpression;
use crate::tests::utils::definition;
use crate::tests::utils::parse_mixed;
use crate::tests::utils::parse_schema;

#[test]
fn object_type_with_arguments_and_directives() {
    let tree = parse_schema(
        r#"
        "A person"
        type User implements Node & Named @key(fields: "id") {
          id: ID!
          "Their friends"
          friends(first: Int = 10, after: String): [User!]! @authorize(policy: "friends")
        }
        "#,
    );
    let user = definition(&tree, 0);
    let SyntaxNodeKind::TypeDefinition { kind, name, description, implements, is_extension, .. } =
        tree.kind(user)
    else {
        panic!("expected a type definition");
    };
    assert_eq!(*kind, TypeDefinitionKind::Object);
    assert_eq!(name, "User");
    assert_eq!(description.as_deref(), Some("A person"));
    assert_eq!(implements, &vec!["Node".to_string(), "Named".to_string()]);
    assert!(!is_extension);

    let children = tree.children(user).to_vec();
    assert_eq!(tree.tag(children[0]), SyntaxNodeKindTag::Directive);
    let friends = children[2];
    assert_eq!(
        tree.kind(friends),
        &SyntaxNodeKind::FieldDefinition {
            name: "friends".to_string(),
            description: Some("Their friends".to_string()),
            type_expression: TypeExpression::list(TypeExpression::named("User", true), true),
        },
    );
    let friend_children: Vec<_> = tree.children(friends).iter().map(|c| tree.tag(*c)).collect();
    assert_eq!(
        friend_children,
        vec![
            SyntaxNodeKindTag::InputValueDefinition,
            SyntaxNodeKindTag::InputValueDefinition,
            SyntaxNodeKindTag::Directive,
        ],
    );
}

#[test]
fn union_enum_input_and_scalar() {
    let tree = parse_schema(
        "union SearchResult = | User | Post
         enum Color { RED GREEN @deprecated }
         input Filter { name: String = \"x\", tags: [String!] }
         scalar DateTime @specifiedBy(url: \"https://example.com\")",
    );

    let SyntaxNodeKind::TypeDefinition { union_members, .. } = tree.kind(definition(&tree, 0)) else {
        panic!("expected a union");
    };
    assert_eq!(union_members, &vec!["User".to_string(), "Post".to_string()]);

    let color = definition(&tree, 1);
    assert_eq!(tree.children_tagged(color, SyntaxNodeKindTag::EnumValueDefinition).count(), 2);

    let filter = definition(&tree, 2);
    assert_eq!(tree.children_tagged(filter, SyntaxNodeKindTag::InputValueDefinition).count(), 2);

    let date_time = definition(&tree, 3);
    assert_eq!(tree.children_tagged(date_time, SyntaxNodeKindTag::Directive).count(), 1);
}

#[test]
fn schema_and_directive_definitions() {
    let tree = parse_schema(
        "schema { query: Root mutation: Mutations }
         directive @authorize(policy: String!) repeatable on FIELD_DEFINITION | OBJECT",
    );
    let schema = definition(&tree, 0);
    let entries = tree.children(schema).to_vec();
    assert_eq!(
        tree.kind(entries[0]),
        &SyntaxNodeKind::RootOperationTypeDefinition {
            operation_type: OperationType::Query,
            type_name: "Root".to_string(),
        },
    );

    let SyntaxNodeKind::DirectiveDefinition { name, locations, repeatable, .. } =
        tree.kind(definition(&tree, 1))
    else {
        panic!("expected a directive definition");
    };
    assert_eq!(name, "authorize");
    assert!(*repeatable);
    assert_eq!(
        locations,
        &vec![DirectiveLocation::FieldDefinition, DirectiveLocation::Object],
    );
}

#[test]
fn type_extensions_are_flagged() {
    let tree = parse_schema("extend type Query { extra: Int }");
    let SyntaxNodeKind::TypeDefinition { is_extension, .. } = tree.kind(definition(&tree, 0)) else {
        panic!("expected a type definition");
    };
    assert!(*is_extension);
}

#[test]
fn mixed_documents_accept_both_categories() {
    let tree = parse_mixed("type Query { a: Int } query { a }");
    assert_eq!(tree.tag(definition(&tree, 0)), SyntaxNodeKindTag::TypeDefinition);
    assert_eq!(tree.tag(definition(&tree, 1)), SyntaxNodeKindTag::Operation);
}
