use crate::SchemaConfiguration;
use crate::loc;
use crate::schema::GraphQLType;
use crate::schema::GraphQLTypeKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeValidationError;
use gqldoc_parser::syntax::DirectiveLocation;
use gqldoc_parser::syntax::OperationType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();
        assert!(matches!(
            schema,
            Err(SchemaBuildError::NoQueryOperationTypeDefined),
        ));
    }

    #[test]
    fn detects_root_types_by_name() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Mutation\n",
            "type Query\n",
            "type Subscription",
        ))?.build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), Some("Subscription"));
        assert_eq!(schema.root_type_name(OperationType::Mutation), Some("Mutation"));

        // 3 root types + 5 builtin scalars
        assert_eq!(schema.types().len(), 8);

        let query_type = schema.lookup_type("Query").and_then(GraphQLType::as_object).unwrap();
        assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["__typename"]);
        assert!(matches!(query_type.def_location(), loc::SchemaDefLocation::Schema(_)));

        Ok(())
    }

    #[test]
    fn missing_mutation_type_is_not_an_error() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;
        assert_eq!(schema.mutation_type_name(), None);
        assert_eq!(schema.root_type_name(OperationType::Subscription), None);
        Ok(())
    }

    #[test]
    fn explicit_schema_definition_wins() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, r#"
            schema { query: Root mutation: Writes }
            type Root { a: Int }
            type Writes { b: Int }
            type Query { c: Int }
        "#)?.build()?;

        assert_eq!(schema.query_type_name(), "Root");
        assert_eq!(schema.mutation_type_name(), Some("Writes"));
        Ok(())
    }

    #[test]
    fn builtin_directives_are_injected() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;
        for name in ["skip", "include", "deprecated", "specifiedBy", "authorize"] {
            let directive = schema.directive(name).unwrap();
            assert!(directive.is_builtin(), "@{name} should be builtin");
        }
        let skip = schema.directive("skip").unwrap();
        assert!(skip.locations().contains(&DirectiveLocation::Field));
        assert!(skip.parameters()["if"].is_required());
        Ok(())
    }

    #[test]
    fn loads_multiple_strings() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { user: User }")?
            .load_str(None, "type User { id: ID! }")?
            .build()?;
        assert!(schema.lookup_type("User").is_some());
        Ok(())
    }

    #[test]
    fn configuration_is_attached() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?
            .set_configuration(SchemaConfiguration {
                max_query_depth: Some(4),
                ..SchemaConfiguration::default()
            })
            .build()?;
        assert_eq!(schema.configuration().max_query_depth, Some(4));
        assert_eq!(schema.configuration().default_list_size, 10.0);
        Ok(())
    }
}

mod types {
    use super::*;

    #[test]
    fn records_fields_arguments_and_defaults() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, r#"
            type Query {
                "Look up users"
                users(first: Int = 10, role: Role!): [User!]!
            }
            type User { id: ID! name: String @deprecated(reason: "use fullName") }
            enum Role { ADMIN MEMBER }
        "#)?.build()?;

        let users = schema.field("Query", "users").unwrap();
        assert_eq!(users.description(), Some("Look up users"));
        assert_eq!(users.type_annotation().to_string(), "[User!]!");
        assert_eq!(users.parameters()["first"].default_value(), Some("10"));
        assert!(!users.parameters()["first"].is_required());
        assert!(users.parameters()["role"].is_required());

        let name = schema.field("User", "name").unwrap();
        assert_eq!(name.deprecation_reason(), Some("use fullName"));

        let role = schema.lookup_type("Role").and_then(GraphQLType::as_enum).unwrap();
        assert_eq!(role.values().keys().collect::<Vec<_>>(), vec!["ADMIN", "MEMBER"]);
        Ok(())
    }

    #[test]
    fn authorize_marks_fields_secure() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, r#"
            type Query {
                me: User @authorize(policy: "signed-in")
                open: Int
            }
            type User @authorize(policy: "staff") { id: ID! }
        "#)?.build()?;

        let me = schema.field("Query", "me").unwrap();
        assert!(me.is_secure());
        assert_eq!(me.authorization_policies(), &["signed-in".to_string()]);
        assert!(!schema.field("Query", "open").unwrap().is_secure());

        let id = schema.field("User", "id").unwrap();
        assert!(id.is_secure());
        assert_eq!(id.authorization_policies(), &["staff".to_string()]);
        Ok(())
    }

    #[test]
    fn possible_types_of_abstract_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, r#"
            type Query { node: Node }
            interface Node { id: ID! }
            type User implements Node { id: ID! }
            type Post implements Node { id: ID! }
            type Tag { label: String }
            union Content = Post | Tag
        "#)?.build()?;

        let nodes = schema.possible_types("Node");
        assert_eq!(nodes.iter().copied().collect::<Vec<_>>(), vec!["User", "Post"]);
        assert!(schema.types_overlap("Node", "Content"));
        assert!(!schema.types_overlap("User", "Content"));
        assert!(schema.lookup_type("Content").unwrap().field("__typename").is_some());
        Ok(())
    }

    #[test]
    fn extensions_merge_into_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, r#"
            extend type Query { b: Int }
            type Query { a: Int }
            enum Color { RED }
            extend enum Color { BLUE }
        "#)?.build()?;

        let query = schema.lookup_type("Query").and_then(GraphQLType::as_object).unwrap();
        assert_eq!(query.fields().keys().collect::<Vec<_>>(), vec!["__typename", "a", "b"]);
        let color = schema.lookup_type("Color").and_then(GraphQLType::as_enum).unwrap();
        assert_eq!(color.values().len(), 2);
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn parse_errors_are_reported() {
        let result = SchemaBuilder::from_str(None, "type Query {");
        assert!(matches!(result, Err(SchemaBuildError::ParseError { .. })));
    }

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int }\ntype Query { b: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. }) if type_name == "Query",
        ));
    }

    #[test]
    fn redefinition_of_builtin_directive() {
        let result = SchemaBuilder::from_str(None, "directive @skip(if: Boolean!) on FIELD");
        assert!(matches!(
            result,
            Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. })
                if directive_name == "skip",
        ));
    }

    #[test]
    fn non_unique_root_types() {
        let result = SchemaBuilder::from_str(None, "schema { query: Q mutation: Q }\ntype Q { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::NonUniqueOperationTypes {
                operation1: OperationType::Query,
                operation2: OperationType::Mutation,
                ..
            }),
        ));
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int }\nextend type Missing { b: Int }")?
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. }) if type_name == "Missing",
        ));
        Ok(())
    }

    #[test]
    fn extension_with_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int }\nextend enum Query { B }")?
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                type_kind: GraphQLTypeKind::Object,
                extension_kind: GraphQLTypeKind::Enum,
                ..
            }),
        ));
        Ok(())
    }

    #[test]
    fn undefined_and_misplaced_types() -> Result<()> {
        let result = SchemaBuilder::from_str(None, r#"
            type Query { user: Missing, filter(by: User): Int }
            type User { id: ID! }
        "#)?.build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(errors.iter().any(|e| matches!(
            e,
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
                if undefined_type_name == "Missing",
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            TypeValidationError::InvalidInputType { type_name, .. } if type_name == "User",
        )));
        Ok(())
    }

    #[test]
    fn missing_interface_field() -> Result<()> {
        let result = SchemaBuilder::from_str(None, r#"
            type Query { a: Int }
            interface Node { id: ID! }
            type User implements Node { name: String }
        "#)?.build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::MissingInterfaceField { type_name, interface_name, field_name, .. }
                if type_name == "User" && interface_name == "Node" && field_name == "id",
        ));
        Ok(())
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let result = SchemaBuilder::from_str(None, "type __Query { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
    }
}
