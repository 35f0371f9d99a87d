use crate::construction::DocumentConstructionRuleProcessor;
use crate::document::PartId;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::DocumentGenerator;
use crate::QueryDocument;
use crate::SchemaConfiguration;

pub(crate) const TEST_SCHEMA_SDL: &str = r#"
    schema { query: Query mutation: Mutation subscription: Subscription }

    directive @cached(ttl: Int) on FIELD | QUERY
    directive @tag(name: String!) repeatable on FIELD

    type Query {
        dog: Dog
        me: User @authorize(policy: "signed-in")
        node(id: ID!): Node
        search(text: String!): [SearchResult]
        user(id: ID!): User
        users(first: Int, last: Int, filter: UserFilter): [User!]!
        version: String
    }

    type Mutation {
        rename(id: ID!, name: String!): User
    }

    type Subscription {
        userRenamed: User
        dogAdopted: Dog
    }

    interface Node {
        id: ID!
    }

    type User implements Node {
        id: ID!
        name: String
        role: Role
        friends(first: Int, last: Int): [User]
        secret: String @authorize(policy: "admin")
    }

    type Dog implements Node {
        id: ID!
        name: String
        barks: Boolean
        owner: User
    }

    union SearchResult = User | Dog

    enum Role { ADMIN MEMBER }

    input UserFilter {
        name: String
        role: Role
        minAge: Int
        tags: [String!]
    }
"#;

pub(crate) fn test_schema() -> Schema {
    test_schema_with(SchemaConfiguration::default())
}

pub(crate) fn test_schema_with(configuration: SchemaConfiguration) -> Schema {
    SchemaBuilder::from_str(None, TEST_SCHEMA_SDL)
        .unwrap()
        .set_configuration(configuration)
        .build()
        .unwrap()
}

/// Runs only the construction rules over `text`.
pub(crate) fn construct(schema: &Schema, text: &str) -> (QueryDocument, bool) {
    let tree = gqldoc_parser::parse_mixed_document(text).into_ast().unwrap();
    let mut document = QueryDocument::new();
    let completed = DocumentConstructionRuleProcessor::new().execute(schema, &tree, &mut document);
    (document, completed)
}

/// Parses, constructs, links and aggregates `text`.
pub(crate) fn build_document(schema: &Schema, text: &str) -> QueryDocument {
    DocumentGenerator::new(schema).create_document(text).unwrap()
}

/// Builds and validates `text`.
pub(crate) fn validated_document(schema: &Schema, text: &str) -> QueryDocument {
    let generator = DocumentGenerator::new(schema);
    let mut document = generator.create_document(text).unwrap();
    generator.validate_document(&mut document);
    document
}

pub(crate) fn only_operation(document: &QueryDocument) -> PartId {
    assert_eq!(document.operations().len(), 1);
    document.operations()[0]
}

pub(crate) fn message_texts(document: &QueryDocument) -> Vec<String> {
    document.messages().iter().map(|m| m.message.clone()).collect()
}
