use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqldoc_parser::GraphQLParser;
use gqldoc_parser::token_source::StrGraphQLTokenSource;

const SCHEMA: &str = r#"
schema { query: Query mutation: Mutation }

"A registered user"
type User implements Node {
  id: ID!
  name: String
  email: String @authorize(policy: "self")
  friends(first: Int = 10, after: String): [User!]!
}

interface Node { id: ID! }
union SearchResult = User | Post
type Post implements Node { id: ID! title: String! author: User! }
enum Role { ADMIN MEMBER GUEST }
input UserFilter { name: String role: Role = MEMBER }

type Query {
  node(id: ID!): Node
  user(id: ID!): User
  users(filter: UserFilter, first: Int): [User!]!
  search(text: String!): [SearchResult!]!
}

type Mutation { rename(id: ID!, name: String!): User }
"#;

const OPERATION: &str = r#"
query Dashboard($id: ID!, $first: Int = 20, $withEmail: Boolean!) {
  me: user(id: $id) {
    ...UserParts
    email @include(if: $withEmail)
    friends(first: $first) {
      ...UserParts
      friends(first: 3) { id name }
    }
  }
  search(text: "graph") {
    __typename
    ... on User { id name }
    ... on Post { id title author { ...UserParts } }
  }
}

fragment UserParts on User { id name }
"#;

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    group.throughput(Throughput::Bytes(OPERATION.len() as u64));
    group.bench_function("operation", |b| {
        b.iter(|| black_box(StrGraphQLTokenSource::new(OPERATION).count()))
    });
    group.finish();
}

fn parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.throughput(Throughput::Bytes(SCHEMA.len() as u64));
    group.bench_function("schema", |b| {
        b.iter(|| black_box(GraphQLParser::new(SCHEMA).parse_schema_document()))
    });

    group.throughput(Throughput::Bytes(OPERATION.len() as u64));
    group.bench_function("operation", |b| {
        b.iter(|| black_box(GraphQLParser::new(OPERATION).parse_executable_document()))
    });

    let repeated = OPERATION.replace("Dashboard", "").repeat(50);
    group.throughput(Throughput::Bytes(repeated.len() as u64));
    group.bench_function("operation x50", |b| {
        b.iter(|| black_box(GraphQLParser::new(&repeated).parse_mixed_document()))
    });

    group.finish();
}

criterion_group!(benches, lexer, parser);
criterion_main!(benches);
