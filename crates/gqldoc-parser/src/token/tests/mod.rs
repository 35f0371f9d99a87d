mod graphql_token_kind_tests;
mod str_graphql_token_source_tests;
