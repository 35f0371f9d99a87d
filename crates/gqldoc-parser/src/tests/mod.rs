mod graphql_parser_error_tests;
mod graphql_parser_schema_tests;
mod syntax_tree_tests;
mod utils;
