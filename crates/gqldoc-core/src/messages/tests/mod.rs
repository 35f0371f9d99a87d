mod graphql_message_collection_tests;
