mod query_document_tests;
