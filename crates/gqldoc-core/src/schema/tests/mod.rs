mod scalar_type_provider_tests;
mod schema_builder_tests;
