mod directive_definition;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod input_value;
mod object_type;
mod scalar_type_provider;
mod scalar_type;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_validation_error;
mod union_type;

pub use directive_definition::DirectiveDefinition;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_value::InputValue;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use scalar_type_provider::ScalarLiteralKind;
pub use scalar_type_provider::ScalarTypeProvider;
pub use schema::Schema;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
