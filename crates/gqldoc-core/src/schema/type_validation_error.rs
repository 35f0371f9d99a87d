use crate::loc;
use thiserror::Error;

/// A problem with a type reference that can only be detected once every
/// definition in a schema has been loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error("`{type_name}` implements `{implemented_type_name}`, which is not an interface ({location})")]
    ImplementsNonInterfaceType {
        type_name: String,
        implemented_type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("`{owner}` must be an input type, but `{type_name}` is not ({location})")]
    InvalidInputType {
        owner: String,
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("`{owner}` must be an output type, but `{type_name}` is an input object ({location})")]
    InvalidOutputType {
        owner: String,
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("The `{union_name}` union may only contain object types, but `{member_name}` is not one ({location})")]
    InvalidUnionMember {
        union_name: String,
        member_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but does not define its \
        `{field_name}` field ({location})"
    )]
    MissingInterfaceField {
        type_name: String,
        interface_name: String,
        field_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Root operation type `{type_name}` must be an object type ({location})")]
    RootOperationTypeNotAnObject {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Reference to undefined type `{undefined_type_name}` ({location})")]
    UndefinedTypeName {
        undefined_type_name: String,
        location: loc::SchemaDefLocation,
    },
}
