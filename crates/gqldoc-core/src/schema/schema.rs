use crate::SchemaConfiguration;
use crate::schema::DirectiveDefinition;
use crate::schema::Field;
use crate::schema::GraphQLType;
use crate::schema::ScalarTypeProvider;
use gqldoc_parser::syntax::OperationType;
use gqldoc_parser::syntax::TypeExpression;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::sync::Arc;

/// An immutable, fully validated GraphQL schema.
///
/// A `Schema` is `Send + Sync` and is meant to be shared (by reference or in
/// an `Arc`) by every request processed against it.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) configuration: SchemaConfiguration,
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) scalar_type_provider: Arc<ScalarTypeProvider>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn configuration(&self) -> &SchemaConfiguration {
        &self.configuration
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    pub fn directive_defs(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// Look up `field_name` on the composite type named `type_name`.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.lookup_type(type_name)?.field(field_name)
    }

    /// The innermost named type of `type_annotation`, if it exists.
    pub fn lookup_annotated_type(&self, type_annotation: &TypeExpression) -> Option<&GraphQLType> {
        self.lookup_type(type_annotation.innermost_name())
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// The object types a value of the named type can be at runtime.
    pub fn possible_types(&self, type_name: &str) -> IndexSet<&str> {
        match self.lookup_type(type_name) {
            Some(GraphQLType::Object(obj_type)) => IndexSet::from([obj_type.name()]),
            Some(GraphQLType::Interface(iface_type)) => self.types
                .values()
                .filter_map(GraphQLType::as_object)
                .filter(|obj_type| obj_type.interfaces().iter().any(|i| i == iface_type.name()))
                .map(|obj_type| obj_type.name())
                .collect(),
            Some(GraphQLType::Union(union_type)) => union_type.members()
                .iter()
                .map(String::as_str)
                .collect(),
            _ => IndexSet::new(),
        }
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// The type that roots operations of `operation_type`, if the schema
    /// supports that kind of operation.
    pub fn root_type_name(&self, operation_type: OperationType) -> Option<&str> {
        match operation_type {
            OperationType::Query => Some(self.query_type.as_str()),
            OperationType::Mutation => self.mutation_type.as_deref(),
            OperationType::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn scalar_type_provider(&self) -> &Arc<ScalarTypeProvider> {
        &self.scalar_type_provider
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// `true` when some runtime object type could satisfy both named types.
    pub fn types_overlap(&self, type_a: &str, type_b: &str) -> bool {
        let possible_a = self.possible_types(type_a);
        self.possible_types(type_b)
            .iter()
            .any(|name| possible_a.contains(name))
    }
}
