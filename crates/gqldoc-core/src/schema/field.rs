use crate::loc;
use crate::schema::InputValue;
use gqldoc_parser::syntax::TypeExpression;
use indexmap::IndexMap;

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) authorization_policies: Vec<String>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) is_secure: bool,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) type_annotation: TypeExpression,
}
impl Field {
    /// The implicit `__typename: String!` field every composite type has.
    pub(crate) fn typename() -> Self {
        Self {
            authorization_policies: vec![],
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            deprecation_reason: None,
            description: None,
            is_secure: false,
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            type_annotation: TypeExpression::named("String", true),
        }
    }

    /// Named policies from `@authorize(policy: "...")` annotations on the
    /// field or its owning type.
    pub fn authorization_policies(&self) -> &[String] {
        self.authorization_policies.as_slice()
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `true` when resolving this field requires authorization.
    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeExpression {
        &self.type_annotation
    }
}
