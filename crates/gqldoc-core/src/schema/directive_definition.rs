use crate::loc;
use crate::schema::InputValue;
use gqldoc_parser::syntax::DirectiveLocation;
use gqldoc_parser::syntax::TypeExpression;
use indexmap::IndexMap;

/// A directive that documents may apply at the listed locations.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    fn builtin(
        name: &str,
        locations: Vec<DirectiveLocation>,
        parameters: Vec<InputValue>,
        repeatable: bool,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            locations,
            name: name.to_string(),
            parameters: parameters
                .into_iter()
                .map(|param| (param.name.clone(), param))
                .collect(),
            repeatable,
        }
    }

    pub(crate) fn skip() -> Self {
        Self::builtin(
            "skip",
            vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            vec![InputValue::builtin("if", TypeExpression::named("Boolean", true))],
            false,
        )
    }

    pub(crate) fn include() -> Self {
        Self::builtin(
            "include",
            vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            vec![InputValue::builtin("if", TypeExpression::named("Boolean", true))],
            false,
        )
    }

    pub(crate) fn deprecated() -> Self {
        let mut reason = InputValue::builtin("reason", TypeExpression::named("String", false));
        reason.default_value = Some("\"No longer supported\"".to_string());
        Self::builtin(
            "deprecated",
            vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            vec![reason],
            false,
        )
    }

    pub(crate) fn specified_by() -> Self {
        Self::builtin(
            "specifiedBy",
            vec![DirectiveLocation::Scalar],
            vec![InputValue::builtin("url", TypeExpression::named("String", true))],
            false,
        )
    }

    pub(crate) fn authorize() -> Self {
        Self::builtin(
            "authorize",
            vec![DirectiveLocation::Object, DirectiveLocation::FieldDefinition],
            vec![InputValue::builtin("policy", TypeExpression::named("String", false))],
            true,
        )
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SchemaDefLocation::GraphQLBuiltIn
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }
}
