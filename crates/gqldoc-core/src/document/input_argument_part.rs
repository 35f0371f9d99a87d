use gqldoc_parser::syntax::TypeExpression;

/// An argument supplied to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct InputArgumentPart {
    pub(crate) expected_type: TypeExpression,
    pub(crate) name: String,
}
impl InputArgumentPart {
    /// The type the schema declares for this argument.
    pub fn expected_type(&self) -> &TypeExpression {
        &self.expected_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
