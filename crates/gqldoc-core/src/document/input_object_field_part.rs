use gqldoc_parser::syntax::TypeExpression;

/// A `name: value` entry of an input object value.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectFieldPart {
    /// `None` when the enclosing value is not expected to be an input object.
    pub(crate) expected_type: Option<TypeExpression>,
    pub(crate) name: String,
}
impl InputObjectFieldPart {
    pub fn expected_type(&self) -> Option<&TypeExpression> {
        self.expected_type.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
