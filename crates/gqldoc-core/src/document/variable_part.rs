use crate::document::PartId;
use gqldoc_parser::syntax::TypeExpression;

/// A variable declared by an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct VariablePart {
    pub(crate) default_value: Option<PartId>,
    pub(crate) name: String,
    pub(crate) type_expression: TypeExpression,
}
impl VariablePart {
    pub fn default_value(&self) -> Option<PartId> {
        self.default_value
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }
}
