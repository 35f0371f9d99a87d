use gqldoc_parser::syntax::TypeExpression;

/// The literal form of a [`SuppliedValuePart`]. List items and object fields
/// are child parts.
#[derive(Clone, Debug, PartialEq)]
pub enum SuppliedValueKind {
    Boolean(bool),
    Enum(String),
    /// Raw source text.
    Float(String),
    /// Raw source text.
    Int(String),
    List,
    Null,
    Object,
    String(String),
    Variable(String),
}

/// A value written in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SuppliedValuePart {
    /// The type the value's position expects, when it is known.
    pub(crate) expected_type: Option<TypeExpression>,
    pub(crate) value: SuppliedValueKind,
}
impl SuppliedValuePart {
    pub fn expected_type(&self) -> Option<&TypeExpression> {
        self.expected_type.as_ref()
    }

    pub fn value(&self) -> &SuppliedValueKind {
        &self.value
    }

    /// The variable name, if this value is a variable reference.
    pub fn variable_name(&self) -> Option<&str> {
        match &self.value {
            SuppliedValueKind::Variable(name) => Some(name),
            _ => None,
        }
    }
}
