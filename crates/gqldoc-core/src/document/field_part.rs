use gqldoc_parser::syntax::TypeExpression;

/// A field selection resolved against its schema field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPart {
    pub(crate) alias: Option<String>,
    pub(crate) is_included: bool,
    pub(crate) is_secure: bool,
    pub(crate) name: String,
    pub(crate) owner_type: String,
    pub(crate) return_type: TypeExpression,
    pub(crate) target_graph_type: Option<String>,
}
impl FieldPart {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_included(&self) -> bool {
        self.is_included
    }

    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type whose schema field this selection resolves.
    pub fn owner_type(&self) -> &str {
        self.owner_type.as_str()
    }

    /// The alias if there is one, else the field name.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn return_type(&self) -> &TypeExpression {
        &self.return_type
    }

    /// The type condition of the fragment this selection was written in, if
    /// any.
    pub fn target_graph_type(&self) -> Option<&str> {
        self.target_graph_type.as_deref()
    }
}
