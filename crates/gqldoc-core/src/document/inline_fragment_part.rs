use crate::document::PartId;

/// An anonymous fragment. Inline fragments are always referenced.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentPart {
    pub(crate) is_included: bool,
    pub(crate) selection_set: Option<PartId>,

    /// The type condition, or the enclosing selection set's type when the
    /// fragment has none.
    pub(crate) target_graph_type: String,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragmentPart {
    pub fn is_included(&self) -> bool {
        self.is_included
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    pub fn target_graph_type(&self) -> &str {
        self.target_graph_type.as_str()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
