use crate::document::AggregatedParts;
use crate::document::PartId;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedFragmentPart {
    pub(crate) aggregated: AggregatedParts,
    pub(crate) is_referenced: bool,
    pub(crate) name: String,
    pub(crate) referenced_named_fragments: Vec<String>,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) type_condition: String,
}
impl NamedFragmentPart {
    pub(crate) fn new(name: String, type_condition: String) -> Self {
        Self {
            aggregated: AggregatedParts::default(),
            is_referenced: false,
            name,
            referenced_named_fragments: vec![],
            selection_set: None,
            type_condition,
        }
    }

    pub fn aggregated(&self) -> &AggregatedParts {
        &self.aggregated
    }

    /// Set once some fragment spread in the document names this fragment.
    pub fn is_referenced(&self) -> bool {
        self.is_referenced
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Names of the fragments spread directly within this fragment, in
    /// source order and without repeats.
    pub fn referenced_named_fragments(&self) -> &[String] {
        self.referenced_named_fragments.as_slice()
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
