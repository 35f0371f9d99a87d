use crate::document::AggregatedParts;
use crate::document::PartId;
use gqldoc_parser::syntax::OperationType;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationPart {
    pub(crate) aggregated: AggregatedParts,
    pub(crate) duplicate_variables: Vec<PartId>,
    pub(crate) name: Option<String>,
    pub(crate) operation_type: OperationType,
    pub(crate) root_type: String,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) variables: IndexMap<String, PartId>,
}
impl OperationPart {
    pub(crate) fn new(
        operation_type: OperationType,
        name: Option<String>,
        root_type: String,
    ) -> Self {
        Self {
            aggregated: AggregatedParts::default(),
            duplicate_variables: vec![],
            name,
            operation_type,
            root_type,
            selection_set: None,
            variables: IndexMap::new(),
        }
    }

    pub fn aggregated(&self) -> &AggregatedParts {
        &self.aggregated
    }

    /// Variable definitions whose name was already declared by an earlier
    /// definition on this operation.
    pub fn duplicate_variables(&self) -> &[PartId] {
        self.duplicate_variables.as_slice()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub fn root_type(&self) -> &str {
        self.root_type.as_str()
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    /// The first definition of each declared variable, keyed by name.
    pub fn variables(&self) -> &IndexMap<String, PartId> {
        &self.variables
    }
}
