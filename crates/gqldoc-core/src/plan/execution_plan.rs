use crate::messages::GraphQLMessageCollection;
use crate::plan::ExecutableOperation;

/// The outcome of planning one operation: the executable operation when
/// planning got that far, and every message recorded along the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionPlan {
    pub(crate) depth: usize,
    pub(crate) estimated_complexity: f64,
    pub(crate) messages: GraphQLMessageCollection,
    pub(crate) operation: Option<ExecutableOperation>,
}
impl ExecutionPlan {
    pub(crate) fn from_messages(messages: GraphQLMessageCollection) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn estimated_complexity(&self) -> f64 {
        self.estimated_complexity
    }

    /// `true` when there is an operation and nothing blocks running it.
    pub fn is_executable(&self) -> bool {
        self.operation.is_some() && !self.messages.has_critical()
    }

    pub fn messages(&self) -> &GraphQLMessageCollection {
        &self.messages
    }

    pub fn operation(&self) -> Option<&ExecutableOperation> {
        self.operation.as_ref()
    }
}
