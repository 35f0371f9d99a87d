use crate::construction::ConstructionContext;

/// What the processor does after a rule has run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleOutcome {
    /// Run the next rule, then descend into the node's children.
    Continue,

    /// Leave this node's subtree unprocessed. Sibling subtrees are still
    /// visited.
    SkipBranch,

    /// Stop building the document.
    Abort,
}

pub trait ConstructionRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome;
}
