use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;

/// The root must be a document with at least one definition.
pub struct DocumentRootRule;
impl ConstructionRule for DocumentRootRule {
    fn name(&self) -> &'static str {
        "DocumentRoot"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let tree = context.tree();
        if context.parent_part_id().is_some() || tree.parent(context.node()).is_some() {
            context.report("A document node may only appear at the root of the tree.");
            return RuleOutcome::Abort;
        }
        if !tree.has_definitions() {
            context.report("The document does not contain any operations or fragments.");
            return RuleOutcome::Abort;
        }
        RuleOutcome::Continue
    }
}

/// Type system definitions cannot be executed.
pub struct RejectTypeSystemDefinitionRule;
impl ConstructionRule for RejectTypeSystemDefinitionRule {
    fn name(&self) -> &'static str {
        "RejectTypeSystemDefinition"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        context.report("Type system definitions are not allowed in an executable document.");
        RuleOutcome::SkipBranch
    }
}
