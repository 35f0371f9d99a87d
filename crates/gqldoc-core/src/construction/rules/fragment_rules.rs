use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::NamedFragmentPart;
use gqldoc_parser::SyntaxNodeKind;

/// A fragment's type condition must name a type the schema defines.
pub struct FragmentTypeConditionKnownRule;
impl ConstructionRule for FragmentTypeConditionKnownRule {
    fn name(&self) -> &'static str {
        "FragmentTypeConditionKnown"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let type_condition = match context.node_kind() {
            SyntaxNodeKind::InlineFragment { type_condition } => type_condition.as_deref(),
            SyntaxNodeKind::NamedFragment { type_condition, .. } => Some(type_condition.as_str()),
            _ => return RuleOutcome::Abort,
        };
        if let Some(type_condition) = type_condition
            && context.schema().lookup_type(type_condition).is_none()
        {
            context.report(format!("Unknown type \"{type_condition}\" in fragment type condition."));
            return RuleOutcome::SkipBranch;
        }
        RuleOutcome::Continue
    }
}

pub struct CreateInlineFragmentRule;
impl ConstructionRule for CreateInlineFragmentRule {
    fn name(&self) -> &'static str {
        "CreateInlineFragment"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::InlineFragment { type_condition } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let Some(selection_set) = context
            .parent_part()
            .and_then(|part| part.as_field_selection_set())
        else {
            context.report("An inline fragment must be part of a selection set.");
            return RuleOutcome::Abort;
        };
        let target_graph_type = type_condition
            .clone()
            .unwrap_or_else(|| selection_set.graph_type().to_string());

        context.create_part(DocumentPartData::InlineFragment(InlineFragmentPart {
            is_included: true,
            selection_set: None,
            target_graph_type,
            type_condition: type_condition.clone(),
        }));
        RuleOutcome::Continue
    }
}

pub struct CreateNamedFragmentRule;
impl ConstructionRule for CreateNamedFragmentRule {
    fn name(&self) -> &'static str {
        "CreateNamedFragment"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::NamedFragment { name, type_condition } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        if context.parent_part_id().is_some() {
            context.report(format!(
                "Fragment \"{name}\" must be defined at the top level of the document.",
            ));
            return RuleOutcome::Abort;
        }
        context.create_part(DocumentPartData::NamedFragment(NamedFragmentPart::new(
            name.clone(),
            type_condition.clone(),
        )));
        RuleOutcome::Continue
    }
}

/// Creates an unlinked spread; the fragment linker resolves it once every
/// named fragment is known.
pub struct CreateFragmentSpreadRule;
impl ConstructionRule for CreateFragmentSpreadRule {
    fn name(&self) -> &'static str {
        "CreateFragmentSpread"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::FragmentSpread { name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        if context.parent_part().and_then(|part| part.as_field_selection_set()).is_none() {
            context.report(format!("Fragment spread \"...{name}\" must be part of a selection set."));
            return RuleOutcome::Abort;
        }
        context.create_part(DocumentPartData::FragmentSpread(FragmentSpreadPart::new(name.clone())));
        RuleOutcome::Continue
    }
}
