use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DirectivePart;
use crate::document::DocumentPartData;
use crate::document::DocumentPartKind;
use gqldoc_parser::SyntaxNodeKind;
use gqldoc_parser::syntax::DirectiveLocation;
use gqldoc_parser::syntax::OperationType;

pub struct DirectiveDefinedRule;
impl ConstructionRule for DirectiveDefinedRule {
    fn name(&self) -> &'static str {
        "DirectiveDefined"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Directive { name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        if context.schema().directive(name).is_none() {
            context.report(format!("Unknown directive \"@{name}\"."));
            return RuleOutcome::SkipBranch;
        }
        RuleOutcome::Continue
    }
}

/// Attaches a directive to its part, recording where it was applied and its
/// position among the part's other directives.
pub struct CreateDirectiveRule;
impl ConstructionRule for CreateDirectiveRule {
    fn name(&self) -> &'static str {
        "CreateDirective"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Directive { name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let Some(parent_id) = context.parent_part_id() else {
            context.report(format!("Directive \"@{name}\" is not applied to anything."));
            return RuleOutcome::Abort;
        };

        let location = match context.document().part(parent_id).data() {
            DocumentPartData::Operation(operation) => match operation.operation_type() {
                OperationType::Query => DirectiveLocation::Query,
                OperationType::Mutation => DirectiveLocation::Mutation,
                OperationType::Subscription => DirectiveLocation::Subscription,
            },
            DocumentPartData::Field(_) => DirectiveLocation::Field,
            DocumentPartData::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
            DocumentPartData::InlineFragment(_) => DirectiveLocation::InlineFragment,
            DocumentPartData::NamedFragment(_) => DirectiveLocation::FragmentDefinition,
            DocumentPartData::Variable(_) => DirectiveLocation::VariableDefinition,
            _ => {
                context.report(format!("Directive \"@{name}\" cannot be applied here."));
                return RuleOutcome::Abort;
            },
        };
        let rank = context
            .document()
            .children_of_kind(parent_id, DocumentPartKind::Directive)
            .count();

        context.create_part(DocumentPartData::Directive(DirectivePart {
            location,
            name: name.clone(),
            rank,
        }));
        RuleOutcome::Continue
    }
}
