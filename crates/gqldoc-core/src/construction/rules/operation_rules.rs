use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::OperationPart;
use gqldoc_parser::SyntaxNodeKind;

/// The schema must declare a root type for the operation's type.
pub struct OperationTypeSupportedRule;
impl ConstructionRule for OperationTypeSupportedRule {
    fn name(&self) -> &'static str {
        "OperationTypeSupported"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Operation { operation_type, .. } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        if context.schema().root_type_name(*operation_type).is_none() {
            context.report(format!(
                "The schema does not support {operation_type} operations.",
            ));
            return RuleOutcome::SkipBranch;
        }
        RuleOutcome::Continue
    }
}

pub struct CreateOperationRule;
impl ConstructionRule for CreateOperationRule {
    fn name(&self) -> &'static str {
        "CreateOperation"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Operation { operation_type, name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let Some(root_type) = context.schema().root_type_name(*operation_type) else {
            return RuleOutcome::SkipBranch;
        };
        context.create_part(DocumentPartData::Operation(OperationPart::new(
            *operation_type,
            name.clone(),
            root_type.to_string(),
        )));
        RuleOutcome::Continue
    }
}
