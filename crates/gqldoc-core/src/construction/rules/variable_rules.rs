use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::VariablePart;
use gqldoc_parser::SyntaxNodeKind;

/// A variable's type must name a type the schema defines.
pub struct VariableTypeKnownRule;
impl ConstructionRule for VariableTypeKnownRule {
    fn name(&self) -> &'static str {
        "VariableTypeKnown"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Variable { name, type_expression } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let type_name = type_expression.innermost_name();
        if context.schema().lookup_type(type_name).is_none() {
            context.report(format!(
                "Unknown type \"{type_name}\" for variable \"${name}\".",
            ));
            return RuleOutcome::SkipBranch;
        }
        RuleOutcome::Continue
    }
}

/// Declares the variable on its operation. A name declared twice keeps its
/// first definition; later ones are recorded as duplicates.
pub struct CreateVariableRule;
impl ConstructionRule for CreateVariableRule {
    fn name(&self) -> &'static str {
        "CreateVariable"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Variable { name, type_expression } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let Some(operation_id) = context.parent_part_id() else {
            context.report(format!("Variable \"${name}\" is not declared by an operation."));
            return RuleOutcome::Abort;
        };
        if context.document().part(operation_id).as_operation().is_none() {
            context.report(format!("Variable \"${name}\" is not declared by an operation."));
            return RuleOutcome::Abort;
        }

        let id = context.create_part(DocumentPartData::Variable(VariablePart {
            default_value: None,
            name: name.clone(),
            type_expression: type_expression.clone(),
        }));
        if let DocumentPartData::Operation(operation) = &mut context.document.part_mut(operation_id).data {
            if operation.variables.contains_key(name) {
                operation.duplicate_variables.push(id);
            } else {
                operation.variables.insert(name.clone(), id);
            }
        }
        RuleOutcome::Continue
    }
}
