use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::InputArgumentPart;
use gqldoc_parser::SyntaxNodeKind;

/// Resolves an argument against the parameters of its field or directive.
pub struct CreateInputArgumentRule;
impl ConstructionRule for CreateInputArgumentRule {
    fn name(&self) -> &'static str {
        "CreateInputArgument"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::InputArgument { name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let schema = context.schema();
        let (owner, parameter) = match context.parent_part().map(|part| part.data()) {
            Some(DocumentPartData::Field(field)) => (
                format!("field \"{}.{}\"", field.owner_type(), field.name()),
                schema
                    .field(field.owner_type(), field.name())
                    .and_then(|schema_field| schema_field.parameters().get(name)),
            ),
            Some(DocumentPartData::Directive(directive)) => (
                format!("directive \"@{}\"", directive.name()),
                schema
                    .directive(directive.name())
                    .and_then(|definition| definition.parameters().get(name)),
            ),
            _ => {
                context.report(format!(
                    "Argument \"{name}\" must be supplied to a field or directive.",
                ));
                return RuleOutcome::Abort;
            },
        };

        let Some(parameter) = parameter else {
            context.report(format!("Unknown argument \"{name}\" on {owner}."));
            return RuleOutcome::SkipBranch;
        };
        context.create_part(DocumentPartData::InputArgument(InputArgumentPart {
            expected_type: parameter.type_annotation().clone(),
            name: name.clone(),
        }));
        RuleOutcome::Continue
    }
}
