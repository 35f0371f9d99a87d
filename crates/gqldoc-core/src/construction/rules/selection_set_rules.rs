use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::FieldSelectionSetPart;
use crate::schema::Schema;

/// Creates a selection set scoped to the graph type of whatever owns it.
pub struct CreateFieldSelectionSetRule;
impl ConstructionRule for CreateFieldSelectionSetRule {
    fn name(&self) -> &'static str {
        "CreateFieldSelectionSet"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let Some(owner) = context.parent_part() else {
            context.report("A selection set must belong to an operation, field or fragment.");
            return RuleOutcome::Abort;
        };

        let graph_type = match owner.data() {
            DocumentPartData::Operation(operation) => operation.root_type().to_string(),
            // Non-composite type conditions are reported during validation.
            DocumentPartData::InlineFragment(fragment) => {
                match composite_type_name(context.schema(), fragment.target_graph_type()) {
                    Some(graph_type) => graph_type,
                    None => return RuleOutcome::SkipBranch,
                }
            },
            DocumentPartData::NamedFragment(fragment) => {
                match composite_type_name(context.schema(), fragment.type_condition()) {
                    Some(graph_type) => graph_type,
                    None => return RuleOutcome::SkipBranch,
                }
            },
            DocumentPartData::Field(field) => {
                let field_name = field.name().to_string();
                let return_type = field.return_type().clone();
                match composite_type_name(context.schema(), return_type.innermost_name()) {
                    Some(graph_type) => graph_type,
                    None => {
                        context.report(format!(
                            "Field \"{field_name}\" of type \"{return_type}\" cannot have a \
                            selection set.",
                        ));
                        return RuleOutcome::SkipBranch;
                    },
                }
            },
            _ => {
                context.report("A selection set must belong to an operation, field or fragment.");
                return RuleOutcome::Abort;
            },
        };

        context.create_part(DocumentPartData::FieldSelectionSet(
            FieldSelectionSetPart::new(graph_type),
        ));
        RuleOutcome::Continue
    }
}

fn composite_type_name(schema: &Schema, type_name: &str) -> Option<String> {
    schema
        .lookup_type(type_name)
        .filter(|graph_type| graph_type.is_composite())
        .map(|graph_type| graph_type.name().to_string())
}
