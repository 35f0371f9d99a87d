use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::FieldPart;
use gqldoc_parser::SyntaxNodeKind;

/// Resolves a field selection against the graph type of its selection set.
pub struct CreateFieldRule;
impl ConstructionRule for CreateFieldRule {
    fn name(&self) -> &'static str {
        "CreateField"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::Field { alias, name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let Some(selection_set_id) = context.parent_part_id() else {
            context.report(format!("Field \"{name}\" is not part of a selection set."));
            return RuleOutcome::Abort;
        };
        let document = context.document();
        let Some(selection_set) = document.part(selection_set_id).as_field_selection_set() else {
            context.report(format!("Field \"{name}\" is not part of a selection set."));
            return RuleOutcome::Abort;
        };
        let owner_type = selection_set.graph_type().to_string();

        // Selections written inside a fragment remember its type condition.
        let target_graph_type = document.parent(selection_set_id).and_then(|owner| {
            let owner = document.part(owner);
            owner
                .as_inline_fragment()
                .and_then(|fragment| fragment.type_condition())
                .or_else(|| owner.as_named_fragment().map(|fragment| fragment.type_condition()))
                .map(str::to_string)
        });

        let Some(schema_field) = context.schema().field(&owner_type, name) else {
            context.report(format!("Cannot query field \"{name}\" on type \"{owner_type}\"."));
            return RuleOutcome::SkipBranch;
        };

        context.create_part(DocumentPartData::Field(FieldPart {
            alias: alias.clone(),
            is_included: true,
            is_secure: schema_field.is_secure(),
            name: name.clone(),
            owner_type,
            return_type: schema_field.type_annotation().clone(),
            target_graph_type,
        }));
        RuleOutcome::Continue
    }
}
