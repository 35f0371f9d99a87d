use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;

/// A field of object, interface or union type must select subfields.
/// Selections on leaf types are rejected while the document is built.
pub struct LeafFieldSelectionsRule;
impl DocumentValidationRule for LeafFieldSelectionsRule {
    fn name(&self) -> &'static str {
        "LeafFieldSelections"
    }

    fn rule_reference(&self) -> &'static str {
        "5.3.3"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let Some(field) = document.part(id).as_field() else {
                continue;
            };
            let is_composite = schema
                .lookup_annotated_type(field.return_type())
                .is_some_and(|graph_type| graph_type.is_composite());
            if is_composite && document.selection_set_of(id).is_none() {
                context.critical(
                    self.rule_reference(),
                    document.part(id).location(),
                    format!(
                        "Field \"{}\" of type \"{}\" must have a selection of subfields.",
                        field.name(),
                        field.return_type(),
                    ),
                );
            }
        }
    }
}
