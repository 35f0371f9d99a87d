//! The validation rules, one per specification section.

mod argument_rules;
mod directive_rules;
mod field_rules;
mod fragment_rules;
mod operation_rules;
mod value_rules;
mod variable_rules;

pub use argument_rules::RequiredArgumentsRule;
pub use argument_rules::UniqueArgumentNamesRule;
pub use directive_rules::DirectivesInValidLocationsRule;
pub use directive_rules::UniqueDirectivesPerLocationRule;
pub use field_rules::LeafFieldSelectionsRule;
pub use fragment_rules::FragmentsOnCompositeTypesRule;
pub use fragment_rules::KnownFragmentNamesRule;
pub use fragment_rules::NoFragmentCyclesRule;
pub use fragment_rules::NoUnusedFragmentsRule;
pub use fragment_rules::PossibleFragmentSpreadsRule;
pub use fragment_rules::UniqueFragmentNamesRule;
pub use operation_rules::LoneAnonymousOperationRule;
pub use operation_rules::SingleRootFieldRule;
pub use operation_rules::UniqueOperationNamesRule;
pub use value_rules::InputObjectFieldsRule;
pub use value_rules::ValuesOfCorrectTypeRule;
pub use variable_rules::NoUndefinedVariablesRule;
pub use variable_rules::NoUnusedVariablesRule;
pub use variable_rules::UniqueVariableNamesRule;
pub use variable_rules::VariablesAreInputTypesRule;
pub use variable_rules::VariablesInAllowedPositionRule;

use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::QueryDocument;
use indexmap::IndexMap;

/// Names that occur more than once, with the parts using each name after
/// its first occurrence.
fn repeated_names<'a>(
    named: impl IntoIterator<Item = (&'a str, PartId)>,
) -> Vec<(&'a str, PartId)> {
    let mut seen: IndexMap<&str, usize> = IndexMap::new();
    let mut repeats = vec![];
    for (name, id) in named {
        let count = seen.entry(name).or_default();
        if *count > 0 {
            repeats.push((name, id));
        }
        *count += 1;
    }
    repeats
}

/// The field selections `selection_set` contributes, looking through inline
/// fragments and linked fragment spreads. Each named fragment is entered
/// once.
fn collect_fields(document: &QueryDocument, selection_set: PartId) -> Vec<PartId> {
    let mut fields = vec![];
    let mut visited_fragments = vec![];
    collect_fields_into(document, selection_set, &mut fields, &mut visited_fragments);
    fields
}

fn collect_fields_into(
    document: &QueryDocument,
    selection_set: PartId,
    fields: &mut Vec<PartId>,
    visited_fragments: &mut Vec<PartId>,
) {
    for selection in document.children(selection_set) {
        let part = document.part(*selection);
        match part.kind() {
            DocumentPartKind::Field => fields.push(*selection),
            DocumentPartKind::InlineFragment => {
                if let Some(nested) = document.selection_set_of(*selection) {
                    collect_fields_into(document, nested, fields, visited_fragments);
                }
            },
            DocumentPartKind::FragmentSpread => {
                let Some(fragment) = part.as_fragment_spread().and_then(|s| s.fragment()) else {
                    continue;
                };
                if visited_fragments.contains(&fragment) {
                    continue;
                }
                visited_fragments.push(fragment);
                if let Some(nested) = document.selection_set_of(fragment) {
                    collect_fields_into(document, nested, fields, visited_fragments);
                }
            },
            _ => (),
        }
    }
}
