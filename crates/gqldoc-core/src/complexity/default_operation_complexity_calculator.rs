use crate::complexity::OperationComplexityCalculator;
use crate::document::DocumentPartData;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::document::SuppliedValueKind;
use crate::QueryDocument;
use crate::SchemaConfiguration;
use inherent::inherent;

/// Counts every included field selection once, multiplying the cost of a
/// field's subselections by the number of items it is expected to return.
///
/// That number is the field's `first` or `last` argument when it is an
/// integer literal. A list field without one, or with a variable in its
/// place, is assumed to return
/// [`default_list_size`](SchemaConfiguration::default_list_size) items;
/// other fields return one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultOperationComplexityCalculator;
impl DefaultOperationComplexityCalculator {
    pub fn new() -> Self {
        Self
    }
}

#[inherent]
impl OperationComplexityCalculator for DefaultOperationComplexityCalculator {
    pub fn calculate(
        &self,
        document: &QueryDocument,
        operation: PartId,
        configuration: &SchemaConfiguration,
    ) -> f64 {
        let Some(selection_set) = document.selection_set_of(operation) else {
            return 0.0;
        };
        let mut walked_named_fragments = vec![];
        selection_set_cost(document, selection_set, configuration, &mut walked_named_fragments)
    }
}

fn selection_set_cost(
    document: &QueryDocument,
    selection_set: PartId,
    configuration: &SchemaConfiguration,
    walked_named_fragments: &mut Vec<PartId>,
) -> f64 {
    let mut cost = 0.0;
    for selection in document.children(selection_set) {
        let part = document.part(*selection);
        if !part.is_included() {
            continue;
        }
        let nested = |walked: &mut Vec<PartId>, owner: PartId| {
            document
                .selection_set_of(owner)
                .map_or(0.0, |set| selection_set_cost(document, set, configuration, walked))
        };
        cost += match part.data() {
            DocumentPartData::Field(field) => {
                let multiplier = page_size(document, *selection).unwrap_or(
                    if field.return_type().is_list() { configuration.default_list_size } else { 1.0 },
                );
                1.0 + multiplier * nested(walked_named_fragments, *selection)
            },
            DocumentPartData::InlineFragment(_) => nested(walked_named_fragments, *selection),
            DocumentPartData::FragmentSpread(spread) => match spread.fragment() {
                Some(fragment) if !walked_named_fragments.contains(&fragment) => {
                    walked_named_fragments.push(fragment);
                    let fragment_cost = nested(walked_named_fragments, fragment);
                    walked_named_fragments.pop();
                    fragment_cost
                },
                _ => 0.0,
            },
            _ => 0.0,
        };
    }
    cost
}

/// The integer literal given as `field`'s `first` or `last` argument.
/// Negative sizes count as 0 so they cannot offset sibling costs.
fn page_size(document: &QueryDocument, field: PartId) -> Option<f64> {
    for argument in document.children_of_kind(field, DocumentPartKind::InputArgument) {
        let is_page_argument = document
            .part(argument)
            .as_input_argument()
            .is_some_and(|a| matches!(a.name(), "first" | "last"));
        if !is_page_argument {
            continue;
        }
        let value = document.children(argument).first()?;
        return match document.part(*value).as_supplied_value()?.value() {
            SuppliedValueKind::Int(raw) => raw.parse::<f64>().ok().map(|size| size.max(0.0)),
            _ => None,
        };
    }
    None
}
