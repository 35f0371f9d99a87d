use crate::document::DocumentPartData;
use crate::document::PartId;
use crate::QueryDocument;

/// Computes the depth of an operation's selection tree.
///
/// A leaf field counts 1 and a field with subselections counts one more
/// than its deepest child. Inline fragments and fragment spreads add no
/// depth of their own. A named fragment already being walked on the current
/// path counts 0, so cycles terminate while a fragment spread from sibling
/// branches is counted in each of them.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperationDepthCalculator;
impl OperationDepthCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, document: &QueryDocument, operation: PartId) -> usize {
        let Some(selection_set) = document.selection_set_of(operation) else {
            return 0;
        };
        let mut walked_named_fragments = vec![];
        selection_set_depth(document, selection_set, &mut walked_named_fragments)
    }
}

fn selection_set_depth(
    document: &QueryDocument,
    selection_set: PartId,
    walked_named_fragments: &mut Vec<PartId>,
) -> usize {
    document
        .children(selection_set)
        .iter()
        .map(|selection| selection_depth(document, *selection, walked_named_fragments))
        .max()
        .unwrap_or(0)
}

fn selection_depth(
    document: &QueryDocument,
    selection: PartId,
    walked_named_fragments: &mut Vec<PartId>,
) -> usize {
    let nested = |walked: &mut Vec<PartId>, owner: PartId| {
        document
            .selection_set_of(owner)
            .map_or(0, |set| selection_set_depth(document, set, walked))
    };
    match document.part(selection).data() {
        DocumentPartData::Field(_) => 1 + nested(walked_named_fragments, selection),
        DocumentPartData::InlineFragment(_) => nested(walked_named_fragments, selection),
        DocumentPartData::FragmentSpread(spread) => {
            let Some(fragment) = spread.fragment() else {
                return 0;
            };
            if walked_named_fragments.contains(&fragment) {
                return 0;
            }
            walked_named_fragments.push(fragment);
            let depth = nested(walked_named_fragments, fragment);
            walked_named_fragments.pop();
            depth
        },
        _ => 0,
    }
}
