use crate::document::DocumentPartData;
use crate::document::PartId;
use crate::QueryDocument;

/// Links every fragment spread in a document to the named fragment it
/// refers to.
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentLinker;
impl FragmentLinker {
    pub fn new() -> Self {
        Self
    }

    /// Links unlinked spreads and marks their fragments referenced. Returns
    /// the number of spreads newly linked. Running it again on the same
    /// document links nothing new.
    ///
    /// When several fragments share a spread's name they are all marked
    /// referenced and the spread is linked to the first. The duplicate name
    /// is a validation error, not an unused fragment.
    ///
    /// Spreads naming no fragment stay unlinked.
    pub fn link(&self, document: &mut QueryDocument) -> usize {
        let mut linked = 0;
        let mut unresolved = 0;
        for spread_id in document.fragment_spreads().to_vec() {
            let Some(spread) = document.part(spread_id).as_fragment_spread() else {
                continue;
            };
            if let Some(fragment) = spread.fragment() {
                mark_referenced(document, fragment);
                continue;
            }

            let candidates: Vec<PartId> = document.named_fragments_called(spread.name()).collect();
            let Some(first) = candidates.first().copied() else {
                unresolved += 1;
                continue;
            };
            for fragment in candidates {
                mark_referenced(document, fragment);
            }
            match document.link_fragment(spread_id, first) {
                Ok(()) => linked += 1,
                Err(err) => tracing::warn!(%err, "fragment spread could not be linked"),
            }
        }
        tracing::debug!(linked, unresolved, "linked fragment spreads");
        linked
    }
}

fn mark_referenced(document: &mut QueryDocument, fragment: PartId) {
    if let DocumentPartData::NamedFragment(fragment) = &mut document.part_mut(fragment).data {
        fragment.is_referenced = true;
    }
}
