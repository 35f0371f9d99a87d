use crate::document::AggregatedParts;
use crate::document::DocumentPart;
use crate::document::DocumentPartData;
use crate::document::DocumentPartError;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::loc::SourceLocation;
use crate::messages::GraphQLMessageCollection;
use std::collections::HashSet;

/// The semantic model of one query document: an arena of
/// [`DocumentPart`]s plus the messages produced while building, linking and
/// validating it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryDocument {
    pub(crate) fragment_spreads: Vec<PartId>,
    pub(crate) is_validated: bool,
    pub(crate) messages: GraphQLMessageCollection,
    pub(crate) named_fragments: Vec<PartId>,
    pub(crate) operations: Vec<PartId>,
    pub(crate) parts: Vec<DocumentPart>,
}
impl QueryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part and attaches it as the last child of `parent`.
    pub(crate) fn add_part(
        &mut self,
        data: DocumentPartData,
        parent: Option<PartId>,
        location: SourceLocation,
    ) -> PartId {
        let id = PartId(self.parts.len() as u32);
        match &data {
            DocumentPartData::Operation(_) => self.operations.push(id),
            DocumentPartData::NamedFragment(_) => self.named_fragments.push(id),
            DocumentPartData::FragmentSpread(_) => self.fragment_spreads.push(id),
            _ => (),
        }
        let response_name = match &data {
            DocumentPartData::Field(field) => Some(field.response_name().to_string()),
            _ => None,
        };
        let is_selection_set = data.kind() == DocumentPartKind::FieldSelectionSet;
        self.parts.push(DocumentPart {
            children: vec![],
            data,
            location,
            parent,
        });

        if let Some(parent) = parent {
            let parent_part = &mut self.parts[parent.index()];
            parent_part.children.push(id);
            match &mut parent_part.data {
                DocumentPartData::FieldSelectionSet(set) => {
                    if let Some(response_name) = response_name {
                        set.add_response_name(&response_name);
                    }
                },
                DocumentPartData::Operation(op) if is_selection_set => {
                    op.selection_set = Some(id);
                },
                DocumentPartData::NamedFragment(fragment) if is_selection_set => {
                    fragment.selection_set = Some(id);
                },
                DocumentPartData::InlineFragment(fragment) if is_selection_set => {
                    fragment.selection_set = Some(id);
                },
                _ => (),
            }
        }
        id
    }

    /// Removes `id` from its parent's children. The part stays in the arena
    /// so ids remain stable, but it is no longer reachable from the tree.
    pub fn detach_part(&mut self, id: PartId) {
        let Some(parent) = self.parts[id.index()].parent.take() else {
            return;
        };
        let response_name = self.parts[id.index()]
            .as_field()
            .map(|field| field.response_name().to_string());

        let parent_part = &mut self.parts[parent.index()];
        parent_part.children.retain(|child| *child != id);
        if let (Some(response_name), DocumentPartData::FieldSelectionSet(set)) =
            (response_name, &mut parent_part.data)
        {
            set.remove_response_name(&response_name);
        }
    }

    pub fn children(&self, id: PartId) -> &[PartId] {
        self.parts[id.index()].children()
    }

    /// Direct children of `id` of the given kind.
    pub fn children_of_kind(
        &self,
        id: PartId,
        kind: DocumentPartKind,
    ) -> impl Iterator<Item = PartId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.kind(*child) == kind)
    }

    /// Every part beneath `id` in depth-first pre-order, not following
    /// fragment spreads.
    pub fn descendants(&self, id: PartId) -> Vec<PartId> {
        let mut order = vec![];
        let mut stack: Vec<PartId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        order
    }

    /// The operation or named fragment that owns `id`.
    pub fn enclosing_definition(&self, id: PartId) -> Option<PartId> {
        let mut current = Some(id);
        while let Some(part_id) = current {
            if matches!(
                self.kind(part_id),
                DocumentPartKind::Operation | DocumentPartKind::NamedFragment
            ) {
                return Some(part_id);
            }
            current = self.parent(part_id);
        }
        None
    }

    /// Every fragment spread in the document, in source order.
    pub fn fragment_spreads(&self) -> &[PartId] {
        self.fragment_spreads.as_slice()
    }

    pub fn is_validated(&self) -> bool {
        self.is_validated
    }

    pub fn kind(&self, id: PartId) -> DocumentPartKind {
        self.parts[id.index()].kind()
    }

    pub(crate) fn link_fragment(
        &mut self,
        spread: PartId,
        fragment: PartId,
    ) -> Result<(), DocumentPartError> {
        match &mut self.parts[spread.index()].data {
            DocumentPartData::FragmentSpread(spread_part) => spread_part.assign_fragment(fragment),
            _ => Err(DocumentPartError::UnexpectedPartKind {
                expected: "fragment spread",
            }),
        }
    }

    pub fn messages(&self) -> &GraphQLMessageCollection {
        &self.messages
    }

    pub(crate) fn messages_mut(&mut self) -> &mut GraphQLMessageCollection {
        &mut self.messages
    }

    /// Every named fragment definition in source order, duplicates
    /// included.
    pub fn named_fragments(&self) -> &[PartId] {
        self.named_fragments.as_slice()
    }

    /// Named fragment definitions called `name`. More than one is a
    /// validation error, but all of them are kept.
    pub fn named_fragments_called<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = PartId> + 'a {
        self.named_fragments
            .iter()
            .copied()
            .filter(move |id| {
                self.part(*id).as_named_fragment().is_some_and(|f| f.name() == name)
            })
    }

    pub fn operations(&self) -> &[PartId] {
        self.operations.as_slice()
    }

    /// The first operation called `name`.
    pub fn operation_named(&self, name: &str) -> Option<PartId> {
        self.operations
            .iter()
            .copied()
            .find(|id| self.part(*id).as_operation().and_then(|op| op.name()) == Some(name))
    }

    pub fn parent(&self, id: PartId) -> Option<PartId> {
        self.parts[id.index()].parent
    }

    pub fn part(&self, id: PartId) -> &DocumentPart {
        &self.parts[id.index()]
    }

    pub(crate) fn part_mut(&mut self, id: PartId) -> &mut DocumentPart {
        &mut self.parts[id.index()]
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Named fragments reachable from `definition` through linked spreads,
    /// transitively, each listed once.
    pub fn reachable_fragments(&self, definition: PartId) -> Vec<PartId> {
        let mut reached = vec![];
        let mut seen = HashSet::new();
        let mut pending = vec![definition];
        while let Some(current) = pending.pop() {
            let Some(aggregated) = self.aggregated(current) else {
                continue;
            };
            for spread in aggregated.fragment_spreads() {
                let Some(fragment) = self.part(*spread).as_fragment_spread().and_then(|s| s.fragment()) else {
                    continue;
                };
                if fragment != definition && seen.insert(fragment) {
                    reached.push(fragment);
                    pending.push(fragment);
                }
            }
        }
        reached
    }

    /// The field selection set owned by `id`, if it has one.
    pub fn selection_set_of(&self, id: PartId) -> Option<PartId> {
        self.children_of_kind(id, DocumentPartKind::FieldSelectionSet).next()
    }

    fn aggregated(&self, id: PartId) -> Option<&AggregatedParts> {
        let part = self.part(id);
        part.as_operation()
            .map(|op| op.aggregated())
            .or_else(|| part.as_named_fragment().map(|f| f.aggregated()))
    }
}
