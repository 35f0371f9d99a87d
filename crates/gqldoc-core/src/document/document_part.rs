use crate::document::DirectivePart;
use crate::document::FieldPart;
use crate::document::FieldSelectionSetPart;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::InputArgumentPart;
use crate::document::InputObjectFieldPart;
use crate::document::NamedFragmentPart;
use crate::document::OperationPart;
use crate::document::SuppliedValuePart;
use crate::document::VariablePart;
use crate::loc::SourceLocation;

/// Index of a part within its [`QueryDocument`](crate::QueryDocument).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PartId(pub(crate) u32);
impl PartId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DocumentPartKind {
    Directive,
    Field,
    FieldSelectionSet,
    FragmentSpread,
    InlineFragment,
    InputArgument,
    InputObjectField,
    NamedFragment,
    Operation,
    SuppliedValue,
    Variable,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DocumentPartData {
    Directive(DirectivePart),
    Field(FieldPart),
    FieldSelectionSet(FieldSelectionSetPart),
    FragmentSpread(FragmentSpreadPart),
    InlineFragment(InlineFragmentPart),
    InputArgument(InputArgumentPart),
    InputObjectField(InputObjectFieldPart),
    NamedFragment(NamedFragmentPart),
    Operation(OperationPart),
    SuppliedValue(SuppliedValuePart),
    Variable(VariablePart),
}
impl DocumentPartData {
    pub fn kind(&self) -> DocumentPartKind {
        match self {
            Self::Directive(_) => DocumentPartKind::Directive,
            Self::Field(_) => DocumentPartKind::Field,
            Self::FieldSelectionSet(_) => DocumentPartKind::FieldSelectionSet,
            Self::FragmentSpread(_) => DocumentPartKind::FragmentSpread,
            Self::InlineFragment(_) => DocumentPartKind::InlineFragment,
            Self::InputArgument(_) => DocumentPartKind::InputArgument,
            Self::InputObjectField(_) => DocumentPartKind::InputObjectField,
            Self::NamedFragment(_) => DocumentPartKind::NamedFragment,
            Self::Operation(_) => DocumentPartKind::Operation,
            Self::SuppliedValue(_) => DocumentPartKind::SuppliedValue,
            Self::Variable(_) => DocumentPartKind::Variable,
        }
    }
}

/// One semantic node of a [`QueryDocument`](crate::QueryDocument).
///
/// Parts form a tree through `parent`/`children`. A fragment spread refers to
/// its named fragment by id, never by ownership.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPart {
    pub(crate) children: Vec<PartId>,
    pub(crate) data: DocumentPartData,
    pub(crate) location: SourceLocation,
    pub(crate) parent: Option<PartId>,
}
impl DocumentPart {
    pub fn children(&self) -> &[PartId] {
        self.children.as_slice()
    }

    pub fn data(&self) -> &DocumentPartData {
        &self.data
    }

    pub fn kind(&self) -> DocumentPartKind {
        self.data.kind()
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn parent(&self) -> Option<PartId> {
        self.parent
    }

    pub fn as_directive(&self) -> Option<&DirectivePart> {
        if let DocumentPartData::Directive(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_field(&self) -> Option<&FieldPart> {
        if let DocumentPartData::Field(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_field_selection_set(&self) -> Option<&FieldSelectionSetPart> {
        if let DocumentPartData::FieldSelectionSet(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_fragment_spread(&self) -> Option<&FragmentSpreadPart> {
        if let DocumentPartData::FragmentSpread(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragmentPart> {
        if let DocumentPartData::InlineFragment(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_input_argument(&self) -> Option<&InputArgumentPart> {
        if let DocumentPartData::InputArgument(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_input_object_field(&self) -> Option<&InputObjectFieldPart> {
        if let DocumentPartData::InputObjectField(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_named_fragment(&self) -> Option<&NamedFragmentPart> {
        if let DocumentPartData::NamedFragment(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_operation(&self) -> Option<&OperationPart> {
        if let DocumentPartData::Operation(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_supplied_value(&self) -> Option<&SuppliedValuePart> {
        if let DocumentPartData::SuppliedValue(p) = &self.data { Some(p) } else { None }
    }

    pub fn as_variable(&self) -> Option<&VariablePart> {
        if let DocumentPartData::Variable(p) = &self.data { Some(p) } else { None }
    }

    /// Whether the part survives literal `@skip`/`@include` evaluation.
    /// Parts that cannot carry those directives are always included.
    pub fn is_included(&self) -> bool {
        match &self.data {
            DocumentPartData::Field(p) => p.is_included,
            DocumentPartData::FragmentSpread(p) => p.is_included,
            DocumentPartData::InlineFragment(p) => p.is_included,
            _ => true,
        }
    }
}
