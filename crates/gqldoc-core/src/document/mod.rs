//! The document part model: an arena of typed, schema-resolved nodes built
//! from a query document's syntax tree.

mod aggregated_parts;
mod directive_part;
mod document_part;
mod document_part_error;
mod field_part;
mod field_selection_set_part;
mod fragment_spread_part;
mod inline_fragment_part;
mod input_argument_part;
mod input_object_field_part;
mod named_fragment_part;
mod operation_part;
mod query_document;
mod supplied_value_part;
mod variable_part;

pub use aggregated_parts::AggregatedParts;
pub use directive_part::DirectivePart;
pub use document_part::DocumentPart;
pub use document_part::DocumentPartData;
pub use document_part::DocumentPartKind;
pub use document_part::PartId;
pub use document_part_error::DocumentPartError;
pub use field_part::FieldPart;
pub use field_selection_set_part::FieldSelectionSetPart;
pub use fragment_spread_part::FragmentSpreadPart;
pub use inline_fragment_part::InlineFragmentPart;
pub use input_argument_part::InputArgumentPart;
pub use input_object_field_part::InputObjectFieldPart;
pub use named_fragment_part::NamedFragmentPart;
pub use operation_part::OperationPart;
pub use query_document::QueryDocument;
pub use supplied_value_part::SuppliedValueKind;
pub use supplied_value_part::SuppliedValuePart;
pub use variable_part::VariablePart;

#[cfg(test)]
mod tests;
