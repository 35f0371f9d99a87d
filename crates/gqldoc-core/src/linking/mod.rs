//! Passes that run after construction: resolving fragment spreads to their
//! named fragments, and indexing what each operation and fragment contains.

mod document_aggregator;
mod fragment_linker;

pub use document_aggregator::DocumentAggregator;
pub use fragment_linker::FragmentLinker;
