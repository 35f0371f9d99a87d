//! Semantic analysis for GraphQL query documents.
//!
//! Query text is parsed by [`gqldoc_parser`], walked by the
//! [construction rules](construction) into a [`QueryDocument`] of typed parts
//! resolved against a [`Schema`](schema::Schema), linked, validated, and
//! finally turned into an [`ExecutionPlan`](plan::ExecutionPlan).

mod config;
pub mod complexity;
pub mod construction;
pub mod depth;
pub mod document;
pub mod file_reader;
mod document_generator;
pub mod linking;
pub mod loc;
pub mod messages;
pub mod plan;
pub mod schema;
pub mod validation;

pub use config::SchemaConfiguration;
pub use document::QueryDocument;
pub use document_generator::DocumentGenerator;
pub use document_generator::DocumentGeneratorError;
pub use messages::GraphQLMessage;
pub use messages::GraphQLMessageCollection;
pub use messages::GraphQLMessageSeverity;

#[cfg(test)]
mod tests;
