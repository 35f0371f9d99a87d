//! Diagnostics produced while analysing a query document.
//!
//! Semantic problems are never Rust errors: each one becomes a
//! [`GraphQLMessage`] so that every problem in a document can be reported at
//! once.

pub mod codes;
mod graphql_message;
mod graphql_message_collection;
mod graphql_message_severity;

pub use graphql_message::GraphQLMessage;
pub use graphql_message_collection::GraphQLMessageCollection;
pub use graphql_message_severity::GraphQLMessageSeverity;

#[cfg(test)]
mod tests;
