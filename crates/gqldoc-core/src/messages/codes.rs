//! Machine-readable codes carried by [`GraphQLMessage`](super::GraphQLMessage)s.

/// A configured limit (depth, complexity) was exceeded.
pub const REQUEST_ABORTED: &str = "REQUEST_ABORTED";

/// The document is syntactically fine but semantically invalid.
pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";

/// The query text could not be parsed into a usable document.
pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";

/// The request does not identify a single operation to run.
pub const BAD_REQUEST: &str = "BAD_REQUEST";
