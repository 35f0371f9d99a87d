//! Arena-allocated syntax trees.
//!
//! Every node produced by one parse lives in a single [`SyntaxTree`] node
//! table and refers to its parent and children by [`SyntaxNodeId`]. Dropping
//! (or [`reset`](SyntaxTree::reset)-ing) the tree releases all of its nodes
//! at once.

mod directive_location;
mod operation_type;
mod syntax_node;
mod syntax_node_kind;
mod syntax_tree;
mod type_expression;

pub use directive_location::DirectiveLocation;
pub use operation_type::OperationType;
pub use syntax_node::SyntaxNode;
pub use syntax_node::SyntaxNodeChildren;
pub use syntax_node::SyntaxNodeId;
pub use syntax_node_kind::ScalarValueKind;
pub use syntax_node_kind::SyntaxNodeKind;
pub use syntax_node_kind::SyntaxNodeKindTag;
pub use syntax_node_kind::TypeDefinitionKind;
pub use syntax_tree::SyntaxTree;
pub use type_expression::TypeExpression;
