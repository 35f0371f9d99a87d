//! Builds a [`QueryDocument`](crate::QueryDocument) from a syntax tree.
//!
//! The [processor](DocumentConstructionRuleProcessor) walks the tree once,
//! depth first and in source order. Each node is run through the rules
//! [registered for its kind](rules::rules_for); a rule can create a part,
//! record a diagnostic and skip the node's subtree, or abort construction
//! entirely when the tree is structurally unusable.

mod construction_context;
mod construction_rule;
mod document_construction_rule_processor;
pub mod rules;

pub use construction_context::ConstructionContext;
pub use construction_rule::ConstructionRule;
pub use construction_rule::RuleOutcome;
pub use document_construction_rule_processor::DocumentConstructionRuleProcessor;

#[cfg(test)]
mod tests;
