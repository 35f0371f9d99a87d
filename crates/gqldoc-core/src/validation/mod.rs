//! Validation of a constructed query document against the rules of section
//! 5 of the GraphQL specification.

mod document_validation_context;
mod document_validation_rule;
mod document_validation_rule_processor;
pub mod rules;

pub use document_validation_context::DocumentValidationContext;
pub use document_validation_rule::DocumentValidationRule;
pub use document_validation_rule_processor::DocumentValidationRuleProcessor;

#[cfg(test)]
mod tests;
