use crate::validation::DocumentValidationContext;

/// One independent check over a whole document.
pub trait DocumentValidationRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// The GraphQL specification section the rule enforces, e.g. `"5.5.2.2"`.
    fn rule_reference(&self) -> &'static str;

    fn validate(&self, context: &mut DocumentValidationContext<'_>);
}
