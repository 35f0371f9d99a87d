use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use crate::validation::rules;

const RULES: &[&dyn DocumentValidationRule] = &[
    &rules::UniqueOperationNamesRule,
    &rules::LoneAnonymousOperationRule,
    &rules::SingleRootFieldRule,
    &rules::LeafFieldSelectionsRule,
    &rules::UniqueArgumentNamesRule,
    &rules::RequiredArgumentsRule,
    &rules::UniqueFragmentNamesRule,
    &rules::FragmentsOnCompositeTypesRule,
    &rules::NoUnusedFragmentsRule,
    &rules::KnownFragmentNamesRule,
    &rules::NoFragmentCyclesRule,
    &rules::PossibleFragmentSpreadsRule,
    &rules::ValuesOfCorrectTypeRule,
    &rules::InputObjectFieldsRule,
    &rules::DirectivesInValidLocationsRule,
    &rules::UniqueDirectivesPerLocationRule,
    &rules::UniqueVariableNamesRule,
    &rules::VariablesAreInputTypesRule,
    &rules::NoUndefinedVariablesRule,
    &rules::NoUnusedVariablesRule,
    &rules::VariablesInAllowedPositionRule,
];

/// Runs every validation rule, in order, over one document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentValidationRuleProcessor;
impl DocumentValidationRuleProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn rules(&self) -> &'static [&'static dyn DocumentValidationRule] {
        RULES
    }

    /// Returns `true` when no rule recorded a Critical message.
    ///
    /// Every rule runs even after one has failed, so all problems with the
    /// document are reported together.
    pub fn execute(&self, context: &mut DocumentValidationContext<'_>) -> bool {
        for rule in RULES {
            let before = context.messages().len();
            rule.validate(context);
            let reported = context.messages().len() - before;
            if reported > 0 {
                tracing::trace!(
                    rule = rule.name(),
                    rule_reference = rule.rule_reference(),
                    reported,
                    "validation rule reported",
                );
            }
        }
        let is_valid = !context.messages().has_critical();
        tracing::debug!(messages = context.messages().len(), is_valid, "validated query document");
        is_valid
    }
}
