mod document_validation_rule_processor_tests;
mod fragment_rule_tests;
mod operation_rule_tests;
mod variable_rule_tests;

use crate::QueryDocument;

/// Messages recorded for `rule_reference`.
fn rule_messages(document: &QueryDocument, rule_reference: &str) -> Vec<String> {
    document
        .messages()
        .for_rule(rule_reference)
        .map(|m| m.message.clone())
        .collect()
}
