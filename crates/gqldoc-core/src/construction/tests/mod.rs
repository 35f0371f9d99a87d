mod construction_rule_tests;
mod document_construction_rule_processor_tests;
