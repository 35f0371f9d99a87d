use crate::messages::GraphQLMessageSeverity;
use crate::tests::utils::build_document;
use crate::tests::utils::test_schema;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRuleProcessor;
use crate::DocumentGenerator;

#[test]
fn rules_run_in_section_order() {
    let references: Vec<_> = DocumentValidationRuleProcessor::new()
        .rules()
        .iter()
        .map(|rule| rule.rule_reference())
        .collect();
    assert_eq!(
        references,
        vec![
            "5.2.1.1", "5.2.2.1", "5.2.3.1", "5.3.3", "5.4.2", "5.4.2.1", "5.5.1.1",
            "5.5.1.3", "5.5.1.4", "5.5.2.1", "5.5.2.2", "5.5.2.3", "5.6.1", "5.6.3",
            "5.7.2", "5.7.3", "5.8.1", "5.8.2", "5.8.3", "5.8.4", "5.8.5",
        ],
    );
}

#[test]
fn valid_document_has_no_messages() {
    let schema = test_schema();
    let document = build_document(&schema, "query { user(id: 1) { id name } }");
    let mut context = DocumentValidationContext::new(&document, &schema);
    assert!(DocumentValidationRuleProcessor::new().execute(&mut context));
    assert!(context.messages().is_empty());
}

#[test]
fn warnings_do_not_fail_validation() {
    let schema = test_schema();
    let generator = DocumentGenerator::new(&schema);
    let mut document = generator
        .create_document("{ version } fragment Unused on Dog { name }")
        .unwrap();
    assert!(generator.validate_document(&mut document));
    assert_eq!(document.messages().severity(), Some(GraphQLMessageSeverity::Warning));
}

#[test]
fn revalidating_adds_no_messages() {
    let schema = test_schema();
    let generator = DocumentGenerator::new(&schema);
    let mut document = generator.create_document("{ dog { ...Missing } }").unwrap();
    assert!(!generator.validate_document(&mut document));
    let count = document.messages().len();
    assert!(count > 0);

    assert!(!generator.validate_document(&mut document));
    assert_eq!(document.messages().len(), count);
    assert!(document.is_validated());
}

#[test]
fn every_rule_reports_independently() {
    let schema = test_schema();
    let generator = DocumentGenerator::new(&schema);
    let mut document = generator
        .create_document("query Q { dog { ...Missing } } query Q { user { id } }")
        .unwrap();
    generator.validate_document(&mut document);

    let mut references: Vec<_> = document
        .messages()
        .iter()
        .filter_map(|m| m.rule_reference.clone())
        .collect();
    references.dedup();
    assert_eq!(references, vec!["5.2.1.1", "5.4.2.1", "5.5.2.1"]);
}
