use crate::loc::SourceLocation;
use crate::messages::codes;
use crate::messages::GraphQLMessage;
use crate::messages::GraphQLMessageCollection;
use crate::messages::GraphQLMessageSeverity;

#[test]
fn severities_are_ordered() {
    assert!(GraphQLMessageSeverity::Trace < GraphQLMessageSeverity::Debug);
    assert!(GraphQLMessageSeverity::Debug < GraphQLMessageSeverity::Information);
    assert!(GraphQLMessageSeverity::Information < GraphQLMessageSeverity::Warning);
    assert!(GraphQLMessageSeverity::Warning < GraphQLMessageSeverity::Critical);
    assert!(GraphQLMessageSeverity::Critical.is_critical());
    assert!(!GraphQLMessageSeverity::Warning.is_critical());
}

#[test]
fn empty_collection_has_no_severity() {
    let messages = GraphQLMessageCollection::new();
    assert!(messages.is_empty());
    assert_eq!(messages.severity(), None);
    assert!(!messages.has_critical());
}

#[test]
fn severity_is_the_highest_recorded() {
    let mut messages = GraphQLMessageCollection::new();
    messages.add(GraphQLMessage::warning(codes::INVALID_DOCUMENT, "unused"));
    assert_eq!(messages.severity(), Some(GraphQLMessageSeverity::Warning));
    assert!(!messages.has_critical());

    messages.add(GraphQLMessage::critical(codes::REQUEST_ABORTED, "too deep"));
    assert_eq!(messages.severity(), Some(GraphQLMessageSeverity::Critical));
    assert!(messages.has_critical());
    assert!(messages.contains_code(codes::REQUEST_ABORTED));
    assert!(!messages.contains_code(codes::SYNTAX_ERROR));
    assert_eq!(messages.len(), 2);
}

#[test]
fn filters_by_rule_reference() {
    let mut messages = GraphQLMessageCollection::new();
    messages.add(
        GraphQLMessage::critical(codes::INVALID_DOCUMENT, "cycle")
            .with_rule_reference("5.5.2.2"),
    );
    messages.add(
        GraphQLMessage::warning(codes::INVALID_DOCUMENT, "unused")
            .with_rule_reference("5.5.1.4"),
    );

    let cycles: Vec<_> = messages.for_rule("5.5.2.2").collect();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].message, "cycle");
}

#[test]
fn display_includes_location_and_reference() {
    let message = GraphQLMessage::critical(codes::INVALID_DOCUMENT, "Unknown fragment \"Missing\".")
        .with_location(SourceLocation::new(3, 7))
        .with_rule_reference("5.5.2.1");

    assert_eq!(
        message.to_string(),
        "critical [INVALID_DOCUMENT] 3:7: Unknown fragment \"Missing\". (spec 5.5.2.1)",
    );
}
