use crate::GraphQLStringParsingError;
use crate::token::GraphQLTokenKind;

fn unescape(raw: &str) -> Result<String, GraphQLStringParsingError> {
    GraphQLTokenKind::string_value_borrowed(raw)
        .parse_string_value()
        .expect("is a string token")
}

#[test]
fn simple_string_is_unquoted() {
    assert_eq!(unescape("\"hello\"").unwrap(), "hello");
}

#[test]
fn standard_escapes_are_processed() {
    assert_eq!(
        unescape(r#""a\nb\tc\\d\"e\/f""#).unwrap(),
        "a\nb\tc\\d\"e/f",
    );
}

#[test]
fn fixed_width_unicode_escape() {
    assert_eq!(unescape(r#""\u00E9""#).unwrap(), "é");
}

#[test]
fn braced_unicode_escape() {
    assert_eq!(unescape(r#""\u{1F600}""#).unwrap(), "😀");
}

#[test]
fn unknown_escape_is_rejected() {
    assert_eq!(
        unescape(r#""\q""#),
        Err(GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string())),
    );
}

#[test]
fn truncated_unicode_escape_is_rejected() {
    assert!(matches!(
        unescape(r#""\u12""#),
        Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn surrogate_code_point_is_rejected() {
    assert!(matches!(
        unescape(r#""\uD800""#),
        Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn int_and_float_values_parse() {
    assert_eq!(
        GraphQLTokenKind::int_value_borrowed("-42").parse_int_value(),
        Some(Ok(-42)),
    );
    assert_eq!(
        GraphQLTokenKind::float_value_borrowed("1.5e2").parse_float_value(),
        Some(Ok(150.0)),
    );
    assert!(GraphQLTokenKind::Bang.parse_int_value().is_none());
}

#[test]
fn keywords_are_valid_names() {
    assert_eq!(GraphQLTokenKind::True.as_name(), Some("true"));
    assert_eq!(GraphQLTokenKind::Null.as_name(), Some("null"));
    assert_eq!(GraphQLTokenKind::name_borrowed("user").as_name(), Some("user"));
    assert_eq!(GraphQLTokenKind::Colon.as_name(), None);
}

#[test]
fn punctuators_describe_themselves() {
    assert_eq!(GraphQLTokenKind::Ellipsis.as_punctuator_str(), Some("..."));
    assert_eq!(GraphQLTokenKind::CurlyBraceOpen.describe(), "`{`");
    assert_eq!(GraphQLTokenKind::Eof.describe(), "end of input");
}
