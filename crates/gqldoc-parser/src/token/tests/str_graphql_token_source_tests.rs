use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    StrGraphQLTokenSource::new(source).map(|t| t.kind).collect()
}

#[test]
fn punctuators_and_names() {
    assert_eq!(
        kinds("{ user(id: $id) @skip }"),
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::name_borrowed("user"),
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::name_borrowed("id"),
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::name_borrowed("id"),
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::At,
            GraphQLTokenKind::name_borrowed("skip"),
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn commas_and_comments_are_ignored() {
    assert_eq!(
        kinds("a, b # trailing comment\n,c"),
        vec![
            GraphQLTokenKind::name_borrowed("a"),
            GraphQLTokenKind::name_borrowed("b"),
            GraphQLTokenKind::name_borrowed("c"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("0 -12 3.25 1e10 -6.02E+23"),
        vec![
            GraphQLTokenKind::int_value_borrowed("0"),
            GraphQLTokenKind::int_value_borrowed("-12"),
            GraphQLTokenKind::float_value_borrowed("3.25"),
            GraphQLTokenKind::float_value_borrowed("1e10"),
            GraphQLTokenKind::float_value_borrowed("-6.02E+23"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn leading_zero_is_an_error() {
    let tokens = kinds("007");
    assert!(tokens[0].is_error());
    assert_eq!(tokens.last(), Some(&GraphQLTokenKind::Eof));
}

#[test]
fn number_followed_by_name_is_an_error() {
    assert!(kinds("12abc")[0].is_error());
}

#[test]
fn true_false_null_have_dedicated_kinds() {
    assert_eq!(
        kinds("true false null"),
        vec![
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn strings_keep_raw_text() {
    assert_eq!(
        kinds(r##""a\"b" """block""""##),
        vec![
            GraphQLTokenKind::string_value_borrowed(r#""a\"b""#),
            GraphQLTokenKind::string_value_borrowed(r#""""block""""#),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn unterminated_string_is_an_error_and_lexing_continues() {
    let tokens = kinds("\"abc\nname");
    assert!(tokens[0].is_error());
    assert_eq!(tokens[1], GraphQLTokenKind::name_borrowed("name"));
}

#[test]
fn two_dots_suggest_an_ellipsis() {
    let tokens = kinds("..");
    let GraphQLTokenKind::Error { error_notes, .. } = &tokens[0] else {
        panic!("expected an error token, got {:?}", tokens[0]);
    };
    assert_eq!(error_notes.len(), 1);
}

#[test]
fn positions_track_lines_and_utf16_columns() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("# 😀 comment\r\n  \"😀\" name").collect();

    let string_start = tokens[0].span.start_inclusive;
    assert_eq!(string_start.line(), 1);
    assert_eq!(string_start.col_utf8(), 2);

    let name_start = tokens[1].span.start_inclusive;
    assert_eq!(name_start.line(), 1);
    assert_eq!(name_start.col_utf8(), 6);
    assert_eq!(name_start.col_utf16(), 7);
    assert_eq!(name_start.byte_offset(), "# 😀 comment\r\n  \"😀\" ".len());
}

#[test]
fn eof_is_emitted_exactly_once() {
    let mut source = StrGraphQLTokenSource::new("");
    assert_eq!(source.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(source.next().is_none());
}
