use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// A lexer over a `&str`.
///
/// Names and literals borrow directly from the source text. Line/column
/// tracking treats `\n`, `\r` and `\r\n` each as a single line terminator.
///
/// ```rust
/// # use gqldoc_parser::token_source::StrGraphQLTokenSource;
/// let tokens: Vec<_> = StrGraphQLTokenSource::new("{ name }").collect();
/// assert_eq!(tokens.len(), 4);
/// ```
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,
    curr_byte_offset: usize,
    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,
    last_char_was_cr: bool,
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.track(ch);
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `len` bytes of source text, which must end on a char
    /// boundary.
    fn consume_bytes(&mut self, len: usize) {
        let text = &self.remaining()[..len];
        for ch in text.chars() {
            self.track(ch);
        }
        self.curr_byte_offset += len;
    }

    fn track(&mut self, ch: char) {
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn punctuator(&mut self, start: SourcePosition, kind: GraphQLTokenKind<'src>) -> GraphQLToken<'src> {
        self.consume();
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn error_token(
        &self,
        start: SourcePosition,
        message: impl Into<String>,
        notes: GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(GraphQLTokenKind::error(message, notes), self.make_span(start))
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            let start = self.curr_position();
            let Some(ch) = self.peek_char() else {
                return GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start));
            };

            return match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                    continue;
                },
                '#' => {
                    self.skip_comment();
                    continue;
                },
                '!' => self.punctuator(start, GraphQLTokenKind::Bang),
                '$' => self.punctuator(start, GraphQLTokenKind::Dollar),
                '&' => self.punctuator(start, GraphQLTokenKind::Ampersand),
                '(' => self.punctuator(start, GraphQLTokenKind::ParenOpen),
                ')' => self.punctuator(start, GraphQLTokenKind::ParenClose),
                ':' => self.punctuator(start, GraphQLTokenKind::Colon),
                '=' => self.punctuator(start, GraphQLTokenKind::Equals),
                '@' => self.punctuator(start, GraphQLTokenKind::At),
                '[' => self.punctuator(start, GraphQLTokenKind::SquareBracketOpen),
                ']' => self.punctuator(start, GraphQLTokenKind::SquareBracketClose),
                '{' => self.punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
                '}' => self.punctuator(start, GraphQLTokenKind::CurlyBraceClose),
                '|' => self.punctuator(start, GraphQLTokenKind::Pipe),
                '.' => self.lex_ellipsis(start),
                '"' => self.lex_string(start),
                c if is_name_start(c) => self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                c => {
                    self.consume();
                    self.error_token(
                        start,
                        format!("Unexpected character {}", describe_char(c)),
                        smallvec![],
                    )
                },
            };
        }
    }

    /// Comments run to the end of the line and never contain a line
    /// terminator, so the column can be advanced in bulk.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let comment = &rest[..len];
        self.curr_col_utf8 += comment.chars().count();
        self.curr_col_utf16 += comment.encode_utf16().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume_bytes(3);
            return GraphQLToken::new(GraphQLTokenKind::Ellipsis, self.make_span(start));
        }

        let mut dots = 0;
        while self.peek_char() == Some('.') {
            self.consume();
            dots += 1;
        }
        let notes = if dots == 2 {
            smallvec![GraphQLErrorNote::help("Add a third `.` to form a spread `...`")]
        } else {
            smallvec![]
        };
        self.error_token(start, "Unexpected `.`", notes)
    }

    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.remaining();
        let len = rest
            .bytes()
            .position(|b| !(b == b'_' || b.is_ascii_alphanumeric()))
            .unwrap_or(rest.len());
        let name = &rest[..len];
        self.consume_bytes(len);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    /// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`, not directly
    /// followed by a name start or `.`.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let start_offset = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.consume_digits();
                    return self.error_token(
                        start,
                        "Invalid number: leading zeros are not allowed",
                        smallvec![],
                    );
                }
            },
            Some(c) if c.is_ascii_digit() => self.consume_digits(),
            _ => {
                return self.error_token(
                    start,
                    "Invalid number: expected a digit after `-`",
                    smallvec![],
                );
            },
        }

        if self.peek_char() == Some('.') {
            self.consume();
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return self.error_token(
                    start,
                    "Invalid number: expected a digit after `.`",
                    smallvec![],
                );
            }
            self.consume_digits();
            is_float = true;
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            self.consume();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return self.error_token(
                    start,
                    "Invalid number: expected a digit in the exponent",
                    smallvec![],
                );
            }
            self.consume_digits();
            is_float = true;
        }

        if self.peek_char().is_some_and(|c| c == '.' || is_name_start(c)) {
            while self.peek_char().is_some_and(|c| c == '.' || is_name_continue(c)) {
                self.consume();
            }
            return self.error_token(
                start,
                "Invalid number: a number may not be directly followed by a name or `.`",
                smallvec![GraphQLErrorNote::help("Separate the number and the name with a space")],
            );
        }

        let raw = &self.source[start_offset..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(raw)
        } else {
            GraphQLTokenKind::int_value_borrowed(raw)
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume();
        }
    }

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        let start_offset = self.curr_byte_offset;
        self.consume();
        loop {
            let rest = self.remaining().as_bytes();
            let Some(idx) = memchr::memchr3(b'"', b'\\', b'\n', rest) else {
                return self.unterminated_string(start);
            };
            if let Some(cr) = memchr::memchr(b'\r', &rest[..idx]) {
                self.consume_bytes(cr);
                return self.unterminated_string(start);
            }
            self.consume_bytes(idx);
            match self.consume() {
                Some('"') => break,
                Some('\\') => {
                    // The escaped character is validated when the value is
                    // unescaped; here it only must not end the string.
                    if matches!(self.peek_char(), None | Some('\n') | Some('\r')) {
                        return self.unterminated_string(start);
                    }
                    self.consume();
                },
                _ => return self.unterminated_string(start),
            }
        }

        let raw = &self.source[start_offset..self.curr_byte_offset];
        GraphQLToken::new(GraphQLTokenKind::string_value_borrowed(raw), self.make_span(start))
    }

    fn unterminated_string(&self, start: SourcePosition) -> GraphQLToken<'src> {
        self.error_token(
            start,
            "Unterminated string literal",
            smallvec![GraphQLErrorNote::help(
                "Close the string with `\"` before the end of the line, or use a block string `\"\"\"`",
            )],
        )
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let start_offset = self.curr_byte_offset;
        self.consume_bytes(3);

        let mut search_from = 0;
        loop {
            let rest = &self.remaining()[search_from..];
            let Some(idx) = memchr::memmem::find(rest.as_bytes(), b"\"\"\"") else {
                let len = self.remaining().len();
                self.consume_bytes(len);
                return self.error_token(
                    start,
                    "Unterminated block string",
                    smallvec![GraphQLErrorNote::help("Close the block string with `\"\"\"`")],
                );
            };
            let absolute = search_from + idx;
            if absolute > 0 && self.remaining().as_bytes()[absolute - 1] == b'\\' {
                search_from = absolute + 3;
                continue;
            }
            self.consume_bytes(absolute + 3);
            break;
        }

        let raw = &self.source[start_offset..self.curr_byte_offset];
        GraphQLToken::new(GraphQLTokenKind::string_value_borrowed(raw), self.make_span(start))
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

fn describe_char(ch: char) -> String {
    if ch.is_control() || ch.is_whitespace() {
        format!("U+{:04X}", ch as u32)
    } else {
        format!("`{ch}` (U+{:04X})", ch as u32)
    }
}
