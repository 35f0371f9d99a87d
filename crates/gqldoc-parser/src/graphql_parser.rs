//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] consumes tokens from any [`GraphQLTokenSource`] and
//! writes nodes straight into a [`SyntaxTree`] arena. Grammar rules return
//! `Result<_, ()>`: `Err(())` means an error was already recorded and the
//! caller should unwind to the enclosing definition, where the partially
//! built definition is discarded and parsing resumes at the next definition
//! keyword. This lets one pass report an error per broken definition.

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ParseResult;
use crate::SmallVec;
use crate::syntax::DirectiveLocation;
use crate::syntax::OperationType;
use crate::syntax::ScalarValueKind;
use crate::syntax::SyntaxNodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxTree;
use crate::syntax::TypeDefinitionKind;
use crate::syntax::TypeExpression;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;

/// The kind of GraphQL document being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Only type system definitions (`schema`, `type`, `directive`, ...).
    Schema,

    /// Only operations and fragments.
    Executable,

    /// Both type system and executable definitions.
    Mixed,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Schema => "a schema",
            Self::Executable => "an executable",
            Self::Mixed => "a mixed",
        })
    }
}

// =============================================================================
// Delimiter tracking
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    SelectionSet,
    Arguments,
    VariableDefinitions,
    ListType,
    ListValue,
    ObjectValue,
    SchemaDefinition,
    FieldsDefinition,
    ArgumentsDefinition,
    EnumValuesDefinition,
    InputFieldsDefinition,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            Self::SelectionSet => "selection set",
            Self::Arguments => "argument list",
            Self::VariableDefinitions => "variable definitions",
            Self::ListType => "list type",
            Self::ListValue => "list value",
            Self::ObjectValue => "input object value",
            Self::SchemaDefinition => "schema definition",
            Self::FieldsDefinition => "field definitions",
            Self::ArgumentsDefinition => "argument definitions",
            Self::EnumValuesDefinition => "enum values",
            Self::InputFieldsDefinition => "input field definitions",
        }
    }
}

#[derive(Debug, Clone)]
struct OpenDelimiter {
    token: &'static str,
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefinitionCategory {
    Executable,
    TypeSystem,
}

type PResult<T> = Result<T, ()>;

/// A GraphQL parser producing an arena-allocated [`SyntaxTree`].
///
/// ```
/// use gqldoc_parser::GraphQLParser;
///
/// let result = GraphQLParser::new("query { user { id } }").parse_executable_document();
/// assert!(result.is_ok());
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
    errors: Vec<GraphQLParseError>,
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared nesting counter for values, selection sets and list types.
    recursion_depth: usize,

    /// Span of the most recently consumed token.
    last_span: GraphQLSourceSpan,
    consumed_tokens: usize,
    tree: SyntaxTree,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting of selection sets, list/object values and list types.
    /// Deeper input is reported as an error instead of overflowing the stack.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            errors: Vec::new(),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_span: GraphQLSourceSpan::default(),
            consumed_tokens: 0,
            tree: SyntaxTree::new(),
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    pub fn parse_schema_document(self) -> ParseResult<SyntaxTree> {
        self.parse_document(DocumentKind::Schema)
    }

    pub fn parse_executable_document(self) -> ParseResult<SyntaxTree> {
        self.parse_document(DocumentKind::Executable)
    }

    pub fn parse_mixed_document(self) -> ParseResult<SyntaxTree> {
        self.parse_document(DocumentKind::Mixed)
    }

    fn parse_document(mut self, document_kind: DocumentKind) -> ParseResult<SyntaxTree> {
        let root = self.tree.root();
        let start = self.peek_span();

        while !self.token_stream.is_at_end() {
            let mark = self.tree.mark();
            let consumed_before = self.consumed_tokens;
            match self.parse_definition(root, document_kind) {
                Ok(()) => {},
                Err(()) => {
                    self.tree.truncate(mark);
                    self.recover_to_next_definition();
                    if self.consumed_tokens == consumed_before {
                        self.consume_token();
                    }
                },
            }
        }

        let end = self.peek_span();
        self.tree.set_root_span(start.through(&end));
        tracing::trace!(
            nodes = self.tree.node_count(),
            errors = self.errors.len(),
            "parsed {document_kind} document",
        );

        if self.errors.is_empty() {
            ParseResult::ok(self.tree)
        } else {
            ParseResult::recovered(self.tree, self.errors)
        }
    }

    fn parse_definition(&mut self, root: SyntaxNodeId, document_kind: DocumentKind) -> PResult<()> {
        let Some(category) = self.peek_definition_category() else {
            self.record_unexpected(&["query", "mutation", "subscription", "fragment", "{", "type"]);
            return Err(());
        };

        let allowed = match (document_kind, category) {
            (DocumentKind::Mixed, _) => true,
            (DocumentKind::Executable, DefinitionCategory::Executable) => true,
            (DocumentKind::Schema, DefinitionCategory::TypeSystem) => true,
            _ => false,
        };

        let mark = self.tree.mark();
        let start = self.peek_span();
        match category {
            DefinitionCategory::Executable => self.parse_executable_definition(root)?,
            DefinitionCategory::TypeSystem => self.parse_type_system_definition(root)?,
        }

        if !allowed {
            let found = self.tree.kind(self.last_child(root));
            let found = match found {
                SyntaxNodeKind::Operation { operation_type, .. } => operation_type.to_string(),
                SyntaxNodeKind::NamedFragment { .. } => "fragment".to_string(),
                other => format!("{:?}", other.tag()),
            };
            self.tree.truncate(mark);
            let mut error = GraphQLParseError::new(
                format!("`{found}` definitions are not allowed in {document_kind} document"),
                start.through(&self.last_span),
                GraphQLParseErrorKind::WrongDocumentKind {
                    found,
                    document_kind,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#sec-Executable-Definitions");
            self.record_error(error);
        }
        Ok(())
    }

    fn last_child(&self, parent: SyntaxNodeId) -> SyntaxNodeId {
        self.tree.children(parent).last().copied().unwrap_or(parent)
    }

    fn peek_definition_category(&mut self) -> Option<DefinitionCategory> {
        match self.peek_kind() {
            GraphQLTokenKind::CurlyBraceOpen => Some(DefinitionCategory::Executable),
            GraphQLTokenKind::StringValue(_) => Some(DefinitionCategory::TypeSystem),
            GraphQLTokenKind::Name(name) => match name.as_ref() {
                "query" | "mutation" | "subscription" | "fragment" => {
                    Some(DefinitionCategory::Executable)
                },
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "directive" | "extend" => Some(DefinitionCategory::TypeSystem),
                _ => None,
            },
            _ => None,
        }
    }

    // =========================================================================
    // Error recording and recovery
    // =========================================================================

    fn record_error(&mut self, error: GraphQLParseError) {
        self.errors.push(error);
    }

    /// Records an error describing the next token as unexpected. Lexer error
    /// tokens are reported with the lexer's own message and consumed.
    fn record_unexpected(&mut self, expected: &[&str]) {
        let Some(token) = self.token_stream.peek().cloned() else {
            self.record_unexpected_eof(expected);
            return;
        };
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        match token.kind {
            GraphQLTokenKind::Eof => self.record_unexpected_eof_at(expected, token.span),
            GraphQLTokenKind::Error { message, error_notes } => {
                self.consume_token();
                self.record_error(GraphQLParseError::from_lexer_error(
                    message,
                    token.span,
                    error_notes,
                ));
            },
            kind => {
                let found = kind.describe();
                self.record_error(GraphQLParseError::new(
                    format!("Expected {}, found {found}", format_expected(&expected)),
                    token.span,
                    GraphQLParseErrorKind::UnexpectedToken { expected, found },
                ));
            },
        }
    }

    fn record_unexpected_eof(&mut self, expected: &[&str]) {
        let expected = expected.iter().map(|e| e.to_string()).collect();
        let span = GraphQLSourceSpan::empty_at(self.last_span.end_exclusive);
        self.record_unexpected_eof_at(expected, span);
    }

    fn record_unexpected_eof_at(&mut self, expected: Vec<String>, span: GraphQLSourceSpan) {
        let error = match self.delimiter_stack.last().cloned() {
            Some(open) => {
                let mut error = GraphQLParseError::new(
                    format!("Unclosed `{}` in {}", open.token, open.context.description()),
                    span,
                    GraphQLParseErrorKind::UnclosedDelimiter {
                        delimiter: open.token.to_string(),
                    },
                );
                error.add_note_with_span("opened here", open.span);
                error
            },
            None => GraphQLParseError::new(
                format!("Expected {}, found end of input", format_expected(&expected)),
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            ),
        };
        self.record_error(error);
    }

    /// Skips tokens until a definition keyword (or `{`) at nesting depth zero.
    fn recover_to_next_definition(&mut self) {
        let mut depth = self.delimiter_stack.len();
        self.delimiter_stack.clear();
        self.recursion_depth = 0;

        loop {
            let kind = self.peek_kind();
            match kind {
                GraphQLTokenKind::Eof => break,
                GraphQLTokenKind::CurlyBraceOpen if depth == 0 => break,
                GraphQLTokenKind::Name(ref name)
                    if depth == 0 && self.looks_like_definition_start(name) =>
                {
                    break;
                },
                GraphQLTokenKind::CurlyBraceOpen
                | GraphQLTokenKind::ParenOpen
                | GraphQLTokenKind::SquareBracketOpen => depth += 1,
                GraphQLTokenKind::CurlyBraceClose
                | GraphQLTokenKind::ParenClose
                | GraphQLTokenKind::SquareBracketClose => depth = depth.saturating_sub(1),
                _ => {},
            }
            self.consume_token();
        }
    }

    fn looks_like_definition_start(&mut self, keyword: &str) -> bool {
        let next = self.token_stream.peek_nth(1).map(|t| t.kind.clone());
        match keyword {
            "type" | "interface" | "union" | "enum" | "scalar" | "input" | "fragment" => {
                next.as_ref().and_then(|k| k.as_name()).is_some()
            },
            "directive" => matches!(next, Some(GraphQLTokenKind::At)),
            "schema" => matches!(
                next,
                Some(GraphQLTokenKind::CurlyBraceOpen | GraphQLTokenKind::At)
            ),
            "extend" => matches!(
                next.as_ref().and_then(|k| k.as_name()),
                Some("type" | "interface" | "union" | "enum" | "scalar" | "input" | "schema")
            ),
            "query" | "mutation" | "subscription" => match &next {
                Some(kind) => {
                    kind.as_name().is_some()
                        || matches!(
                            kind,
                            GraphQLTokenKind::CurlyBraceOpen
                                | GraphQLTokenKind::ParenOpen
                                | GraphQLTokenKind::At
                        )
                },
                None => true,
            },
            _ => false,
        }
    }

    fn push_delimiter(&mut self, token: &'static str, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { token, span, context });
    }

    fn pop_delimiter(&mut self) {
        self.delimiter_stack.pop();
    }

    fn enter_recursion(&mut self) -> PResult<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let span = self.peek_span();
            self.record_error(GraphQLParseError::new(
                format!(
                    "Maximum nesting depth of {} exceeded",
                    Self::MAX_RECURSION_DEPTH,
                ),
                span,
                GraphQLParseErrorKind::RecursionLimit,
            ));
            self.recursion_depth -= 1;
            return Err(());
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_kind(&mut self) -> GraphQLTokenKind<'src> {
        self.token_stream
            .peek()
            .map(|t| t.kind.clone())
            .unwrap_or(GraphQLTokenKind::Eof)
    }

    fn peek_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span,
            None => GraphQLSourceSpan::empty_at(self.last_span.end_exclusive),
        }
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        self.token_stream.peek().is_some_and(|t| &t.kind == kind)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|t| matches!(&t.kind, GraphQLTokenKind::Name(n) if n == keyword))
    }

    fn peek_is_name(&mut self) -> bool {
        self.token_stream.peek().is_some_and(|t| t.kind.as_name().is_some())
    }

    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume()?;
        self.last_span = token.span;
        self.consumed_tokens += 1;
        Some(token)
    }

    fn expect(&mut self, expected: &GraphQLTokenKind) -> PResult<GraphQLToken<'src>> {
        if self.peek_is(expected) {
            return self.consume_token().ok_or(());
        }
        let display = expected.as_punctuator_str().unwrap_or("token");
        self.record_unexpected(&[display]);
        Err(())
    }

    fn expect_keyword(&mut self, keyword: &str) -> PResult<GraphQLSourceSpan> {
        if self.peek_is_keyword(keyword) {
            return self.consume_token().map(|t| t.span).ok_or(());
        }
        self.record_unexpected(&[keyword]);
        Err(())
    }

    /// Consumes a name. `true`, `false` and `null` are accepted: they match
    /// the `Name` production even though the lexer gives them their own kinds.
    fn expect_name(&mut self) -> PResult<(String, GraphQLSourceSpan)> {
        if self.peek_is_name()
            && let Some(token) = self.consume_token()
            && let Some(name) = token.kind.as_name()
        {
            return Ok((name.to_string(), token.span));
        }
        self.record_unexpected(&["name"]);
        Err(())
    }

    fn finish_node(&mut self, id: SyntaxNodeId) {
        let last = self.last_span;
        self.tree.set_span_end(id, &last);
    }

    fn parse_description(&mut self) -> PResult<Option<String>> {
        let GraphQLTokenKind::StringValue(_) = self.peek_kind() else {
            return Ok(None);
        };
        let token = self.consume_token().ok_or(())?;
        self.unescape_string(&token).map(Some)
    }

    fn unescape_string(&mut self, token: &GraphQLToken<'src>) -> PResult<String> {
        match token.kind.parse_string_value() {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) => {
                self.record_error(GraphQLParseError::new(
                    err.to_string(),
                    token.span,
                    GraphQLParseErrorKind::InvalidValue(err.to_string()),
                ));
                Err(())
            },
            None => Err(()),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn parse_executable_definition(&mut self, root: SyntaxNodeId) -> PResult<()> {
        if self.peek_is_keyword("fragment") {
            self.parse_fragment_definition(root)
        } else {
            self.parse_operation_definition(root)
        }
    }

    fn parse_operation_definition(&mut self, root: SyntaxNodeId) -> PResult<()> {
        let start = self.peek_span();

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let op = self.tree.add_node(
                SyntaxNodeKind::Operation {
                    operation_type: OperationType::Query,
                    name: None,
                },
                start,
                root,
            );
            self.parse_selection_set(op)?;
            self.finish_node(op);
            return Ok(());
        }

        let (keyword, _) = self.expect_name()?;
        let Some(operation_type) = OperationType::from_keyword(&keyword) else {
            self.record_error(GraphQLParseError::new(
                format!("Unknown operation type `{keyword}`"),
                start,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: vec!["query".into(), "mutation".into(), "subscription".into()],
                    found: keyword,
                },
            ));
            return Err(());
        };

        let name = if self.peek_is_name() {
            Some(self.expect_name()?.0)
        } else {
            None
        };

        let op = self.tree.add_node(
            SyntaxNodeKind::Operation { operation_type, name },
            start,
            root,
        );
        if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions(op)?;
        }
        self.parse_directives(op, false)?;
        self.parse_selection_set(op)?;
        self.finish_node(op);
        Ok(())
    }

    fn parse_variable_definitions(&mut self, op: SyntaxNodeId) -> PResult<()> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter("(", open.span, DelimiterContext::VariableDefinitions);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.record_error(GraphQLParseError::new(
                "Variable definitions cannot be empty",
                open.span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "variable definitions".to_string(),
                },
            ));
        }

        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.parse_variable_definition(op)?;
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(())
    }

    fn parse_variable_definition(&mut self, op: SyntaxNodeId) -> PResult<()> {
        let start = self.peek_span();
        self.expect(&GraphQLTokenKind::Dollar)?;
        let (name, _) = self.expect_name()?;
        if self.expect(&GraphQLTokenKind::Colon).is_err() {
            if let Some(error) = self.errors.last_mut() {
                error.add_help(format!("Declare a type for the variable: `${name}: String`"));
            }
            return Err(());
        }
        let type_expression = self.parse_type_expression()?;

        let var = self.tree.add_node(
            SyntaxNodeKind::Variable { name, type_expression },
            start,
            op,
        );
        if self.peek_is(&GraphQLTokenKind::Equals) {
            self.consume_token();
            self.parse_value(var, true)?;
        }
        self.parse_directives(var, true)?;
        self.finish_node(var);
        Ok(())
    }

    fn parse_type_expression(&mut self) -> PResult<TypeExpression> {
        self.enter_recursion()?;
        let result = self.parse_type_expression_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_expression_impl(&mut self) -> PResult<TypeExpression> {
        if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
            self.push_delimiter("[", open.span, DelimiterContext::ListType);
            let inner = self.parse_type_expression()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            self.pop_delimiter();
            let non_null = self.consume_bang();
            return Ok(TypeExpression::list(inner, non_null));
        }

        let (name, _) = self.expect_name()?;
        let non_null = self.consume_bang();
        Ok(TypeExpression::named(name, non_null))
    }

    fn consume_bang(&mut self) -> bool {
        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.consume_token();
            true
        } else {
            false
        }
    }

    fn parse_selection_set(&mut self, parent: SyntaxNodeId) -> PResult<SyntaxNodeId> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl(parent);
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self, parent: SyntaxNodeId) -> PResult<SyntaxNodeId> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let set = self.tree.add_node(SyntaxNodeKind::FieldSelectionSet, open.span, parent);
        self.push_delimiter("{", open.span, DelimiterContext::SelectionSet);

        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            self.record_error(GraphQLParseError::new(
                "Selection set cannot be empty",
                open.span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "selection set".to_string(),
                },
            ));
        }

        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            self.parse_selection(set)?;
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        self.finish_node(set);
        Ok(set)
    }

    fn parse_selection(&mut self, set: SyntaxNodeId) -> PResult<()> {
        let start = self.peek_span();
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return self.parse_field(set);
        }
        self.consume_token();

        if self.peek_is_name() && !self.peek_is_keyword("on") {
            let (name, _) = self.expect_name()?;
            let spread = self.tree.add_node(SyntaxNodeKind::FragmentSpread { name }, start, set);
            self.parse_directives(spread, false)?;
            self.finish_node(spread);
            return Ok(());
        }

        let type_condition = if self.peek_is_keyword("on") {
            self.consume_token();
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let fragment = self.tree.add_node(
            SyntaxNodeKind::InlineFragment { type_condition },
            start,
            set,
        );
        self.parse_directives(fragment, false)?;
        self.parse_selection_set(fragment)?;
        self.finish_node(fragment);
        Ok(())
    }

    fn parse_field(&mut self, set: SyntaxNodeId) -> PResult<()> {
        let start = self.peek_span();
        let (first, _) = self.expect_name()?;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.consume_token();
            let (name, _) = self.expect_name()?;
            (Some(first), name)
        } else {
            (None, first)
        };

        let field = self.tree.add_node(SyntaxNodeKind::Field { alias, name }, start, set);
        if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(field, false)?;
        }
        self.parse_directives(field, false)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_selection_set(field)?;
        }
        self.finish_node(field);
        Ok(())
    }

    fn parse_fragment_definition(&mut self, root: SyntaxNodeId) -> PResult<()> {
        let start = self.expect_keyword("fragment")?;
        if self.peek_is_keyword("on") {
            let span = self.peek_span();
            let mut error = GraphQLParseError::new(
                "Fragment name cannot be `on`",
                span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: vec!["name".to_string()],
                    found: "on".to_string(),
                },
            );
            error.add_help("Name the fragment before its type condition: `fragment Name on Type`");
            self.record_error(error);
            return Err(());
        }
        let (name, _) = self.expect_name()?;
        self.expect_keyword("on")?;
        let (type_condition, _) = self.expect_name()?;

        let fragment = self.tree.add_node(
            SyntaxNodeKind::NamedFragment { name, type_condition },
            start,
            root,
        );
        self.parse_directives(fragment, false)?;
        self.parse_selection_set(fragment)?;
        self.finish_node(fragment);
        Ok(())
    }

    fn parse_arguments(&mut self, parent: SyntaxNodeId, is_const: bool) -> PResult<()> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter("(", open.span, DelimiterContext::Arguments);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.record_error(GraphQLParseError::new(
                "Argument list cannot be empty",
                open.span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "argument list".to_string(),
                },
            ));
        }

        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            let start = self.peek_span();
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let argument = self.tree.add_node(SyntaxNodeKind::InputArgument { name }, start, parent);
            self.parse_value(argument, is_const)?;
            self.finish_node(argument);
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(())
    }

    fn parse_directives(&mut self, parent: SyntaxNodeId, is_const: bool) -> PResult<()> {
        while self.peek_is(&GraphQLTokenKind::At) {
            let start = self.peek_span();
            self.consume_token();
            let (name, _) = self.expect_name()?;
            let directive = self.tree.add_node(SyntaxNodeKind::Directive { name }, start, parent);
            if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments(directive, is_const)?;
            }
            self.finish_node(directive);
        }
        Ok(())
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, parent: SyntaxNodeId, is_const: bool) -> PResult<SyntaxNodeId> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(parent, is_const);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, parent: SyntaxNodeId, is_const: bool) -> PResult<SyntaxNodeId> {
        let start = self.peek_span();
        let kind = self.peek_kind();
        let node_kind = match kind {
            GraphQLTokenKind::Dollar => {
                self.consume_token();
                let (name, _) = self.expect_name()?;
                if is_const {
                    let mut error = GraphQLParseError::new(
                        format!("Variable `${name}` is not allowed in a constant value"),
                        start.through(&self.last_span),
                        GraphQLParseErrorKind::UnexpectedToken {
                            expected: vec!["constant value".to_string()],
                            found: format!("${name}"),
                        },
                    );
                    error.add_spec("https://spec.graphql.org/October2021/#sec-Input-Values");
                    self.record_error(error);
                    return Err(());
                }
                SyntaxNodeKind::VariableValue { name }
            },
            GraphQLTokenKind::IntValue(raw) => {
                self.consume_token();
                SyntaxNodeKind::ScalarValue {
                    kind: ScalarValueKind::Int,
                    value: raw.into_owned(),
                }
            },
            GraphQLTokenKind::FloatValue(raw) => {
                self.consume_token();
                SyntaxNodeKind::ScalarValue {
                    kind: ScalarValueKind::Float,
                    value: raw.into_owned(),
                }
            },
            GraphQLTokenKind::StringValue(_) => {
                let token = self.consume_token().ok_or(())?;
                SyntaxNodeKind::ScalarValue {
                    kind: ScalarValueKind::String,
                    value: self.unescape_string(&token)?,
                }
            },
            GraphQLTokenKind::True => {
                self.consume_token();
                SyntaxNodeKind::ScalarValue {
                    kind: ScalarValueKind::Boolean,
                    value: "true".to_string(),
                }
            },
            GraphQLTokenKind::False => {
                self.consume_token();
                SyntaxNodeKind::ScalarValue {
                    kind: ScalarValueKind::Boolean,
                    value: "false".to_string(),
                }
            },
            GraphQLTokenKind::Null => {
                self.consume_token();
                SyntaxNodeKind::NullValue
            },
            GraphQLTokenKind::Name(name) => {
                self.consume_token();
                SyntaxNodeKind::EnumValue {
                    value: name.into_owned(),
                }
            },
            GraphQLTokenKind::SquareBracketOpen => return self.parse_list_value(parent, is_const),
            GraphQLTokenKind::CurlyBraceOpen => return self.parse_object_value(parent, is_const),
            _ => {
                self.record_unexpected(&["value"]);
                return Err(());
            },
        };

        let value = self.tree.add_node(node_kind, start, parent);
        self.finish_node(value);
        Ok(value)
    }

    fn parse_list_value(&mut self, parent: SyntaxNodeId, is_const: bool) -> PResult<SyntaxNodeId> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        let list = self.tree.add_node(SyntaxNodeKind::ListValue, open.span, parent);
        self.push_delimiter("[", open.span, DelimiterContext::ListValue);
        while !self.peek_is(&GraphQLTokenKind::SquareBracketClose) {
            self.parse_value(list, is_const)?;
        }
        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        self.pop_delimiter();
        self.finish_node(list);
        Ok(list)
    }

    fn parse_object_value(&mut self, parent: SyntaxNodeId, is_const: bool) -> PResult<SyntaxNodeId> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let object = self.tree.add_node(SyntaxNodeKind::ComplexValue, open.span, parent);
        self.push_delimiter("{", open.span, DelimiterContext::ObjectValue);
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let start = self.peek_span();
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let field = self.tree.add_node(SyntaxNodeKind::ComplexValueField { name }, start, object);
            self.parse_value(field, is_const)?;
            self.finish_node(field);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        self.finish_node(object);
        Ok(object)
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_type_system_definition(&mut self, root: SyntaxNodeId) -> PResult<()> {
        let start = self.peek_span();
        let description = self.parse_description()?;

        let is_extension = self.peek_is_keyword("extend");
        if is_extension {
            self.consume_token();
        }

        let (keyword, _) = self.expect_name()?;
        let type_kind = match keyword.as_str() {
            "schema" => return self.parse_schema_definition(root, start, is_extension),
            "directive" if !is_extension => {
                return self.parse_directive_definition(root, start, description);
            },
            "scalar" => TypeDefinitionKind::Scalar,
            "type" => TypeDefinitionKind::Object,
            "interface" => TypeDefinitionKind::Interface,
            "union" => TypeDefinitionKind::Union,
            "enum" => TypeDefinitionKind::Enum,
            "input" => TypeDefinitionKind::InputObject,
            _ => {
                self.record_error(GraphQLParseError::new(
                    format!("Expected a type system definition, found `{keyword}`"),
                    self.last_span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec!["type".to_string(), "schema".to_string()],
                        found: keyword,
                    },
                ));
                return Err(());
            },
        };

        let (name, _) = self.expect_name()?;
        let implements = if matches!(type_kind, TypeDefinitionKind::Object | TypeDefinitionKind::Interface)
            && self.peek_is_keyword("implements")
        {
            self.parse_implements_interfaces()?
        } else {
            Vec::new()
        };

        let def = self.tree.add_node(
            SyntaxNodeKind::TypeDefinition {
                kind: type_kind,
                name,
                description,
                implements,
                union_members: Vec::new(),
                is_extension,
            },
            start,
            root,
        );
        self.parse_directives(def, true)?;

        match type_kind {
            TypeDefinitionKind::Scalar => {},
            TypeDefinitionKind::Object | TypeDefinitionKind::Interface => {
                if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                    self.parse_fields_definition(def)?;
                }
            },
            TypeDefinitionKind::Union => {
                if self.peek_is(&GraphQLTokenKind::Equals) {
                    self.consume_token();
                    let members = self.parse_union_members()?;
                    if let SyntaxNodeKind::TypeDefinition { union_members, .. } =
                        self.tree.kind_mut(def)
                    {
                        *union_members = members;
                    }
                }
            },
            TypeDefinitionKind::Enum => {
                if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                    self.parse_enum_values_definition(def)?;
                }
            },
            TypeDefinitionKind::InputObject => {
                if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                    self.parse_input_values_block(
                        def,
                        DelimiterContext::InputFieldsDefinition,
                    )?;
                }
            },
        }
        self.finish_node(def);
        Ok(())
    }

    fn parse_schema_definition(
        &mut self,
        root: SyntaxNodeId,
        start: GraphQLSourceSpan,
        is_extension: bool,
    ) -> PResult<()> {
        let def = self.tree.add_node(SyntaxNodeKind::SchemaDefinition { is_extension }, start, root);
        self.parse_directives(def, true)?;
        if is_extension && !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.finish_node(def);
            return Ok(());
        }

        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter("{", open.span, DelimiterContext::SchemaDefinition);
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let entry_start = self.peek_span();
            let (keyword, keyword_span) = self.expect_name()?;
            let Some(operation_type) = OperationType::from_keyword(&keyword) else {
                self.record_error(GraphQLParseError::new(
                    format!("Expected `query`, `mutation` or `subscription`, found `{keyword}`"),
                    keyword_span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec!["query".into(), "mutation".into(), "subscription".into()],
                        found: keyword,
                    },
                ));
                return Err(());
            };
            self.expect(&GraphQLTokenKind::Colon)?;
            let (type_name, _) = self.expect_name()?;
            let entry = self.tree.add_node(
                SyntaxNodeKind::RootOperationTypeDefinition { operation_type, type_name },
                entry_start,
                def,
            );
            self.finish_node(entry);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        self.finish_node(def);
        Ok(())
    }

    fn parse_implements_interfaces(&mut self) -> PResult<Vec<String>> {
        self.expect_keyword("implements")?;
        if self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.consume_token();
        }
        let mut interfaces = vec![self.expect_name()?.0];
        while self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.consume_token();
            interfaces.push(self.expect_name()?.0);
        }
        Ok(interfaces)
    }

    fn parse_union_members(&mut self) -> PResult<Vec<String>> {
        if self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token();
        }
        let mut members = vec![self.expect_name()?.0];
        while self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token();
            members.push(self.expect_name()?.0);
        }
        Ok(members)
    }

    fn parse_fields_definition(&mut self, def: SyntaxNodeId) -> PResult<()> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter("{", open.span, DelimiterContext::FieldsDefinition);
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let start = self.peek_span();
            let description = self.parse_description()?;
            let (name, _) = self.expect_name()?;

            // The node exists before its arguments are parsed; the real type
            // is filled in once it has been read.
            let field = self.tree.add_node(
                SyntaxNodeKind::FieldDefinition {
                    name,
                    description,
                    type_expression: TypeExpression::named(String::new(), false),
                },
                start,
                def,
            );
            if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_input_values_block(field, DelimiterContext::ArgumentsDefinition)?;
            }
            self.expect(&GraphQLTokenKind::Colon)?;
            let parsed_type = self.parse_type_expression()?;
            if let SyntaxNodeKind::FieldDefinition { type_expression, .. } = self.tree.kind_mut(field) {
                *type_expression = parsed_type;
            }
            self.parse_directives(field, true)?;
            self.finish_node(field);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        Ok(())
    }

    /// `( InputValueDefinition+ )` for arguments or `{ InputValueDefinition+ }`
    /// for input object fields.
    fn parse_input_values_block(&mut self, parent: SyntaxNodeId, context: DelimiterContext) -> PResult<()> {
        let (open_kind, close_kind, token) = match context {
            DelimiterContext::ArgumentsDefinition => {
                (GraphQLTokenKind::ParenOpen, GraphQLTokenKind::ParenClose, "(")
            },
            _ => (GraphQLTokenKind::CurlyBraceOpen, GraphQLTokenKind::CurlyBraceClose, "{"),
        };
        let open = self.expect(&open_kind)?;
        self.push_delimiter(token, open.span, context);
        while !self.peek_is(&close_kind) {
            let start = self.peek_span();
            let description = self.parse_description()?;
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let type_expression = self.parse_type_expression()?;
            let input_value = self.tree.add_node(
                SyntaxNodeKind::InputValueDefinition { name, description, type_expression },
                start,
                parent,
            );
            if self.peek_is(&GraphQLTokenKind::Equals) {
                self.consume_token();
                self.parse_value(input_value, true)?;
            }
            self.parse_directives(input_value, true)?;
            self.finish_node(input_value);
        }
        self.expect(&close_kind)?;
        self.pop_delimiter();
        Ok(())
    }

    fn parse_enum_values_definition(&mut self, def: SyntaxNodeId) -> PResult<()> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter("{", open.span, DelimiterContext::EnumValuesDefinition);
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let start = self.peek_span();
            let description = self.parse_description()?;
            let (name, span) = self.expect_name()?;
            if matches!(name.as_str(), "true" | "false" | "null") {
                let mut error = GraphQLParseError::new(
                    format!("`{name}` cannot be used as an enum value"),
                    span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec!["enum value name".to_string()],
                        found: name,
                    },
                );
                error.add_spec("https://spec.graphql.org/October2021/#EnumValue");
                self.record_error(error);
                return Err(());
            }
            let value = self.tree.add_node(
                SyntaxNodeKind::EnumValueDefinition { name, description },
                start,
                def,
            );
            self.parse_directives(value, true)?;
            self.finish_node(value);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        Ok(())
    }

    fn parse_directive_definition(
        &mut self,
        root: SyntaxNodeId,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> PResult<()> {
        self.expect(&GraphQLTokenKind::At)?;
        let (name, _) = self.expect_name()?;
        let def = self.tree.add_node(
            SyntaxNodeKind::DirectiveDefinition {
                name,
                description,
                locations: Vec::new(),
                repeatable: false,
            },
            start,
            root,
        );
        if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_input_values_block(def, DelimiterContext::ArgumentsDefinition)?;
        }
        let repeatable = self.peek_is_keyword("repeatable");
        if repeatable {
            self.consume_token();
        }
        self.expect_keyword("on")?;
        if self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token();
        }

        let mut parsed_locations = vec![self.parse_directive_location()?];
        while self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token();
            parsed_locations.push(self.parse_directive_location()?);
        }
        if let SyntaxNodeKind::DirectiveDefinition { locations, repeatable: is_repeatable, .. } =
            self.tree.kind_mut(def)
        {
            *locations = parsed_locations;
            *is_repeatable = repeatable;
        }
        self.finish_node(def);
        Ok(())
    }

    fn parse_directive_location(&mut self) -> PResult<DirectiveLocation> {
        let (name, span) = self.expect_name()?;
        match DirectiveLocation::from_name(&name) {
            Some(location) => Ok(location),
            None => {
                let mut error = GraphQLParseError::new(
                    format!("Unknown directive location `{name}`"),
                    span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec!["directive location".to_string()],
                        found: name.clone(),
                    },
                );
                if let Some(suggestion) = DirectiveLocation::from_name(&name.to_ascii_uppercase()) {
                    error.add_help(format!("Did you mean `{suggestion}`?"));
                }
                self.record_error(error);
                Err(())
            },
        }
    }
}

fn format_expected(expected: &[String]) -> String {
    match expected {
        [] => "a token".to_string(),
        [only] => format!("`{only}`"),
        many => {
            let quoted: Vec<String> = many.iter().map(|e| format!("`{e}`")).collect();
            format!("one of {}", quoted.join(", "))
        },
    }
}
