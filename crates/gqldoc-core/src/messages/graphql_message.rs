use crate::loc::SourceLocation;
use crate::messages::codes;
use crate::messages::GraphQLMessageSeverity;
use gqldoc_parser::GraphQLParseError;

/// One diagnostic about a query document or the plan generated for it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLMessage {
    pub severity: GraphQLMessageSeverity,
    pub code: String,
    pub message: String,
    pub location: Option<SourceLocation>,

    /// The section of the GraphQL specification the message relates to,
    /// e.g. `"5.5.2.2"`.
    pub rule_reference: Option<String>,
}
impl GraphQLMessage {
    pub fn new(
        severity: GraphQLMessageSeverity,
        code: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.to_string(),
            message: message.into(),
            location: None,
            rule_reference: None,
        }
    }

    pub fn critical(code: &str, message: impl Into<String>) -> Self {
        Self::new(GraphQLMessageSeverity::Critical, code, message)
    }

    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self::new(GraphQLMessageSeverity::Warning, code, message)
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_rule_reference(mut self, rule_reference: &str) -> Self {
        self.rule_reference = Some(rule_reference.to_string());
        self
    }

    /// Converts a parse error into a Critical
    /// [`SYNTAX_ERROR`](codes::SYNTAX_ERROR) message.
    pub fn from_parse_error(error: &GraphQLParseError) -> Self {
        Self::critical(codes::SYNTAX_ERROR, error.message())
            .with_location(SourceLocation::from_span(error.span()))
    }

    pub fn is_critical(&self) -> bool {
        self.severity.is_critical()
    }
}
impl std::fmt::Display for GraphQLMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.severity, self.code)?;
        if let Some(location) = &self.location {
            write!(f, " {location}")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(rule_reference) = &self.rule_reference {
            write!(f, " (spec {rule_reference})")?;
        }
        Ok(())
    }
}
