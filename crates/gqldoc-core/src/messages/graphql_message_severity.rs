/// How serious a [`GraphQLMessage`](super::GraphQLMessage) is.
///
/// Severities are ordered; anything at or above [`Critical`](Self::Critical)
/// blocks execution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub enum GraphQLMessageSeverity {
    Trace,
    Debug,
    Information,
    #[default]
    Warning,
    Critical,
}
impl GraphQLMessageSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    pub fn is_critical(&self) -> bool {
        *self >= Self::Critical
    }
}
impl std::fmt::Display for GraphQLMessageSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
