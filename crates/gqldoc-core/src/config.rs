use crate::messages::GraphQLMessageSeverity;

/// Limits and policies applied when documents are validated and planned
/// against a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SchemaConfiguration {
    /// Operations deeper than this are rejected. `None` disables the check.
    pub max_query_depth: Option<usize>,

    /// Operations whose estimated complexity exceeds this are rejected.
    /// `None` disables the check.
    pub max_query_complexity: Option<f64>,

    /// Severity reported for variables an operation declares but never uses.
    pub unused_variable_severity: GraphQLMessageSeverity,

    /// Complexity multiplier for list fields that carry no `first`/`last`
    /// argument.
    pub default_list_size: f64,
}
impl Default for SchemaConfiguration {
    fn default() -> Self {
        Self {
            max_query_depth: None,
            max_query_complexity: None,
            unused_variable_severity: GraphQLMessageSeverity::Warning,
            default_list_size: 10.0,
        }
    }
}
