use crate::messages::GraphQLMessage;
use crate::messages::GraphQLMessageSeverity;

/// An ordered list of [`GraphQLMessage`]s.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLMessageCollection {
    messages: Vec<GraphQLMessage>,
}
impl GraphQLMessageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: GraphQLMessage) {
        tracing::trace!(
            code = %message.code,
            severity = %message.severity,
            "{}",
            message.message,
        );
        self.messages.push(message);
    }

    pub fn extend<I: IntoIterator<Item = GraphQLMessage>>(&mut self, messages: I) {
        for message in messages {
            self.add(message);
        }
    }

    /// The highest severity present, if any message was recorded.
    pub fn severity(&self) -> Option<GraphQLMessageSeverity> {
        self.messages.iter().map(|m| m.severity).max()
    }

    pub fn has_critical(&self) -> bool {
        self.messages.iter().any(GraphQLMessage::is_critical)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.messages.iter().any(|m| m.code == code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GraphQLMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages whose rule reference is `rule_reference`.
    pub fn for_rule<'a>(
        &'a self,
        rule_reference: &'a str,
    ) -> impl Iterator<Item = &'a GraphQLMessage> + 'a {
        self.messages
            .iter()
            .filter(move |m| m.rule_reference.as_deref() == Some(rule_reference))
    }
}
impl IntoIterator for GraphQLMessageCollection {
    type Item = GraphQLMessage;
    type IntoIter = std::vec::IntoIter<GraphQLMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
impl<'a> IntoIterator for &'a GraphQLMessageCollection {
    type Item = &'a GraphQLMessage;
    type IntoIter = std::slice::Iter<'a, GraphQLMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
