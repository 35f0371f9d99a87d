use indexmap::IndexMap;

/// An ordered set of selections scoped to one graph type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelectionSetPart {
    pub(crate) graph_type: String,

    /// Number of direct field selections per response name.
    pub(crate) response_names: IndexMap<String, usize>,
}
impl FieldSelectionSetPart {
    pub(crate) fn new(graph_type: impl Into<String>) -> Self {
        Self {
            graph_type: graph_type.into(),
            response_names: IndexMap::new(),
        }
    }

    /// Whether a direct field selection answers to `response_name`.
    pub fn contains_alias(&self, response_name: &str) -> bool {
        self.response_names.contains_key(response_name)
    }

    pub fn graph_type(&self) -> &str {
        self.graph_type.as_str()
    }

    pub fn response_names(&self) -> impl Iterator<Item = &str> {
        self.response_names.keys().map(String::as_str)
    }

    pub(crate) fn add_response_name(&mut self, response_name: &str) {
        *self.response_names.entry(response_name.to_string()).or_default() += 1;
    }

    pub(crate) fn remove_response_name(&mut self, response_name: &str) {
        if let Some(count) = self.response_names.get_mut(response_name) {
            *count -= 1;
            if *count == 0 {
                self.response_names.shift_remove(response_name);
            }
        }
    }
}
