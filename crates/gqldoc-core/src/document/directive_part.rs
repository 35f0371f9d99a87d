use gqldoc_parser::syntax::DirectiveLocation;

/// A directive applied to a part of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectivePart {
    pub(crate) location: DirectiveLocation,
    pub(crate) name: String,

    /// Position among the directives applied to the same part.
    pub(crate) rank: usize,
}
impl DirectivePart {
    pub fn location(&self) -> DirectiveLocation {
        self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}
