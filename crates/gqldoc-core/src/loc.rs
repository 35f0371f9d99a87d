use gqldoc_parser::GraphQLSourceSpan;
use std::path::Path;
use std::path::PathBuf;

/// A 1-based line/column position within a query document.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Columns are counted in UTF-16 code units, the unit GraphQL clients
    /// report locations in.
    pub fn from_span(span: &GraphQLSourceSpan) -> Self {
        Self {
            line: span.start_inclusive.line() + 1,
            column: span.start_inclusive.col_utf16() + 1,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A [`SourceLocation`] plus the schema file it was read from, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_span(
        file: Option<&Path>,
        span: &GraphQLSourceSpan,
    ) -> Self {
        let location = SourceLocation::from_span(span);
        Self {
            col: location.column,
            file: file.map(|f| f.to_path_buf()),
            line: location.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where a schema element was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => f.write_str("<builtin>"),
            Self::Schema(pos) => pos.fmt(f),
        }
    }
}
