/// A position within GraphQL source text.
///
/// **All values are 0-based.** `line` counts line terminators seen so far,
/// `col_utf8` counts characters since the last line terminator, `col_utf16`
/// counts UTF-16 code units since the last line terminator (the unit most
/// editors and GraphQL clients report), and `byte_offset` is the offset into
/// the whole document.
///
/// For ASCII text `col_utf8 == col_utf16`. Characters outside the Basic
/// Multilingual Plane advance `col_utf8` by one and `col_utf16` by two.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
