pub use gqldoc_core::*;

/// The lexer and parser that produce the
/// [`SyntaxTree`](gqldoc_parser::syntax::SyntaxTree)s documents are built
/// from.
pub mod parser {
    pub use gqldoc_parser::*;
}

#[cfg(test)]
mod tests;
