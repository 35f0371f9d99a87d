use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentPartError {
    #[error("The fragment spread `...{spread_name}` was already linked to a fragment")]
    FragmentAlreadyAssigned {
        spread_name: String,
    },

    #[error("Expected a {expected} part")]
    UnexpectedPartKind {
        expected: &'static str,
    },
}
