/// A type reference as written in source: `Int`, `[String!]!`, ...
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExpression {
    Named {
        name: String,
        non_null: bool,
    },
    List {
        inner: Box<TypeExpression>,
        non_null: bool,
    },
}

impl TypeExpression {
    pub fn named(name: impl Into<String>, non_null: bool) -> Self {
        Self::Named {
            name: name.into(),
            non_null,
        }
    }

    pub fn list(inner: TypeExpression, non_null: bool) -> Self {
        Self::List {
            inner: Box::new(inner),
            non_null,
        }
    }

    /// The name of the innermost named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            Self::List { inner, .. } => inner.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => *non_null,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }
}

impl std::fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named { name, non_null } => {
                write!(f, "{name}{}", if *non_null { "!" } else { "" })
            },
            Self::List { inner, non_null } => {
                write!(f, "[{inner}]{}", if *non_null { "!" } else { "" })
            },
        }
    }
}
