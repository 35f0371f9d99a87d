use indexmap::IndexMap;
use std::any::TypeId;

/// The literal forms a scalar may be written as in a query document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarLiteralKind {
    Boolean,
    Enum,
    Float,
    Int,
    String,
}
impl ScalarLiteralKind {
    pub const ALL: &'static [ScalarLiteralKind] = &[
        Self::Boolean,
        Self::Enum,
        Self::Float,
        Self::Int,
        Self::String,
    ];
}

/// Maps scalar type names (and the host Rust types that back them) to the
/// literal kinds a document may supply for them.
///
/// Owned by a [`Schema`](crate::schema::Schema) behind an `Arc`, so one
/// provider serves every request validated against that schema.
#[derive(Clone, Debug)]
pub struct ScalarTypeProvider {
    accepted_literals: IndexMap<String, Vec<ScalarLiteralKind>>,
    host_types: IndexMap<TypeId, String>,
}
impl ScalarTypeProvider {
    pub const BUILTIN_SCALAR_NAMES: &'static [&'static str] = &[
        "Boolean",
        "Float",
        "ID",
        "Int",
        "String",
    ];

    /// A provider that knows the built-in scalars.
    pub fn new() -> Self {
        use ScalarLiteralKind::*;
        let mut provider = Self {
            accepted_literals: IndexMap::new(),
            host_types: IndexMap::new(),
        };

        provider.register_scalar("Boolean", &[Boolean]);
        provider.register_scalar("Float", &[Float, Int]);
        provider.register_scalar("ID", &[Int, String]);
        provider.register_scalar("Int", &[Int]);
        provider.register_scalar("String", &[String]);

        provider.register_host_type::<bool>("Boolean");
        provider.register_host_type::<f32>("Float");
        provider.register_host_type::<f64>("Float");
        provider.register_host_type::<i8>("Int");
        provider.register_host_type::<i16>("Int");
        provider.register_host_type::<i32>("Int");
        provider.register_host_type::<u8>("Int");
        provider.register_host_type::<u16>("Int");
        provider.register_host_type::<std::string::String>("String");
        provider.register_host_type::<&'static str>("String");

        provider
    }

    /// Whether `literal` is an acceptable input for the scalar named
    /// `scalar_name`. Scalars that were never registered accept any literal.
    pub fn accepts(&self, scalar_name: &str, literal: ScalarLiteralKind) -> bool {
        match self.accepted_literals.get(scalar_name) {
            Some(accepted) => accepted.contains(&literal),
            None => true,
        }
    }

    pub fn is_builtin(scalar_name: &str) -> bool {
        Self::BUILTIN_SCALAR_NAMES.contains(&scalar_name)
    }

    pub fn is_registered(&self, scalar_name: &str) -> bool {
        self.accepted_literals.contains_key(scalar_name)
    }

    /// Associate the host type `T` with the scalar named `scalar_name`.
    pub fn register_host_type<T: 'static>(&mut self, scalar_name: &str) {
        self.host_types.insert(TypeId::of::<T>(), scalar_name.to_string());
    }

    /// Restrict the literal kinds accepted for `scalar_name`.
    pub fn register_scalar(&mut self, scalar_name: &str, accepted: &[ScalarLiteralKind]) {
        self.accepted_literals.insert(scalar_name.to_string(), accepted.to_vec());
    }

    /// The scalar name backing host type `T`, if one was registered.
    pub fn scalar_name_for<T: 'static>(&self) -> Option<&str> {
        self.host_types.get(&TypeId::of::<T>()).map(String::as_str)
    }
}
impl Default for ScalarTypeProvider {
    fn default() -> Self {
        Self::new()
    }
}
