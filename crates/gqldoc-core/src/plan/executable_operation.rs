use crate::loc::SourceLocation;
use crate::messages::GraphQLMessageCollection;
use gqldoc_parser::syntax::OperationType;
use gqldoc_parser::syntax::TypeExpression;
use indexmap::IndexMap;

/// An argument value ready for execution. Variables stay unresolved until
/// the request's variable values are known.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableValue {
    Boolean(bool),
    Enum(String),
    /// Raw source text.
    Float(String),
    /// Raw source text.
    Int(String),
    List(Vec<ExecutableValue>),
    Null,
    Object(IndexMap<String, ExecutableValue>),
    String(String),
    Variable(String),
}

/// One field to resolve, with fragments already flattened into its
/// selections.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableField {
    pub(crate) arguments: IndexMap<String, ExecutableValue>,
    pub(crate) field_name: String,
    pub(crate) is_secure: bool,
    pub(crate) location: SourceLocation,
    pub(crate) owner_type: String,
    pub(crate) response_name: String,
    pub(crate) return_type: TypeExpression,
    pub(crate) selections: Vec<ExecutableField>,

    /// Set when the field was selected through a fragment with a type
    /// condition; the field only applies to objects of that type.
    pub(crate) type_condition: Option<String>,
}
impl ExecutableField {
    pub fn arguments(&self) -> &IndexMap<String, ExecutableValue> {
        &self.arguments
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn owner_type(&self) -> &str {
        self.owner_type.as_str()
    }

    pub fn response_name(&self) -> &str {
        self.response_name.as_str()
    }

    pub fn return_type(&self) -> &TypeExpression {
        &self.return_type
    }

    pub fn selections(&self) -> &[ExecutableField] {
        self.selections.as_slice()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}

/// An operation flattened into the fields an executor resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableOperation {
    pub(crate) estimated_complexity: f64,
    pub(crate) fields: Vec<ExecutableField>,
    pub(crate) messages: GraphQLMessageCollection,
    pub(crate) name: Option<String>,
    pub(crate) operation_type: OperationType,
    pub(crate) root_type: String,
    pub(crate) variables: IndexMap<String, TypeExpression>,
}
impl ExecutableOperation {
    pub fn new(operation_type: OperationType, name: Option<String>, root_type: String) -> Self {
        Self {
            estimated_complexity: 0.0,
            fields: vec![],
            messages: GraphQLMessageCollection::new(),
            name,
            operation_type,
            root_type,
            variables: IndexMap::new(),
        }
    }

    /// A generator's own estimate; the plan keeps the larger of this and
    /// the complexity calculator's result.
    pub fn estimated_complexity(&self) -> f64 {
        self.estimated_complexity
    }

    pub fn fields(&self) -> &[ExecutableField] {
        self.fields.as_slice()
    }

    pub fn messages(&self) -> &GraphQLMessageCollection {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut GraphQLMessageCollection {
        &mut self.messages
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub fn root_type(&self) -> &str {
        self.root_type.as_str()
    }

    pub fn set_estimated_complexity(&mut self, estimated_complexity: f64) {
        self.estimated_complexity = estimated_complexity;
    }

    /// Declared variable types, keyed by name.
    pub fn variables(&self) -> &IndexMap<String, TypeExpression> {
        &self.variables
    }
}
