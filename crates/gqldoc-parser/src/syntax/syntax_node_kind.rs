use crate::syntax::DirectiveLocation;
use crate::syntax::OperationType;
use crate::syntax::TypeExpression;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarValueKind {
    Int,
    Float,
    String,
    Boolean,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeDefinitionKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeDefinitionKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "type",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::InputObject => "input",
        }
    }
}

/// The payload of a [`SyntaxNode`](crate::SyntaxNode).
///
/// Structure that can repeat (arguments, directives, selections, values) is
/// expressed as child nodes; everything else is carried inline.
///
/// | kind | children |
/// |------|----------|
/// | `Document` | definitions |
/// | `Operation` | `Variable`*, `Directive`*, `FieldSelectionSet` |
/// | `Variable` | default value?, `Directive`* |
/// | `FieldSelectionSet` | `Field` / `FragmentSpread` / `InlineFragment` |
/// | `Field` | `InputArgument`*, `Directive`*, `FieldSelectionSet`? |
/// | `InputArgument` | one value |
/// | `Directive` | `InputArgument`* |
/// | `FragmentSpread` | `Directive`* |
/// | `InlineFragment`, `NamedFragment` | `Directive`*, `FieldSelectionSet` |
/// | `ListValue` | values |
/// | `ComplexValue` | `ComplexValueField`* |
/// | `ComplexValueField` | one value |
#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxNodeKind {
    Document,

    // =========================================================================
    // Executable definitions
    // =========================================================================
    Operation {
        operation_type: OperationType,
        name: Option<String>,
    },
    Variable {
        name: String,
        type_expression: TypeExpression,
    },
    FieldSelectionSet,
    Field {
        alias: Option<String>,
        name: String,
    },
    InputArgument {
        name: String,
    },
    Directive {
        name: String,
    },
    FragmentSpread {
        name: String,
    },
    InlineFragment {
        type_condition: Option<String>,
    },
    NamedFragment {
        name: String,
        type_condition: String,
    },

    // =========================================================================
    // Values
    // =========================================================================
    /// Ints and floats keep their raw text, strings are unescaped and booleans
    /// are `"true"` / `"false"`.
    ScalarValue {
        kind: ScalarValueKind,
        value: String,
    },
    EnumValue {
        value: String,
    },
    NullValue,
    ListValue,
    ComplexValue,
    ComplexValueField {
        name: String,
    },
    VariableValue {
        name: String,
    },

    // =========================================================================
    // Type system definitions
    // =========================================================================
    SchemaDefinition {
        is_extension: bool,
    },
    RootOperationTypeDefinition {
        operation_type: OperationType,
        type_name: String,
    },
    TypeDefinition {
        kind: TypeDefinitionKind,
        name: String,
        description: Option<String>,
        implements: Vec<String>,
        union_members: Vec<String>,
        is_extension: bool,
    },
    /// Children: `InputValueDefinition`* (arguments), `Directive`*.
    FieldDefinition {
        name: String,
        description: Option<String>,
        type_expression: TypeExpression,
    },
    /// Children: default value?, `Directive`*.
    InputValueDefinition {
        name: String,
        description: Option<String>,
        type_expression: TypeExpression,
    },
    EnumValueDefinition {
        name: String,
        description: Option<String>,
    },
    /// Children: `InputValueDefinition`* (arguments).
    DirectiveDefinition {
        name: String,
        description: Option<String>,
        locations: Vec<DirectiveLocation>,
        repeatable: bool,
    },
}

/// Payload-free discriminant of [`SyntaxNodeKind`], used to index dispatch
/// tables.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxNodeKindTag {
    Document,
    Operation,
    Variable,
    FieldSelectionSet,
    Field,
    InputArgument,
    Directive,
    FragmentSpread,
    InlineFragment,
    NamedFragment,
    ScalarValue,
    EnumValue,
    NullValue,
    ListValue,
    ComplexValue,
    ComplexValueField,
    VariableValue,
    SchemaDefinition,
    RootOperationTypeDefinition,
    TypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    DirectiveDefinition,
}

impl SyntaxNodeKindTag {
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::ScalarValue
                | Self::EnumValue
                | Self::NullValue
                | Self::ListValue
                | Self::ComplexValue
                | Self::VariableValue
        )
    }

    pub fn is_type_system_definition(&self) -> bool {
        matches!(
            self,
            Self::SchemaDefinition
                | Self::RootOperationTypeDefinition
                | Self::TypeDefinition
                | Self::FieldDefinition
                | Self::InputValueDefinition
                | Self::EnumValueDefinition
                | Self::DirectiveDefinition
        )
    }
}

impl SyntaxNodeKind {
    pub fn tag(&self) -> SyntaxNodeKindTag {
        match self {
            Self::Document => SyntaxNodeKindTag::Document,
            Self::Operation { .. } => SyntaxNodeKindTag::Operation,
            Self::Variable { .. } => SyntaxNodeKindTag::Variable,
            Self::FieldSelectionSet => SyntaxNodeKindTag::FieldSelectionSet,
            Self::Field { .. } => SyntaxNodeKindTag::Field,
            Self::InputArgument { .. } => SyntaxNodeKindTag::InputArgument,
            Self::Directive { .. } => SyntaxNodeKindTag::Directive,
            Self::FragmentSpread { .. } => SyntaxNodeKindTag::FragmentSpread,
            Self::InlineFragment { .. } => SyntaxNodeKindTag::InlineFragment,
            Self::NamedFragment { .. } => SyntaxNodeKindTag::NamedFragment,
            Self::ScalarValue { .. } => SyntaxNodeKindTag::ScalarValue,
            Self::EnumValue { .. } => SyntaxNodeKindTag::EnumValue,
            Self::NullValue => SyntaxNodeKindTag::NullValue,
            Self::ListValue => SyntaxNodeKindTag::ListValue,
            Self::ComplexValue => SyntaxNodeKindTag::ComplexValue,
            Self::ComplexValueField { .. } => SyntaxNodeKindTag::ComplexValueField,
            Self::VariableValue { .. } => SyntaxNodeKindTag::VariableValue,
            Self::SchemaDefinition { .. } => SyntaxNodeKindTag::SchemaDefinition,
            Self::RootOperationTypeDefinition { .. } => {
                SyntaxNodeKindTag::RootOperationTypeDefinition
            },
            Self::TypeDefinition { .. } => SyntaxNodeKindTag::TypeDefinition,
            Self::FieldDefinition { .. } => SyntaxNodeKindTag::FieldDefinition,
            Self::InputValueDefinition { .. } => SyntaxNodeKindTag::InputValueDefinition,
            Self::EnumValueDefinition { .. } => SyntaxNodeKindTag::EnumValueDefinition,
            Self::DirectiveDefinition { .. } => SyntaxNodeKindTag::DirectiveDefinition,
        }
    }
}
