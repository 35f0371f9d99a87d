//! The construction rules and the table that assigns them to syntax node
//! kinds.

mod argument_rules;
mod directive_rules;
mod document_rules;
mod field_rules;
mod fragment_rules;
mod operation_rules;
mod selection_set_rules;
mod value_rules;
mod variable_rules;

use crate::construction::ConstructionRule;
use gqldoc_parser::SyntaxNodeKindTag;

pub use argument_rules::CreateInputArgumentRule;
pub use directive_rules::CreateDirectiveRule;
pub use directive_rules::DirectiveDefinedRule;
pub use document_rules::DocumentRootRule;
pub use document_rules::RejectTypeSystemDefinitionRule;
pub use field_rules::CreateFieldRule;
pub use fragment_rules::CreateFragmentSpreadRule;
pub use fragment_rules::CreateInlineFragmentRule;
pub use fragment_rules::CreateNamedFragmentRule;
pub use fragment_rules::FragmentTypeConditionKnownRule;
pub use operation_rules::CreateOperationRule;
pub use operation_rules::OperationTypeSupportedRule;
pub use selection_set_rules::CreateFieldSelectionSetRule;
pub use value_rules::CreateInputObjectFieldRule;
pub use value_rules::CreateSuppliedValueRule;
pub use variable_rules::CreateVariableRule;
pub use variable_rules::VariableTypeKnownRule;

type RuleSet = &'static [&'static dyn ConstructionRule];

const DOCUMENT_RULES: RuleSet = &[&DocumentRootRule];
const OPERATION_RULES: RuleSet = &[&OperationTypeSupportedRule, &CreateOperationRule];
const VARIABLE_RULES: RuleSet = &[&VariableTypeKnownRule, &CreateVariableRule];
const SELECTION_SET_RULES: RuleSet = &[&CreateFieldSelectionSetRule];
const FIELD_RULES: RuleSet = &[&CreateFieldRule];
const ARGUMENT_RULES: RuleSet = &[&CreateInputArgumentRule];
const DIRECTIVE_RULES: RuleSet = &[&DirectiveDefinedRule, &CreateDirectiveRule];
const FRAGMENT_SPREAD_RULES: RuleSet = &[&CreateFragmentSpreadRule];
const INLINE_FRAGMENT_RULES: RuleSet = &[&FragmentTypeConditionKnownRule, &CreateInlineFragmentRule];
const NAMED_FRAGMENT_RULES: RuleSet = &[&FragmentTypeConditionKnownRule, &CreateNamedFragmentRule];
const VALUE_RULES: RuleSet = &[&CreateSuppliedValueRule];
const OBJECT_FIELD_RULES: RuleSet = &[&CreateInputObjectFieldRule];
const TYPE_SYSTEM_RULES: RuleSet = &[&RejectTypeSystemDefinitionRule];

/// The rules run, in order, for a node of kind `tag`.
pub fn rules_for(tag: SyntaxNodeKindTag) -> RuleSet {
    match tag {
        SyntaxNodeKindTag::Document => DOCUMENT_RULES,
        SyntaxNodeKindTag::Operation => OPERATION_RULES,
        SyntaxNodeKindTag::Variable => VARIABLE_RULES,
        SyntaxNodeKindTag::FieldSelectionSet => SELECTION_SET_RULES,
        SyntaxNodeKindTag::Field => FIELD_RULES,
        SyntaxNodeKindTag::InputArgument => ARGUMENT_RULES,
        SyntaxNodeKindTag::Directive => DIRECTIVE_RULES,
        SyntaxNodeKindTag::FragmentSpread => FRAGMENT_SPREAD_RULES,
        SyntaxNodeKindTag::InlineFragment => INLINE_FRAGMENT_RULES,
        SyntaxNodeKindTag::NamedFragment => NAMED_FRAGMENT_RULES,
        SyntaxNodeKindTag::ScalarValue
        | SyntaxNodeKindTag::EnumValue
        | SyntaxNodeKindTag::NullValue
        | SyntaxNodeKindTag::ListValue
        | SyntaxNodeKindTag::ComplexValue
        | SyntaxNodeKindTag::VariableValue => VALUE_RULES,
        SyntaxNodeKindTag::ComplexValueField => OBJECT_FIELD_RULES,
        SyntaxNodeKindTag::SchemaDefinition
        | SyntaxNodeKindTag::RootOperationTypeDefinition
        | SyntaxNodeKindTag::TypeDefinition
        | SyntaxNodeKindTag::FieldDefinition
        | SyntaxNodeKindTag::InputValueDefinition
        | SyntaxNodeKindTag::EnumValueDefinition
        | SyntaxNodeKindTag::DirectiveDefinition => TYPE_SYSTEM_RULES,
    }
}
