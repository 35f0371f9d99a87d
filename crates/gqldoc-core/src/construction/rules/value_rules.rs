use crate::construction::ConstructionContext;
use crate::construction::ConstructionRule;
use crate::construction::RuleOutcome;
use crate::document::DocumentPartData;
use crate::document::InputObjectFieldPart;
use crate::document::SuppliedValueKind;
use crate::document::SuppliedValuePart;
use gqldoc_parser::SyntaxNodeKind;
use gqldoc_parser::syntax::ScalarValueKind;
use gqldoc_parser::syntax::TypeExpression;

/// Creates a supplied value, carrying down the type its position expects.
pub struct CreateSuppliedValueRule;
impl ConstructionRule for CreateSuppliedValueRule {
    fn name(&self) -> &'static str {
        "CreateSuppliedValue"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let value = match context.node_kind() {
            SyntaxNodeKind::ScalarValue { kind, value } => match kind {
                ScalarValueKind::Boolean => SuppliedValueKind::Boolean(value == "true"),
                ScalarValueKind::Float => SuppliedValueKind::Float(value.clone()),
                ScalarValueKind::Int => SuppliedValueKind::Int(value.clone()),
                ScalarValueKind::String => SuppliedValueKind::String(value.clone()),
            },
            SyntaxNodeKind::EnumValue { value } => SuppliedValueKind::Enum(value.clone()),
            SyntaxNodeKind::NullValue => SuppliedValueKind::Null,
            SyntaxNodeKind::ListValue => SuppliedValueKind::List,
            SyntaxNodeKind::ComplexValue => SuppliedValueKind::Object,
            SyntaxNodeKind::VariableValue { name } => SuppliedValueKind::Variable(name.clone()),
            _ => return RuleOutcome::Abort,
        };

        let Some(parent_id) = context.parent_part_id() else {
            context.report("A value must belong to an argument, variable or input value.");
            return RuleOutcome::Abort;
        };
        let mut is_default_value = false;
        let expected_type = match context.document().part(parent_id).data() {
            DocumentPartData::InputArgument(argument) => Some(argument.expected_type().clone()),
            DocumentPartData::InputObjectField(field) => field.expected_type().cloned(),
            DocumentPartData::Variable(variable) => {
                is_default_value = true;
                Some(variable.type_expression().clone())
            },
            DocumentPartData::SuppliedValue(list) if *list.value() == SuppliedValueKind::List => {
                list.expected_type().and_then(list_item_type)
            },
            _ => {
                context.report("A value must belong to an argument, variable or input value.");
                return RuleOutcome::Abort;
            },
        };

        let id = context.create_part(DocumentPartData::SuppliedValue(SuppliedValuePart {
            expected_type,
            value,
        }));
        if is_default_value
            && let DocumentPartData::Variable(variable) =
                &mut context.document.part_mut(parent_id).data
        {
            variable.default_value = Some(id);
        }
        RuleOutcome::Continue
    }
}

/// Resolves a `name: value` entry against the expected input object type.
pub struct CreateInputObjectFieldRule;
impl ConstructionRule for CreateInputObjectFieldRule {
    fn name(&self) -> &'static str {
        "CreateInputObjectField"
    }

    fn execute(&self, context: &mut ConstructionContext<'_>) -> RuleOutcome {
        let SyntaxNodeKind::ComplexValueField { name } = context.node_kind() else {
            return RuleOutcome::Abort;
        };
        let Some(object_value) = context
            .parent_part()
            .and_then(|part| part.as_supplied_value())
            .filter(|value| *value.value() == SuppliedValueKind::Object)
        else {
            context.report(format!("Input field \"{name}\" must be part of an input object."));
            return RuleOutcome::Abort;
        };

        let input_object = object_value
            .expected_type()
            .filter(|expected| !expected.is_list())
            .and_then(|expected| context.schema().lookup_type(expected.innermost_name()))
            .and_then(|graph_type| graph_type.as_input_object());
        let expected_type = match input_object {
            Some(input_object) => match input_object.fields().get(name) {
                Some(field) => Some(field.type_annotation().clone()),
                None => {
                    let type_name = input_object.name().to_string();
                    context.report(format!(
                        "Unknown field \"{name}\" on input type \"{type_name}\".",
                    ));
                    return RuleOutcome::SkipBranch;
                },
            },
            // A mismatched object value is reported during validation.
            None => None,
        };

        context.create_part(DocumentPartData::InputObjectField(InputObjectFieldPart {
            expected_type,
            name: name.clone(),
        }));
        RuleOutcome::Continue
    }
}

fn list_item_type(list_type: &TypeExpression) -> Option<TypeExpression> {
    match list_type {
        TypeExpression::List { inner, .. } => Some(inner.as_ref().clone()),
        TypeExpression::Named { .. } => None,
    }
}
