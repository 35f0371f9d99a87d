use crate::document::DocumentPartKind;
use crate::document::SuppliedValueKind;
use crate::document::SuppliedValuePart;
use crate::schema::GraphQLType;
use crate::schema::ScalarLiteralKind;
use crate::schema::Schema;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use crate::validation::rules::repeated_names;
use gqldoc_parser::syntax::TypeExpression;

/// Literal values must be coercible to the type their position expects.
/// Variables are checked by the variable usage rule instead.
pub struct ValuesOfCorrectTypeRule;
impl DocumentValidationRule for ValuesOfCorrectTypeRule {
    fn name(&self) -> &'static str {
        "ValuesOfCorrectType"
    }

    fn rule_reference(&self) -> &'static str {
        "5.6.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let part = document.part(id);
            let Some(value) = part.as_supplied_value() else {
                continue;
            };
            let Some(expected) = value.expected_type() else {
                continue;
            };
            if let Err(problem) = check_value(schema, value, expected) {
                context.critical(self.rule_reference(), part.location(), problem);
            }
        }
    }
}

fn check_value(
    schema: &Schema,
    value: &SuppliedValuePart,
    expected: &TypeExpression,
) -> Result<(), String> {
    let mismatch = || format!("Expected value of type \"{expected}\", found {}.", describe(value));
    match value.value() {
        SuppliedValueKind::Variable(_) => Ok(()),
        SuppliedValueKind::Null if expected.is_non_null() => Err(mismatch()),
        SuppliedValueKind::Null => Ok(()),
        // Items are checked against the item type on their own.
        SuppliedValueKind::List if expected.is_list() => Ok(()),
        SuppliedValueKind::List => Err(mismatch()),
        // A single value coerces to a list of one, so only the innermost
        // type matters from here on.
        SuppliedValueKind::Object => match schema.lookup_annotated_type(expected) {
            Some(GraphQLType::InputObject(_)) => Ok(()),
            _ => Err(mismatch()),
        },
        SuppliedValueKind::Enum(name) => match schema.lookup_annotated_type(expected) {
            Some(GraphQLType::Enum(enum_type)) if enum_type.values().contains_key(name) => Ok(()),
            Some(GraphQLType::Enum(enum_type)) => Err(format!(
                "Value \"{name}\" does not exist in \"{}\" enum.",
                enum_type.name(),
            )),
            Some(GraphQLType::Scalar(scalar))
                if accepts(schema, scalar.name(), ScalarLiteralKind::Enum) => Ok(()),
            _ => Err(mismatch()),
        },
        SuppliedValueKind::Boolean(_)
        | SuppliedValueKind::Float(_)
        | SuppliedValueKind::Int(_)
        | SuppliedValueKind::String(_) => {
            let Some(GraphQLType::Scalar(scalar)) = schema.lookup_annotated_type(expected) else {
                return Err(mismatch());
            };
            let literal = match value.value() {
                SuppliedValueKind::Boolean(_) => ScalarLiteralKind::Boolean,
                SuppliedValueKind::Float(_) => ScalarLiteralKind::Float,
                SuppliedValueKind::Int(_) => ScalarLiteralKind::Int,
                _ => ScalarLiteralKind::String,
            };
            if !accepts(schema, scalar.name(), literal) {
                return Err(mismatch());
            }
            if let SuppliedValueKind::Int(raw) = value.value()
                && scalar.name() == "Int"
                && raw.parse::<i32>().is_err()
            {
                return Err(format!("Int cannot represent non 32-bit signed integer value: {raw}."));
            }
            Ok(())
        },
    }
}

fn accepts(schema: &Schema, scalar_name: &str, literal: ScalarLiteralKind) -> bool {
    schema.scalar_type_provider().accepts(scalar_name, literal)
}

fn describe(value: &SuppliedValuePart) -> String {
    match value.value() {
        SuppliedValueKind::Boolean(value) => value.to_string(),
        SuppliedValueKind::Enum(name) => name.clone(),
        SuppliedValueKind::Float(raw) | SuppliedValueKind::Int(raw) => raw.clone(),
        SuppliedValueKind::List => "a list".to_string(),
        SuppliedValueKind::Null => "null".to_string(),
        SuppliedValueKind::Object => "an object".to_string(),
        SuppliedValueKind::String(value) => format!("{value:?}"),
        SuppliedValueKind::Variable(name) => format!("${name}"),
    }
}

/// Input object values name each field once (5.6.3) and supply every
/// required field (5.6.4).
pub struct InputObjectFieldsRule;
impl DocumentValidationRule for InputObjectFieldsRule {
    fn name(&self) -> &'static str {
        "InputObjectFields"
    }

    fn rule_reference(&self) -> &'static str {
        "5.6.3"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let part = document.part(id);
            let Some(value) = part.as_supplied_value() else {
                continue;
            };
            if *value.value() != SuppliedValueKind::Object {
                continue;
            }

            let fields: Vec<_> = document
                .children_of_kind(id, DocumentPartKind::InputObjectField)
                .filter_map(|field| document.part(field).as_input_object_field().map(|f| (f.name(), field)))
                .collect();
            let supplied: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
            for (name, field) in repeated_names(fields) {
                context.critical(
                    "5.6.3",
                    document.part(field).location(),
                    format!("There can be only one input field named \"{name}\"."),
                );
            }

            let Some(input_object) = value
                .expected_type()
                .and_then(|expected| schema.lookup_annotated_type(expected))
                .and_then(GraphQLType::as_input_object)
            else {
                continue;
            };
            for field in input_object.fields().values() {
                if field.is_required() && !supplied.contains(&field.name()) {
                    context.critical(
                        "5.6.4",
                        part.location(),
                        format!(
                            "Field \"{}.{}\" of required type \"{}\" was not provided.",
                            input_object.name(),
                            field.name(),
                            field.type_annotation(),
                        ),
                    );
                }
            }
        }
    }
}
