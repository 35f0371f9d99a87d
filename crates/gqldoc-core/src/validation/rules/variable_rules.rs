use crate::document::OperationPart;
use crate::document::PartId;
use crate::document::SuppliedValueKind;
use crate::QueryDocument;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use gqldoc_parser::syntax::TypeExpression;

pub struct UniqueVariableNamesRule;
impl DocumentValidationRule for UniqueVariableNamesRule {
    fn name(&self) -> &'static str {
        "UniqueVariableNames"
    }

    fn rule_reference(&self) -> &'static str {
        "5.8.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        for operation in operations(document) {
            for duplicate in operation.duplicate_variables() {
                let part = document.part(*duplicate);
                let Some(variable) = part.as_variable() else {
                    continue;
                };
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!("There can be only one variable named \"${}\".", variable.name()),
                );
            }
        }
    }
}

pub struct VariablesAreInputTypesRule;
impl DocumentValidationRule for VariablesAreInputTypesRule {
    fn name(&self) -> &'static str {
        "VariablesAreInputTypes"
    }

    fn rule_reference(&self) -> &'static str {
        "5.8.2"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for operation in operations(document) {
            let variables = operation.variables().values().chain(operation.duplicate_variables());
            for id in variables {
                let part = document.part(*id);
                let Some(variable) = part.as_variable() else {
                    continue;
                };
                let type_expression = variable.type_expression();
                let is_input = schema
                    .lookup_annotated_type(type_expression)
                    .is_none_or(|graph_type| graph_type.is_input_type());
                if !is_input {
                    context.critical(
                        self.rule_reference(),
                        part.location(),
                        format!(
                            "Variable \"${}\" cannot be non-input type \"{type_expression}\".",
                            variable.name(),
                        ),
                    );
                }
            }
        }
    }
}

/// Every variable used by an operation, directly or through the fragments it
/// spreads, is declared by that operation.
pub struct NoUndefinedVariablesRule;
impl DocumentValidationRule for NoUndefinedVariablesRule {
    fn name(&self) -> &'static str {
        "NoUndefinedVariables"
    }

    fn rule_reference(&self) -> &'static str {
        "5.8.3"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        for operation_id in document.operations() {
            let Some(operation) = document.part(*operation_id).as_operation() else {
                continue;
            };
            for usage in variable_usages(document, *operation_id) {
                let part = document.part(usage);
                let Some(name) = part.as_supplied_value().and_then(|v| v.variable_name()) else {
                    continue;
                };
                if operation.variables().contains_key(name) {
                    continue;
                }
                let message = match operation.name() {
                    Some(operation_name) => format!(
                        "Variable \"${name}\" is not defined by operation \"{operation_name}\".",
                    ),
                    None => format!("Variable \"${name}\" is not defined."),
                };
                context.critical(self.rule_reference(), part.location(), message);
            }
        }
    }
}

/// Declared variables that nothing uses. The severity comes from
/// [`SchemaConfiguration::unused_variable_severity`](crate::SchemaConfiguration).
pub struct NoUnusedVariablesRule;
impl DocumentValidationRule for NoUnusedVariablesRule {
    fn name(&self) -> &'static str {
        "NoUnusedVariables"
    }

    fn rule_reference(&self) -> &'static str {
        "5.8.4"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let severity = context.configuration().unused_variable_severity;
        for operation_id in document.operations() {
            let Some(operation) = document.part(*operation_id).as_operation() else {
                continue;
            };
            let used: Vec<&str> = variable_usages(document, *operation_id)
                .into_iter()
                .filter_map(|usage| document.part(usage).as_supplied_value()?.variable_name())
                .collect();
            for (name, id) in operation.variables() {
                if used.contains(&name.as_str()) {
                    continue;
                }
                let message = match operation.name() {
                    Some(operation_name) => format!(
                        "Variable \"${name}\" is never used in operation \"{operation_name}\".",
                    ),
                    None => format!("Variable \"${name}\" is never used."),
                };
                context.report(severity, self.rule_reference(), document.part(*id).location(), message);
            }
        }
    }
}

/// A variable's type must be compatible with every position it is used in.
pub struct VariablesInAllowedPositionRule;
impl DocumentValidationRule for VariablesInAllowedPositionRule {
    fn name(&self) -> &'static str {
        "VariablesInAllowedPosition"
    }

    fn rule_reference(&self) -> &'static str {
        "5.8.5"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        for operation_id in document.operations() {
            let Some(operation) = document.part(*operation_id).as_operation() else {
                continue;
            };
            for usage in variable_usages(document, *operation_id) {
                let part = document.part(usage);
                let Some(value) = part.as_supplied_value() else {
                    continue;
                };
                let (Some(name), Some(location_type)) = (value.variable_name(), value.expected_type()) else {
                    continue;
                };
                let Some(variable) = operation
                    .variables()
                    .get(name)
                    .and_then(|id| document.part(*id).as_variable())
                else {
                    continue;
                };

                let variable_type = variable.type_expression();
                let has_non_null_default = variable.default_value().is_some_and(|default| {
                    document
                        .part(default)
                        .as_supplied_value()
                        .is_some_and(|v| *v.value() != SuppliedValueKind::Null)
                });
                let allowed = if location_type.is_non_null()
                    && !variable_type.is_non_null()
                    && has_non_null_default
                {
                    is_type_allowed(variable_type, &nullable(location_type))
                } else {
                    is_type_allowed(variable_type, location_type)
                };
                if !allowed {
                    context.critical(
                        self.rule_reference(),
                        part.location(),
                        format!(
                            "Variable \"${name}\" of type \"{variable_type}\" used in position \
                            expecting type \"{location_type}\".",
                        ),
                    );
                }
            }
        }
    }
}

/// Whether a variable of `variable_type` may be used where `location_type`
/// is expected.
fn is_type_allowed(variable_type: &TypeExpression, location_type: &TypeExpression) -> bool {
    if location_type.is_non_null() && !variable_type.is_non_null() {
        return false;
    }
    match (variable_type, location_type) {
        (TypeExpression::List { inner: variable_inner, .. }, TypeExpression::List { inner: location_inner, .. }) => {
            is_type_allowed(variable_inner, location_inner)
        },
        (TypeExpression::Named { name: variable_name, .. }, TypeExpression::Named { name: location_name, .. }) => {
            variable_name == location_name
        },
        _ => false,
    }
}

fn nullable(type_expression: &TypeExpression) -> TypeExpression {
    match type_expression.clone() {
        TypeExpression::Named { name, .. } => TypeExpression::Named { name, non_null: false },
        TypeExpression::List { inner, .. } => TypeExpression::List { inner, non_null: false },
    }
}

fn operations(document: &QueryDocument) -> impl Iterator<Item = &OperationPart> {
    document
        .operations()
        .iter()
        .filter_map(|id| document.part(*id).as_operation())
}

/// Variable usages in `operation` and in every fragment it reaches.
fn variable_usages(document: &QueryDocument, operation: PartId) -> Vec<PartId> {
    let mut definitions = vec![operation];
    definitions.extend(document.reachable_fragments(operation));

    let mut usages = vec![];
    for definition in definitions {
        let part = document.part(definition);
        let aggregated = part
            .as_operation()
            .map(|op| op.aggregated())
            .or_else(|| part.as_named_fragment().map(|f| f.aggregated()));
        if let Some(aggregated) = aggregated {
            usages.extend_from_slice(aggregated.variable_usages());
        }
    }
    usages
}
