use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use crate::validation::rules::collect_fields;
use crate::validation::rules::repeated_names;
use gqldoc_parser::syntax::OperationType;
use indexmap::IndexSet;

pub struct UniqueOperationNamesRule;
impl DocumentValidationRule for UniqueOperationNamesRule {
    fn name(&self) -> &'static str {
        "UniqueOperationNames"
    }

    fn rule_reference(&self) -> &'static str {
        "5.2.1.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let named = document.operations().iter().filter_map(|id| {
            document.part(*id).as_operation().and_then(|op| op.name()).map(|name| (name, *id))
        });
        for (name, id) in repeated_names(named) {
            context.critical(
                self.rule_reference(),
                document.part(id).location(),
                format!("There can be only one operation named \"{name}\"."),
            );
        }
    }
}

pub struct LoneAnonymousOperationRule;
impl DocumentValidationRule for LoneAnonymousOperationRule {
    fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    fn rule_reference(&self) -> &'static str {
        "5.2.2.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        if document.operations().len() < 2 {
            return;
        }
        for id in document.operations() {
            let part = document.part(*id);
            if part.as_operation().is_some_and(|op| op.name().is_none()) {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    "This anonymous operation must be the only defined operation.",
                );
            }
        }
    }
}

/// A subscription selects exactly one root field, not counting
/// `__typename`.
pub struct SingleRootFieldRule;
impl DocumentValidationRule for SingleRootFieldRule {
    fn name(&self) -> &'static str {
        "SingleRootField"
    }

    fn rule_reference(&self) -> &'static str {
        "5.2.3.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        for id in document.operations() {
            let part = document.part(*id);
            let Some(operation) = part.as_operation() else {
                continue;
            };
            if operation.operation_type() != OperationType::Subscription {
                continue;
            }
            let Some(selection_set) = operation.selection_set() else {
                continue;
            };

            let mut response_names = IndexSet::new();
            let mut selects_typename = false;
            for field in collect_fields(document, selection_set) {
                let Some(field) = document.part(field).as_field() else {
                    continue;
                };
                if field.name() == "__typename" {
                    selects_typename = true;
                } else {
                    response_names.insert(field.response_name());
                }
            }

            let subscription = match operation.name() {
                Some(name) => format!("Subscription \"{name}\""),
                None => "Anonymous subscription".to_string(),
            };
            if response_names.len() > 1 {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!("{subscription} must select only one top level field."),
                );
            }
            if selects_typename {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!("{subscription} must not select an introspection top level field."),
                );
            }
        }
    }
}
