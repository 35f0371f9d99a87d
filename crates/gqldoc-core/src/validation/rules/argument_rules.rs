use crate::document::DocumentPartData;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::schema::InputValue;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use crate::validation::rules::repeated_names;
use crate::QueryDocument;
use crate::schema::Schema;
use indexmap::IndexMap;

pub struct UniqueArgumentNamesRule;
impl DocumentValidationRule for UniqueArgumentNamesRule {
    fn name(&self) -> &'static str {
        "UniqueArgumentNames"
    }

    fn rule_reference(&self) -> &'static str {
        "5.4.2"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        for id in context.attached_parts() {
            if !matches!(document.kind(id), DocumentPartKind::Field | DocumentPartKind::Directive) {
                continue;
            }
            let arguments = document
                .children_of_kind(id, DocumentPartKind::InputArgument)
                .filter_map(|arg| document.part(arg).as_input_argument().map(|a| (a.name(), arg)));
            for (name, argument) in repeated_names(arguments) {
                context.critical(
                    self.rule_reference(),
                    document.part(argument).location(),
                    format!("There can be only one argument named \"{name}\"."),
                );
            }
        }
    }
}

/// Non-null parameters without a default value must be supplied.
pub struct RequiredArgumentsRule;
impl DocumentValidationRule for RequiredArgumentsRule {
    fn name(&self) -> &'static str {
        "RequiredArguments"
    }

    fn rule_reference(&self) -> &'static str {
        "5.4.2.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let Some((owner, parameters)) = declared_parameters(schema, document, id) else {
                continue;
            };
            let supplied: Vec<&str> = document
                .children_of_kind(id, DocumentPartKind::InputArgument)
                .filter_map(|arg| document.part(arg).as_input_argument().map(|a| a.name()))
                .collect();
            for parameter in parameters.values() {
                if parameter.is_required() && !supplied.contains(&parameter.name()) {
                    context.critical(
                        self.rule_reference(),
                        document.part(id).location(),
                        format!(
                            "{owner} argument \"{}\" of type \"{}\" is required, but it was not \
                            provided.",
                            parameter.name(),
                            parameter.type_annotation(),
                        ),
                    );
                }
            }
        }
    }
}

fn declared_parameters<'a>(
    schema: &'a Schema,
    document: &QueryDocument,
    id: PartId,
) -> Option<(String, &'a IndexMap<String, InputValue>)> {
    match document.part(id).data() {
        DocumentPartData::Field(field) => schema
            .field(field.owner_type(), field.name())
            .map(|f| (format!("Field \"{}\"", field.name()), f.parameters())),
        DocumentPartData::Directive(directive) => schema
            .directive(directive.name())
            .map(|d| (format!("Directive \"@{}\"", directive.name()), d.parameters())),
        _ => None,
    }
}
