use crate::document::DocumentPartKind;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use crate::validation::rules::repeated_names;

/// Directives are declared for the locations they are applied at. Unknown
/// directives never become parts; they are reported while the document is
/// built.
pub struct DirectivesInValidLocationsRule;
impl DocumentValidationRule for DirectivesInValidLocationsRule {
    fn name(&self) -> &'static str {
        "DirectivesInValidLocations"
    }

    fn rule_reference(&self) -> &'static str {
        "5.7.2"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let part = document.part(id);
            let Some(directive) = part.as_directive() else {
                continue;
            };
            let Some(definition) = schema.directive(directive.name()) else {
                continue;
            };
            if !definition.locations().contains(&directive.location()) {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!(
                        "Directive \"@{}\" may not be used on {}.",
                        directive.name(),
                        directive.location().as_name(),
                    ),
                );
            }
        }
    }
}

pub struct UniqueDirectivesPerLocationRule;
impl DocumentValidationRule for UniqueDirectivesPerLocationRule {
    fn name(&self) -> &'static str {
        "UniqueDirectivesPerLocation"
    }

    fn rule_reference(&self) -> &'static str {
        "5.7.3"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let directives = document
                .children_of_kind(id, DocumentPartKind::Directive)
                .filter_map(|d| document.part(d).as_directive().map(|directive| (directive.name(), d)))
                .filter(|(name, _)| schema.directive(name).is_some_and(|def| !def.is_repeatable()));
            for (name, directive) in repeated_names(directives) {
                context.critical(
                    self.rule_reference(),
                    document.part(directive).location(),
                    format!("The directive \"@{name}\" can only be used once at this location."),
                );
            }
        }
    }
}
