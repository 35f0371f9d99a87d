use crate::document::AggregatedParts;
use crate::document::DocumentPartData;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::document::SuppliedValueKind;
use crate::QueryDocument;

/// Fills in the [`AggregatedParts`] of every operation and named fragment,
/// and evaluates `@skip`/`@include` directives whose condition is a literal.
///
/// Runs once construction and linking are done. Aggregating a document
/// again recomputes the same indexes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentAggregator;
impl DocumentAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, document: &mut QueryDocument) {
        let definitions: Vec<PartId> = document
            .operations()
            .iter()
            .chain(document.named_fragments())
            .copied()
            .collect();

        let mut excluded = 0;
        for definition in definitions {
            let mut aggregated = AggregatedParts::default();
            let mut referenced_named_fragments: Vec<String> = vec![];
            let mut inclusion = vec![];

            for id in document.descendants(definition) {
                let part = document.part(id);
                match part.data() {
                    DocumentPartData::Directive(_) => aggregated.directives.push(id),
                    DocumentPartData::Field(field) => {
                        if field.is_secure() {
                            aggregated.secure_parts.push(id);
                        }
                        inclusion.push((id, literal_inclusion(document, id)));
                    },
                    DocumentPartData::FragmentSpread(spread) => {
                        aggregated.fragment_spreads.push(id);
                        if !referenced_named_fragments.iter().any(|name| name == spread.name()) {
                            referenced_named_fragments.push(spread.name().to_string());
                        }
                        inclusion.push((id, literal_inclusion(document, id)));
                    },
                    DocumentPartData::InlineFragment(_) => {
                        inclusion.push((id, literal_inclusion(document, id)));
                    },
                    DocumentPartData::SuppliedValue(value) if value.variable_name().is_some() => {
                        aggregated.variable_usages.push(id);
                    },
                    _ => (),
                }
            }

            for (id, is_included) in inclusion {
                if !is_included {
                    excluded += 1;
                }
                match &mut document.part_mut(id).data {
                    DocumentPartData::Field(field) => field.is_included = is_included,
                    DocumentPartData::FragmentSpread(spread) => spread.is_included = is_included,
                    DocumentPartData::InlineFragment(fragment) => fragment.is_included = is_included,
                    _ => (),
                }
            }
            match &mut document.part_mut(definition).data {
                DocumentPartData::Operation(operation) => operation.aggregated = aggregated,
                DocumentPartData::NamedFragment(fragment) => {
                    fragment.aggregated = aggregated;
                    fragment.referenced_named_fragments = referenced_named_fragments;
                },
                _ => (),
            }
        }
        tracing::debug!(excluded, "aggregated query document");
    }
}

/// `false` when a directive on `id` excludes it with a literal condition:
/// `@skip(if: true)` or `@include(if: false)`. Variable conditions are only
/// known at execution time, so they keep the part.
fn literal_inclusion(document: &QueryDocument, id: PartId) -> bool {
    for directive_id in document.children_of_kind(id, DocumentPartKind::Directive) {
        let Some(directive) = document.part(directive_id).as_directive() else {
            continue;
        };
        let excluded_when = match directive.name() {
            "skip" => true,
            "include" => false,
            _ => continue,
        };
        if literal_condition(document, directive_id) == Some(excluded_when) {
            return false;
        }
    }
    true
}

fn literal_condition(document: &QueryDocument, directive: PartId) -> Option<bool> {
    let argument = document
        .children_of_kind(directive, DocumentPartKind::InputArgument)
        .find(|id| document.part(*id).as_input_argument().is_some_and(|a| a.name() == "if"))?;
    let value = document.children(argument).first()?;
    match document.part(*value).as_supplied_value()?.value() {
        SuppliedValueKind::Boolean(condition) => Some(*condition),
        _ => None,
    }
}
