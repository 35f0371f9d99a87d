use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::validation::DocumentValidationContext;
use crate::validation::DocumentValidationRule;
use crate::validation::rules::repeated_names;
use crate::QueryDocument;
use crate::messages::GraphQLMessageSeverity;
use std::collections::HashSet;

pub struct UniqueFragmentNamesRule;
impl DocumentValidationRule for UniqueFragmentNamesRule {
    fn name(&self) -> &'static str {
        "UniqueFragmentNames"
    }

    fn rule_reference(&self) -> &'static str {
        "5.5.1.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let named = document.named_fragments().iter().filter_map(|id| {
            document.part(*id).as_named_fragment().map(|f| (f.name(), *id))
        });
        for (name, id) in repeated_names(named) {
            context.critical(
                self.rule_reference(),
                document.part(id).location(),
                format!("There can be only one fragment named \"{name}\"."),
            );
        }
    }
}

pub struct FragmentsOnCompositeTypesRule;
impl DocumentValidationRule for FragmentsOnCompositeTypesRule {
    fn name(&self) -> &'static str {
        "FragmentsOnCompositeTypes"
    }

    fn rule_reference(&self) -> &'static str {
        "5.5.1.3"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let part = document.part(id);
            let (fragment, type_condition) = match (part.as_named_fragment(), part.as_inline_fragment()) {
                (Some(named), _) => (format!("Fragment \"{}\"", named.name()), named.type_condition()),
                (_, Some(inline)) => match inline.type_condition() {
                    Some(type_condition) => ("Fragment".to_string(), type_condition),
                    None => continue,
                },
                _ => continue,
            };
            let is_composite = schema
                .lookup_type(type_condition)
                .is_none_or(|graph_type| graph_type.is_composite());
            if !is_composite {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!("{fragment} cannot condition on non composite type \"{type_condition}\"."),
                );
            }
        }
    }
}

/// Named fragments that no operation reaches, directly or through other
/// fragments. Reported as a Warning.
///
/// Reachability is by name, so every definition sharing a used fragment's
/// name counts as used and only the duplicate-name error is reported.
pub struct NoUnusedFragmentsRule;
impl DocumentValidationRule for NoUnusedFragmentsRule {
    fn name(&self) -> &'static str {
        "NoUnusedFragments"
    }

    fn rule_reference(&self) -> &'static str {
        "5.5.1.4"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let used_names: HashSet<&str> = document
            .operations()
            .iter()
            .flat_map(|operation| document.reachable_fragments(*operation))
            .filter_map(|id| document.part(id).as_named_fragment().map(|f| f.name()))
            .collect();
        for id in document.named_fragments() {
            let part = document.part(*id);
            if let Some(fragment) = part.as_named_fragment()
                && !used_names.contains(fragment.name())
            {
                context.report(
                    GraphQLMessageSeverity::Warning,
                    self.rule_reference(),
                    part.location(),
                    format!("Fragment \"{}\" is never used.", fragment.name()),
                );
            }
        }
    }
}

pub struct KnownFragmentNamesRule;
impl DocumentValidationRule for KnownFragmentNamesRule {
    fn name(&self) -> &'static str {
        "KnownFragmentNames"
    }

    fn rule_reference(&self) -> &'static str {
        "5.5.2.1"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        for id in document.fragment_spreads() {
            let part = document.part(*id);
            if document.enclosing_definition(*id).is_none() {
                continue;
            }
            if let Some(spread) = part.as_fragment_spread()
                && spread.fragment().is_none()
            {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!("Unknown fragment \"{}\".", spread.name()),
                );
            }
        }
    }
}

/// Fragment spreads must not form cycles. Each cycle is reported once,
/// however many of its fragments it could be entered from.
pub struct NoFragmentCyclesRule;
impl DocumentValidationRule for NoFragmentCyclesRule {
    fn name(&self) -> &'static str {
        "NoFragmentCycles"
    }

    fn rule_reference(&self) -> &'static str {
        "5.5.2.2"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let mut cycles = vec![];
        let mut seen_cycles = HashSet::new();
        for fragment in document.named_fragments() {
            let mut path = vec![];
            find_cycles(document, *fragment, &mut path, &mut cycles, &mut seen_cycles);
        }

        for cycle in cycles {
            let names: Vec<&str> = cycle
                .iter()
                .filter_map(|id| document.part(*id).as_named_fragment().map(|f| f.name()))
                .collect();
            let (Some(first), Some(first_name)) = (cycle.first(), names.first()) else {
                continue;
            };
            context.critical(
                self.rule_reference(),
                document.part(*first).location(),
                format!(
                    "Cannot spread fragment \"{}\" within itself: {}.",
                    first_name,
                    names.join(" -> "),
                ),
            );
        }
    }
}

fn find_cycles(
    document: &QueryDocument,
    fragment: PartId,
    path: &mut Vec<PartId>,
    cycles: &mut Vec<Vec<PartId>>,
    seen_cycles: &mut HashSet<Vec<PartId>>,
) {
    if let Some(start) = path.iter().position(|id| *id == fragment) {
        let mut cycle = path[start..].to_vec();
        cycle.push(fragment);
        let normalized = normalize_cycle(&cycle);
        if seen_cycles.insert(normalized.clone()) {
            cycles.push(normalized);
        }
        return;
    }
    let Some(named_fragment) = document.part(fragment).as_named_fragment() else {
        return;
    };

    path.push(fragment);
    for spread in named_fragment.aggregated().fragment_spreads() {
        if let Some(target) = document.part(*spread).as_fragment_spread().and_then(|s| s.fragment()) {
            find_cycles(document, target, path, cycles, seen_cycles);
        }
    }
    path.pop();
}

/// Rotates a closed cycle (`[A, B, C, A]`) to start at its lowest id, so
/// `[B, C, A, B]` normalizes the same way.
fn normalize_cycle(cycle: &[PartId]) -> Vec<PartId> {
    let Some((_, open)) = cycle.split_last() else {
        return vec![];
    };
    let start = open
        .iter()
        .enumerate()
        .min_by_key(|(_, id)| **id)
        .map(|(index, _)| index)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&open[start..]);
    normalized.extend_from_slice(&open[..start]);
    if let Some(first) = normalized.first().copied() {
        normalized.push(first);
    }
    normalized
}

/// A fragment can only be spread where its type condition overlaps the
/// enclosing selection set's type.
pub struct PossibleFragmentSpreadsRule;
impl DocumentValidationRule for PossibleFragmentSpreadsRule {
    fn name(&self) -> &'static str {
        "PossibleFragmentSpreads"
    }

    fn rule_reference(&self) -> &'static str {
        "5.5.2.3"
    }

    fn validate(&self, context: &mut DocumentValidationContext<'_>) {
        let document = context.document();
        let schema = context.schema();
        for id in context.attached_parts() {
            let part = document.part(id);
            let (fragment, type_condition) = match part.kind() {
                DocumentPartKind::InlineFragment => {
                    match part.as_inline_fragment().and_then(|f| f.type_condition()) {
                        Some(type_condition) => ("Fragment".to_string(), type_condition),
                        None => continue,
                    }
                },
                DocumentPartKind::FragmentSpread => {
                    let Some(target) = part.as_fragment_spread().and_then(|s| s.fragment()) else {
                        continue;
                    };
                    let Some(target) = document.part(target).as_named_fragment() else {
                        continue;
                    };
                    (format!("Fragment \"{}\"", target.name()), target.type_condition())
                },
                _ => continue,
            };
            let Some(parent_type) = part
                .parent()
                .and_then(|parent| document.part(parent).as_field_selection_set())
                .map(|set| set.graph_type())
            else {
                continue;
            };

            let both_composite = [parent_type, type_condition].iter().all(|name| {
                schema.lookup_type(name).is_some_and(|graph_type| graph_type.is_composite())
            });
            if both_composite && !schema.types_overlap(parent_type, type_condition) {
                context.critical(
                    self.rule_reference(),
                    part.location(),
                    format!(
                        "{fragment} cannot be spread here as objects of type \"{parent_type}\" \
                        can never be of type \"{type_condition}\".",
                    ),
                );
            }
        }
    }
}
