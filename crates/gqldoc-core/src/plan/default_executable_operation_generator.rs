use crate::document::DocumentPartData;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::document::SuppliedValueKind;
use crate::messages::GraphQLMessage;
use crate::messages::GraphQLMessageCollection;
use crate::messages::codes;
use crate::plan::ExecutableField;
use crate::plan::ExecutableOperation;
use crate::plan::ExecutableOperationGenerator;
use crate::plan::ExecutableValue;
use crate::QueryDocument;
use crate::schema::Schema;
use gqldoc_parser::syntax::OperationType;
use indexmap::IndexMap;

const FIELD_MERGING_RULE: &str = "5.3.2";

/// Flattens fragments into per-field selection lists.
///
/// Parts excluded by a literal `@skip`/`@include` are dropped. Selections
/// sharing a response name and type condition are merged; selections that
/// share a response name but ask for different fields or arguments are
/// reported as Critical field merging conflicts and the later one is
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultExecutableOperationGenerator;
impl DefaultExecutableOperationGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutableOperationGenerator for DefaultExecutableOperationGenerator {
    async fn generate(
        &self,
        _schema: &Schema,
        document: &QueryDocument,
        operation: PartId,
    ) -> ExecutableOperation {
        let Some(operation_part) = document.part(operation).as_operation() else {
            let mut executable =
                ExecutableOperation::new(OperationType::Query, None, String::new());
            executable.messages.add(GraphQLMessage::critical(
                codes::BAD_REQUEST,
                "The requested part is not an operation.",
            ));
            return executable;
        };

        let mut executable = ExecutableOperation::new(
            operation_part.operation_type(),
            operation_part.name().map(str::to_string),
            operation_part.root_type().to_string(),
        );
        for (name, variable) in operation_part.variables() {
            if let Some(variable) = document.part(*variable).as_variable() {
                executable.variables.insert(name.clone(), variable.type_expression().clone());
            }
        }
        if let Some(selection_set) = operation_part.selection_set() {
            let mut flattener = Flattener {
                document,
                messages: &mut executable.messages,
                walked_named_fragments: vec![],
            };
            executable.fields = flattener.flatten(selection_set);
        }
        tracing::trace!(
            fields = executable.fields.len(),
            conflicts = executable.messages.len(),
            "generated executable operation",
        );
        executable
    }
}

struct Flattener<'a> {
    document: &'a QueryDocument,
    messages: &'a mut GraphQLMessageCollection,
    walked_named_fragments: Vec<PartId>,
}
impl<'a> Flattener<'a> {
    fn flatten(&mut self, selection_set: PartId) -> Vec<ExecutableField> {
        let document = self.document;
        let scope_type = document
            .part(selection_set)
            .as_field_selection_set()
            .map(|set| set.graph_type())
            .unwrap_or_default();
        let mut fields = vec![];
        self.collect(selection_set, scope_type, None, &mut fields);
        fields
    }

    /// `scope_type` is the graph type of the field selection set being
    /// flattened. A type condition naming it always applies, so it is
    /// recorded as no condition.
    fn collect(
        &mut self,
        selection_set: PartId,
        scope_type: &str,
        type_condition: Option<&str>,
        fields: &mut Vec<ExecutableField>,
    ) {
        let document = self.document;
        for selection in document.children(selection_set) {
            let part = document.part(*selection);
            if !part.is_included() {
                continue;
            }
            match part.data() {
                DocumentPartData::Field(field) => {
                    let selections = match document.selection_set_of(*selection) {
                        Some(nested) => self.flatten(nested),
                        None => vec![],
                    };
                    let executable = ExecutableField {
                        arguments: self.arguments(*selection),
                        field_name: field.name().to_string(),
                        is_secure: field.is_secure(),
                        location: part.location(),
                        owner_type: field.owner_type().to_string(),
                        response_name: field.response_name().to_string(),
                        return_type: field.return_type().clone(),
                        selections,
                        type_condition: type_condition.map(str::to_string),
                    };
                    self.merge(fields, executable);
                },
                DocumentPartData::InlineFragment(fragment) => {
                    let condition = narrowed(scope_type, fragment.type_condition(), type_condition);
                    if let Some(nested) = fragment.selection_set() {
                        self.collect(nested, scope_type, condition, fields);
                    }
                },
                DocumentPartData::FragmentSpread(spread) => {
                    let Some(fragment_id) = spread.fragment() else {
                        continue;
                    };
                    if self.walked_named_fragments.contains(&fragment_id) {
                        continue;
                    }
                    let Some(fragment) = document.part(fragment_id).as_named_fragment() else {
                        continue;
                    };
                    if let Some(nested) = fragment.selection_set() {
                        let condition =
                            narrowed(scope_type, Some(fragment.type_condition()), type_condition);
                        self.walked_named_fragments.push(fragment_id);
                        self.collect(nested, scope_type, condition, fields);
                        self.walked_named_fragments.pop();
                    }
                },
                _ => (),
            }
        }
    }

    /// Adds `field` to `fields`, merging it into an earlier selection with
    /// the same response name and type condition. Selections that may both
    /// apply to one object but cannot be merged are checked for conflicts
    /// all the way down.
    fn merge(&mut self, fields: &mut Vec<ExecutableField>, field: ExecutableField) {
        for existing in fields.iter_mut() {
            if !may_both_apply(existing, &field) {
                continue;
            }
            if let Some(conflict) = conflict_between(existing, &field) {
                self.report(&field, conflict);
                return;
            }
            if existing.type_condition == field.type_condition {
                for selection in field.selections {
                    self.merge(&mut existing.selections, selection);
                }
                return;
            }
            if !self.check_selections(&existing.selections, &field.selections) {
                return;
            }
        }
        fields.push(field);
    }

    /// Reports conflicts between two selection lists that will both be
    /// resolved on the same object. Returns `false` if one was found.
    fn check_selections(
        &mut self,
        existing: &[ExecutableField],
        incoming: &[ExecutableField],
    ) -> bool {
        let mut compatible = true;
        for field in incoming {
            for other in existing.iter().filter(|other| may_both_apply(other, field)) {
                if let Some(conflict) = conflict_between(other, field) {
                    self.report(field, conflict);
                    compatible = false;
                    break;
                }
                if !self.check_selections(&other.selections, &field.selections) {
                    compatible = false;
                    break;
                }
            }
        }
        compatible
    }

    fn report(&mut self, field: &ExecutableField, conflict: String) {
        self.messages.add(
            GraphQLMessage::critical(codes::INVALID_DOCUMENT, conflict)
                .with_location(field.location)
                .with_rule_reference(FIELD_MERGING_RULE),
        );
    }

    fn arguments(&self, owner: PartId) -> IndexMap<String, ExecutableValue> {
        let document = self.document;
        document
            .children_of_kind(owner, DocumentPartKind::InputArgument)
            .filter_map(|argument| {
                let name = document.part(argument).as_input_argument()?.name().to_string();
                let value = document.children(argument).first()?;
                Some((name, executable_value(document, *value)))
            })
            .collect()
    }
}

fn narrowed<'c>(
    scope_type: &str,
    condition: Option<&'c str>,
    inherited: Option<&'c str>,
) -> Option<&'c str> {
    match condition {
        Some(condition) if condition != scope_type => Some(condition),
        _ => inherited,
    }
}

fn may_both_apply(a: &ExecutableField, b: &ExecutableField) -> bool {
    a.response_name == b.response_name
        && (a.type_condition.is_none()
            || b.type_condition.is_none()
            || a.type_condition == b.type_condition)
}

fn conflict_between(existing: &ExecutableField, field: &ExecutableField) -> Option<String> {
    if existing.field_name != field.field_name {
        Some(format!(
            "Fields \"{}\" conflict because \"{}\" and \"{}\" are different fields. Use \
            different aliases on the fields to fetch both if this was intentional.",
            field.response_name,
            existing.field_name,
            field.field_name,
        ))
    } else if existing.arguments != field.arguments {
        Some(format!(
            "Fields \"{}\" conflict because they have differing arguments.",
            field.response_name,
        ))
    } else {
        None
    }
}

fn executable_value(document: &QueryDocument, value: PartId) -> ExecutableValue {
    let Some(supplied) = document.part(value).as_supplied_value() else {
        return ExecutableValue::Null;
    };
    match supplied.value() {
        SuppliedValueKind::Boolean(value) => ExecutableValue::Boolean(*value),
        SuppliedValueKind::Enum(value) => ExecutableValue::Enum(value.clone()),
        SuppliedValueKind::Float(raw) => ExecutableValue::Float(raw.clone()),
        SuppliedValueKind::Int(raw) => ExecutableValue::Int(raw.clone()),
        SuppliedValueKind::List => ExecutableValue::List(
            document
                .children(value)
                .iter()
                .map(|item| executable_value(document, *item))
                .collect(),
        ),
        SuppliedValueKind::Null => ExecutableValue::Null,
        SuppliedValueKind::Object => ExecutableValue::Object(
            document
                .children_of_kind(value, DocumentPartKind::InputObjectField)
                .filter_map(|field| {
                    let name = document.part(field).as_input_object_field()?.name().to_string();
                    let field_value = document.children(field).first()?;
                    Some((name, executable_value(document, *field_value)))
                })
                .collect(),
        ),
        SuppliedValueKind::String(value) => ExecutableValue::String(value.clone()),
        SuppliedValueKind::Variable(name) => ExecutableValue::Variable(name.clone()),
    }
}
