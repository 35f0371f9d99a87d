use crate::SchemaConfiguration;
use crate::file_reader;
use crate::loc;
use crate::schema::DirectiveDefinition;
use crate::schema::EnumType;
use crate::schema::EnumValue;
use crate::schema::Field;
use crate::schema::GraphQLType;
use crate::schema::GraphQLTypeKind;
use crate::schema::InputObjectType;
use crate::schema::InputValue;
use crate::schema::ObjectType;
use crate::schema::ScalarType;
use crate::schema::ScalarTypeProvider;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::UnionType;
use gqldoc_parser::GraphQLParseError;
use gqldoc_parser::SyntaxNodeId;
use gqldoc_parser::SyntaxNodeKind;
use gqldoc_parser::SyntaxNodeKindTag;
use gqldoc_parser::SyntaxTree;
use gqldoc_parser::syntax::OperationType;
use gqldoc_parser::syntax::ScalarValueKind;
use gqldoc_parser::syntax::TypeDefinitionKind;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

/// Utility for building a [`Schema`] from SDL.
///
/// ```ignore
/// let schema = SchemaBuilder::from_str(None, "type Query { hello: String }")?
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    configuration: SchemaConfiguration,
    directive_defs: IndexMap<String, DirectiveDefinition>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    scalar_type_provider: ScalarTypeProvider,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    type_extensions: Vec<GraphQLType>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_scalars();
        self.inject_missing_builtin_directives();
        for extension in std::mem::take(&mut self.type_extensions) {
            self.apply_type_extension(extension)?;
        }

        let query_type =
            if let Some(def) = self.query_type.take() {
                def
            } else {
                match self.types.get("Query") {
                    Some(GraphQLType::Object(obj_type)) => NamedTypeDefLocation {
                        def_location: obj_type.def_location().clone(),
                        type_name: "Query".to_string(),
                    },
                    _ => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
                }
            };
        let mutation_type = self.mutation_type.take().or_else(
            || self.implicit_root_type("Mutation")
        );
        let subscription_type = self.subscription_type.take().or_else(
            || self.implicit_root_type("Subscription")
        );

        let mut errors = vec![];
        for root_type in [Some(&query_type), mutation_type.as_ref(), subscription_type.as_ref()]
            .into_iter()
            .flatten()
        {
            match self.types.get(root_type.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => (),
                Some(_) => errors.push(TypeValidationError::RootOperationTypeNotAnObject {
                    type_name: root_type.type_name.clone(),
                    location: root_type.def_location.clone(),
                }),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    undefined_type_name: root_type.type_name.clone(),
                    location: root_type.def_location.clone(),
                }),
            }
        }
        self.check_types(&mut errors);
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        tracing::debug!(
            types = self.types.len(),
            directives = self.directive_defs.len(),
            "built schema",
        );

        Ok(Schema {
            configuration: self.configuration,
            directive_defs: self.directive_defs,
            mutation_type: mutation_type.map(|t| t.type_name),
            query_type: query_type.type_name,
            scalar_type_provider: Arc::new(self.scalar_type_provider),
            subscription_type: subscription_type.map(|t| t.type_name),
            types: self.types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_str(
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn new() -> Self {
        Self {
            configuration: SchemaConfiguration::default(),
            directive_defs: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            scalar_type_provider: ScalarTypeProvider::new(),
            str_load_counter: 0,
            subscription_type: None,
            type_extensions: vec![],
            types: IndexMap::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let parse_result = gqldoc_parser::parse_schema_document(content);
        if parse_result.has_errors() {
            return Err(SchemaBuildError::ParseError {
                file: file_path,
                errors: parse_result.errors,
            });
        }
        let Some(tree) = parse_result.into_ast() else {
            return Err(SchemaBuildError::ParseError {
                file: file_path,
                errors: vec![],
            });
        };

        let mut visitor = SdlVisitor {
            builder: &mut self,
            file_path: file_path.as_path(),
            source: content,
            tree: &tree,
        };
        for def in tree.children(tree.root()) {
            visitor.visit_definition(*def)?;
        }

        Ok(self)
    }

    pub fn set_configuration(mut self, configuration: SchemaConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn set_scalar_type_provider(mut self, provider: ScalarTypeProvider) -> Self {
        self.scalar_type_provider = provider;
        self
    }

    fn apply_type_extension(&mut self, extension: GraphQLType) -> Result<()> {
        let extension_loc = extension.def_location().clone();
        let Some(existing) = self.types.get_mut(extension.name()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: extension.name().to_string(),
                extension_type_loc: extension_loc,
            });
        };

        match (existing, extension) {
            (GraphQLType::Enum(existing), GraphQLType::Enum(ext)) => {
                for (name, value) in ext.values {
                    if let Some(prev) = existing.values.get(&name) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: existing.name.clone(),
                            enum_def_location: existing.def_location.clone(),
                            value_def1: prev.def_location.clone(),
                            value_def2: value.def_location,
                        });
                    }
                    existing.values.insert(name, value);
                }
            },

            (GraphQLType::InputObject(existing), GraphQLType::InputObject(ext)) => {
                for (name, field) in ext.fields {
                    if let Some(prev) = existing.fields.get(&name) {
                        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                            type_name: existing.name.clone(),
                            field_name: name,
                            field_def1: prev.def_location.clone(),
                            field_def2: field.def_location,
                        });
                    }
                    existing.fields.insert(name, field);
                }
            },

            (GraphQLType::Interface(existing), GraphQLType::Interface(ext))
            | (GraphQLType::Object(existing), GraphQLType::Object(ext)) => {
                for (name, field) in ext.fields {
                    if name == "__typename" {
                        continue;
                    }
                    if let Some(prev) = existing.fields.get(&name) {
                        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                            type_name: existing.name.clone(),
                            field_name: name,
                            field_def1: prev.def_location.clone(),
                            field_def2: field.def_location,
                        });
                    }
                    existing.fields.insert(name, field);
                }
                for iface in ext.interfaces {
                    if existing.interfaces.contains(&iface) {
                        return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                            def_location: extension_loc,
                            duplicated_interface_name: iface,
                            type_name: existing.name.clone(),
                        });
                    }
                    existing.interfaces.push(iface);
                }
            },

            (GraphQLType::Scalar(existing), GraphQLType::Scalar(ext)) => {
                if ext.specified_by_url.is_some() {
                    existing.specified_by_url = ext.specified_by_url;
                }
            },

            (GraphQLType::Union(existing), GraphQLType::Union(ext)) => {
                for member in ext.members {
                    if existing.members.contains(&member) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name: existing.name.clone(),
                            member_name: member,
                            location: extension_loc,
                        });
                    }
                    existing.members.push(member);
                }
            },

            (existing, ext) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name: existing.name().to_string(),
                type_kind: existing.kind(),
                extension_kind: ext.kind(),
                extension_loc,
            }),
        }

        Ok(())
    }

    /// Checks every type reference once all definitions and extensions have
    /// been gathered.
    fn check_types(&self, errors: &mut Vec<TypeValidationError>) {
        let check_input = |errors: &mut Vec<TypeValidationError>, owner: String, input: &InputValue| {
            match self.types.get(input.type_annotation.innermost_name()) {
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    undefined_type_name: input.type_annotation.innermost_name().to_string(),
                    location: input.def_location.clone(),
                }),
                Some(t) if !t.is_input_type() => errors.push(TypeValidationError::InvalidInputType {
                    owner,
                    type_name: t.name().to_string(),
                    location: input.def_location.clone(),
                }),
                Some(_) => (),
            }
        };

        for directive in self.directive_defs.values() {
            for param in directive.parameters.values() {
                check_input(errors, format!("@{}({}:)", directive.name, param.name), param);
            }
        }

        for graphql_type in self.types.values() {
            match graphql_type {
                GraphQLType::Interface(obj_type) | GraphQLType::Object(obj_type) => {
                    for field in obj_type.fields.values() {
                        match self.types.get(field.type_annotation.innermost_name()) {
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                undefined_type_name: field.type_annotation.innermost_name().to_string(),
                                location: field.def_location.clone(),
                            }),
                            Some(GraphQLType::InputObject(_)) => {
                                errors.push(TypeValidationError::InvalidOutputType {
                                    owner: format!("{}.{}", obj_type.name, field.name),
                                    type_name: field.type_annotation.innermost_name().to_string(),
                                    location: field.def_location.clone(),
                                });
                            },
                            Some(_) => (),
                        }
                        for param in field.parameters.values() {
                            check_input(
                                errors,
                                format!("{}.{}({}:)", obj_type.name, field.name, param.name),
                                param,
                            );
                        }
                    }
                    self.check_implemented_interfaces(obj_type, errors);
                },

                GraphQLType::InputObject(input_type) => {
                    for field in input_type.fields.values() {
                        check_input(errors, format!("{}.{}", input_type.name, field.name), field);
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member in &union_type.members {
                        match self.types.get(member) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => errors.push(TypeValidationError::InvalidUnionMember {
                                union_name: union_type.name.clone(),
                                member_name: member.clone(),
                                location: union_type.def_location.clone(),
                            }),
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                undefined_type_name: member.clone(),
                                location: union_type.def_location.clone(),
                            }),
                        }
                    }
                },

                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),
            }
        }
    }

    fn check_implemented_interfaces(
        &self,
        obj_type: &ObjectType,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_name in &obj_type.interfaces {
            let iface = match self.types.get(iface_name) {
                Some(GraphQLType::Interface(iface)) => iface,
                Some(_) => {
                    errors.push(TypeValidationError::ImplementsNonInterfaceType {
                        type_name: obj_type.name.clone(),
                        implemented_type_name: iface_name.clone(),
                        location: obj_type.def_location.clone(),
                    });
                    continue;
                },
                None => {
                    errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: iface_name.clone(),
                        location: obj_type.def_location.clone(),
                    });
                    continue;
                },
            };

            for field_name in iface.fields.keys() {
                if !obj_type.fields.contains_key(field_name) {
                    errors.push(TypeValidationError::MissingInterfaceField {
                        type_name: obj_type.name.clone(),
                        interface_name: iface.name.clone(),
                        field_name: field_name.clone(),
                        location: obj_type.def_location.clone(),
                    });
                }
            }
        }
    }

    fn implicit_root_type(&self, type_name: &str) -> Option<NamedTypeDefLocation> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedTypeDefLocation {
                def_location: obj_type.def_location().clone(),
                type_name: type_name.to_string(),
            }),
            _ => None,
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in [
            DirectiveDefinition::skip(),
            DirectiveDefinition::include(),
            DirectiveDefinition::deprecated(),
            DirectiveDefinition::specified_by(),
            DirectiveDefinition::authorize(),
        ] {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    fn inject_missing_builtin_scalars(&mut self) {
        for name in ScalarTypeProvider::BUILTIN_SCALAR_NAMES {
            if !self.types.contains_key(*name) {
                self.types.insert(
                    name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(name)),
                );
            }
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the [`SyntaxTree`] of one SDL document into a [`SchemaBuilder`].
struct SdlVisitor<'a> {
    builder: &'a mut SchemaBuilder,
    file_path: &'a Path,
    source: &'a str,
    tree: &'a SyntaxTree,
}
impl SdlVisitor<'_> {
    fn def_location(&self, node: SyntaxNodeId) -> loc::SchemaDefLocation {
        loc::SchemaDefLocation::Schema(loc::FilePosition::from_span(
            Some(self.file_path),
            self.tree.span(node),
        ))
    }

    /// The `policy` arguments of every `@authorize` on `node`, plus whether
    /// any `@authorize` was present at all.
    fn authorization(&self, node: SyntaxNodeId) -> (bool, Vec<String>) {
        let mut is_secure = false;
        let mut policies = vec![];
        for directive in self.tree.children_tagged(node, SyntaxNodeKindTag::Directive) {
            if !matches!(self.tree.kind(directive), SyntaxNodeKind::Directive { name } if name == "authorize") {
                continue;
            }
            is_secure = true;
            if let Some(policy) = self.string_argument(directive, "policy") {
                policies.push(policy);
            }
        }
        (is_secure, policies)
    }

    fn deprecation_reason(&self, node: SyntaxNodeId) -> Option<String> {
        let directive = self.tree
            .children_tagged(node, SyntaxNodeKindTag::Directive)
            .find(|d| matches!(self.tree.kind(*d), SyntaxNodeKind::Directive { name } if name == "deprecated"))?;
        Some(
            self.string_argument(directive, "reason")
                .unwrap_or_else(|| "No longer supported".to_string())
        )
    }

    fn string_argument(&self, directive: SyntaxNodeId, arg_name: &str) -> Option<String> {
        let arg = self.tree
            .children_tagged(directive, SyntaxNodeKindTag::InputArgument)
            .find(|a| matches!(self.tree.kind(*a), SyntaxNodeKind::InputArgument { name } if name == arg_name))?;
        match self.tree.kind(self.tree.value_child(arg)?) {
            SyntaxNodeKind::ScalarValue { kind: ScalarValueKind::String, value } => Some(value.clone()),
            _ => None,
        }
    }

    fn visit_definition(&mut self, def: SyntaxNodeId) -> Result<()> {
        match self.tree.kind(def) {
            SyntaxNodeKind::SchemaDefinition { .. } => self.visit_schema_def(def),
            SyntaxNodeKind::DirectiveDefinition { .. } => self.visit_directive_def(def),
            SyntaxNodeKind::TypeDefinition { .. } => self.visit_type_def(def),
            // Executable definitions are rejected by the schema parser.
            _ => Ok(()),
        }
    }

    fn visit_directive_def(&mut self, def: SyntaxNodeId) -> Result<()> {
        let SyntaxNodeKind::DirectiveDefinition {
            name,
            description,
            locations,
            repeatable,
        } = self.tree.kind(def) else {
            return Ok(());
        };
        let location = self.def_location(def);

        if builtin_directive_names().contains(name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: name.clone(),
                location,
            });
        }

        if name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: location,
                directive_name: name.clone(),
            });
        }

        if let Some(existing) = self.builder.directive_defs.get(name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: name.clone(),
                location1: existing.def_location.clone(),
                location2: location,
            });
        }

        let parameters = self.visit_input_values(def, name)?;
        self.builder.directive_defs.insert(name.clone(), DirectiveDefinition {
            def_location: location,
            description: description.clone(),
            locations: locations.clone(),
            name: name.clone(),
            parameters,
            repeatable: *repeatable,
        });

        Ok(())
    }

    fn visit_schema_def(&mut self, def: SyntaxNodeId) -> Result<()> {
        for entry in self.tree.children_tagged(def, SyntaxNodeKindTag::RootOperationTypeDefinition) {
            let SyntaxNodeKind::RootOperationTypeDefinition {
                operation_type,
                type_name,
            } = self.tree.kind(entry) else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: self.def_location(entry),
                type_name: type_name.clone(),
            };
            let slot = match operation_type {
                OperationType::Query => &mut self.builder.query_type,
                OperationType::Mutation => &mut self.builder.mutation_type,
                OperationType::Subscription => &mut self.builder.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: *operation_type,
                    location1: existing.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (OperationType::Query, &self.builder.query_type),
            (OperationType::Mutation, &self.builder.mutation_type),
            (OperationType::Subscription, &self.builder.subscription_type),
        ];
        for (i, (operation1, root1)) in roots.iter().enumerate() {
            for (operation2, root2) in roots.iter().skip(i + 1) {
                if let (Some(root1), Some(root2)) = (root1, root2)
                    && root1.type_name == root2.type_name
                {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: root1.type_name.clone(),
                        operation1: *operation1,
                        operation1_loc: root1.def_location.clone(),
                        operation2: *operation2,
                        operation2_loc: root2.def_location.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_type_def(&mut self, def: SyntaxNodeId) -> Result<()> {
        let SyntaxNodeKind::TypeDefinition {
            kind,
            name,
            description,
            implements,
            union_members,
            is_extension,
        } = self.tree.kind(def) else {
            return Ok(());
        };
        let def_location = self.def_location(def);

        if name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name: name.clone(),
            });
        }

        let graphql_type = match kind {
            TypeDefinitionKind::Enum => {
                let mut values: IndexMap<String, EnumValue> = IndexMap::new();
                for value_def in self.tree.children_tagged(def, SyntaxNodeKindTag::EnumValueDefinition) {
                    let SyntaxNodeKind::EnumValueDefinition {
                        name: value_name,
                        description,
                    } = self.tree.kind(value_def) else {
                        continue;
                    };
                    let value = EnumValue {
                        def_location: self.def_location(value_def),
                        deprecation_reason: self.deprecation_reason(value_def),
                        description: description.clone(),
                        name: value_name.clone(),
                    };
                    if let Some(prev) = values.get(value_name) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: name.clone(),
                            enum_def_location: def_location,
                            value_def1: prev.def_location.clone(),
                            value_def2: value.def_location,
                        });
                    }
                    values.insert(value_name.clone(), value);
                }
                if values.is_empty() && !is_extension {
                    return Err(SchemaBuildError::EnumWithNoVariants {
                        type_name: name.clone(),
                        location: def_location,
                    });
                }
                GraphQLType::Enum(EnumType {
                    def_location,
                    description: description.clone(),
                    name: name.clone(),
                    values,
                })
            },

            TypeDefinitionKind::InputObject => GraphQLType::InputObject(InputObjectType {
                def_location,
                description: description.clone(),
                fields: self.visit_input_values(def, name)?,
                name: name.clone(),
            }),

            TypeDefinitionKind::Interface | TypeDefinitionKind::Object => {
                if *kind == TypeDefinitionKind::Interface && implements.contains(name) {
                    return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                        def_location,
                        interface_name: name.clone(),
                    });
                }
                let mut interfaces: Vec<String> = vec![];
                for iface in implements {
                    if interfaces.contains(iface) {
                        return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                            def_location,
                            duplicated_interface_name: iface.clone(),
                            type_name: name.clone(),
                        });
                    }
                    interfaces.push(iface.clone());
                }
                let obj_type = ObjectType {
                    fields: self.visit_fields(def, name)?,
                    def_location,
                    description: description.clone(),
                    interfaces,
                    name: name.clone(),
                };
                if *kind == TypeDefinitionKind::Interface {
                    GraphQLType::Interface(obj_type)
                } else {
                    GraphQLType::Object(obj_type)
                }
            },

            TypeDefinitionKind::Scalar => {
                let specified_by_url = self.tree
                    .children_tagged(def, SyntaxNodeKindTag::Directive)
                    .find(|d| matches!(self.tree.kind(*d), SyntaxNodeKind::Directive { name } if name == "specifiedBy"))
                    .and_then(|d| self.string_argument(d, "url"));
                GraphQLType::Scalar(ScalarType {
                    def_location,
                    description: description.clone(),
                    name: name.clone(),
                    specified_by_url,
                })
            },

            TypeDefinitionKind::Union => {
                let mut members: Vec<String> = vec![];
                for member in union_members {
                    if members.contains(member) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name: name.clone(),
                            member_name: member.clone(),
                            location: def_location,
                        });
                    }
                    members.push(member.clone());
                }
                GraphQLType::Union(UnionType {
                    def_location,
                    description: description.clone(),
                    fields: IndexMap::from([("__typename".to_string(), Field::typename())]),
                    members,
                    name: name.clone(),
                })
            },
        };

        if *is_extension {
            self.builder.type_extensions.push(graphql_type);
            return Ok(());
        }

        if let Some(existing) = self.builder.types.get(name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.clone(),
                def1: existing.def_location().clone(),
                def2: graphql_type.def_location().clone(),
            });
        }
        self.builder.types.insert(name.clone(), graphql_type);
        Ok(())
    }

    fn visit_fields(
        &self,
        def: SyntaxNodeId,
        type_name: &str,
    ) -> Result<IndexMap<String, Field>> {
        let (type_is_secure, type_policies) = self.authorization(def);

        let mut fields = IndexMap::from([("__typename".to_string(), Field::typename())]);
        for field_def in self.tree.children_tagged(def, SyntaxNodeKindTag::FieldDefinition) {
            let SyntaxNodeKind::FieldDefinition {
                name,
                description,
                type_expression,
            } = self.tree.kind(field_def) else {
                continue;
            };
            let def_location = self.def_location(field_def);

            if name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location,
                    field_name: name.clone(),
                    type_name: type_name.to_string(),
                });
            }
            if let Some(prev) = fields.get(name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: name.clone(),
                    field_def1: prev.def_location.clone(),
                    field_def2: def_location,
                });
            }

            let parameters = self.visit_input_values(field_def, type_name)?;
            if let Some(param_name) = parameters.keys().find(|p| p.starts_with("__")) {
                return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                    def_location,
                    field_name: name.clone(),
                    param_name: param_name.clone(),
                    type_name: type_name.to_string(),
                });
            }

            let (field_is_secure, mut policies) = self.authorization(field_def);
            policies.extend(type_policies.iter().cloned());
            fields.insert(name.clone(), Field {
                authorization_policies: policies,
                def_location,
                deprecation_reason: self.deprecation_reason(field_def),
                description: description.clone(),
                is_secure: type_is_secure || field_is_secure,
                name: name.clone(),
                parameters,
                type_annotation: type_expression.clone(),
            });
        }
        Ok(fields)
    }

    fn visit_input_values(
        &self,
        parent: SyntaxNodeId,
        owner_name: &str,
    ) -> Result<IndexMap<String, InputValue>> {
        let mut values: IndexMap<String, InputValue> = IndexMap::new();
        for value_def in self.tree.children_tagged(parent, SyntaxNodeKindTag::InputValueDefinition) {
            let SyntaxNodeKind::InputValueDefinition {
                name,
                description,
                type_expression,
            } = self.tree.kind(value_def) else {
                continue;
            };
            let def_location = self.def_location(value_def);
            if let Some(prev) = values.get(name.as_str()) {
                return Err(SchemaBuildError::DuplicateInputValueDefinition {
                    owner_name: owner_name.to_string(),
                    value_name: name.clone(),
                    def1: prev.def_location.clone(),
                    def2: def_location,
                });
            }
            let default_value = self.tree
                .value_child(value_def)
                .and_then(|value| self.tree.span(value).slice(self.source))
                .map(str::to_string);
            values.insert(name.clone(), InputValue {
                def_location,
                default_value,
                description: description.clone(),
                name: name.clone(),
                type_annotation: type_expression.clone(),
            });
        }
        Ok(values)
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("The `{enum_name}` enum defines the same value more than once (at {value_def2})")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SchemaDefLocation,
        value_def1: loc::SchemaDefLocation,
        value_def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` type defines the field `{field_name}` more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("`{owner_name}` defines the input value `{value_name}` more than once")]
    DuplicateInputValueDefinition {
        owner_name: String,
        value_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SchemaDefLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` enum must define one or more unique values")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend the {type_kind} type `{type_name}` with a {extension_kind} extension")]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SchemaDefLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`: `{type_name}.{field_name}({param_name}:)`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SchemaDefLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations are both defined \
        with the `{reused_type_name}` type. All root operations must be \
        defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationType,
        operation1_loc: loc::SchemaDefLocation,
        operation2: OperationType,
        operation2_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Error parsing schema document `{}`:\n{}",
        file.display(),
        errors.iter()
            .map(|e| format!("  * {e}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    ParseError {
        file: PathBuf,
        errors: Vec<GraphQLParseError>,
    },

    #[error("Attempted to redefine the builtin directive `@{directive_name}`")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// The location of the type a root operation was declared with.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
