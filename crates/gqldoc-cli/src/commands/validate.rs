use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqldoc::file_reader;
use gqldoc::plan::ExecutionPlanGenerator;
use gqldoc::schema::Schema;
use gqldoc::schema::SchemaBuilder;
use gqldoc::DocumentGenerator;
use gqldoc::DocumentGeneratorError;
use gqldoc::GraphQLMessage;
use gqldoc::GraphQLMessageCollection;
use gqldoc::SchemaConfiguration;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for query \
             documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Reject operations whose estimated complexity exceeds this.",
        long,
    )]
    max_complexity: Option<f64>,

    #[arg(
        help="Reject operations nested deeper than this.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="One or more GraphQL schema (SDL) files to validate against.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more query documents or directories containing \
             query documents which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    fn configuration(&self) -> SchemaConfiguration {
        SchemaConfiguration {
            max_query_complexity: self.max_complexity,
            max_query_depth: self.max_depth,
            ..SchemaConfiguration::default()
        }
    }

    fn load_schema(&self) -> Result<Schema, Box<dyn Error>> {
        log::debug!("Loading {} schema files...", self.schema.len());
        let schema = SchemaBuilder::new()
            .load_files(self.schema.clone())?
            .set_configuration(self.configuration())
            .build()?;
        Ok(schema)
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Errors loading the schema: {err}",
                output_utils::RED_X,
            )),
        };

        let graphql_file_exts = normalize_extensions(&self.graphql_file_exts);
        let (file_paths, num_skipped_files) =
            match find_query_files(&self.file_or_dir_paths, &graphql_file_exts) {
                Ok(found) => found,
                Err(errors) => return CommandResult::failure(format_args!(
                    "{} Errors scanning input paths: {errors:#?}",
                    output_utils::RED_X,
                )),
            };
        log::debug!("Found {} query documents to be validated.", file_paths.len());

        let mut report = ValidationReport::default();
        for file_path in &file_paths {
            let messages = validate_file(&schema, file_path).await;
            report.record(file_path, messages);
        }

        let succeeded = report.num_invalid_files == 0;
        CommandResult::report(succeeded, format_args!(
            concat!(
                "{}{} {}:\n",
                "  * Analyzed {} query documents.\n",
                "  * Skipped {} non-query files.\n",
                "  * Planned {} operations.\n",
                "  * Found {} invalid documents.",
            ),
            report.details,
            if succeeded { output_utils::GREEN_CHECK } else { output_utils::RED_X },
            if succeeded { "All query documents are valid" } else { "Validation failed" },
            file_paths.len(),
            num_skipped_files,
            report.num_operations,
            report.num_invalid_files,
        ))
    }
}

#[derive(Debug, Default)]
struct ValidationReport {
    details: String,
    num_invalid_files: usize,
    num_operations: usize,
}
impl ValidationReport {
    fn record(&mut self, file_path: &Path, outcome: FileOutcome) {
        self.num_operations += outcome.num_operations;
        if outcome.messages.has_critical() {
            self.num_invalid_files += 1;
        }
        if outcome.messages.is_empty() {
            return;
        }

        let marker =
            if outcome.messages.has_critical() {
                output_utils::RED_X
            } else {
                output_utils::WARNING_SIGN
            };
        self.details.push_str(&format!("{marker} {}\n", file_path.display()));
        for message in &outcome.messages {
            self.details.push_str(&format!("    {message}\n"));
        }
    }
}

#[derive(Debug, Default)]
struct FileOutcome {
    messages: GraphQLMessageCollection,
    num_operations: usize,
}

/// Builds and validates one query document, then plans every operation in
/// it so that depth and complexity limits are reported too.
async fn validate_file(schema: &Schema, file_path: &Path) -> FileOutcome {
    let mut outcome = FileOutcome::default();
    let query_text = match file_reader::read_content(file_path) {
        Ok(text) => text,
        Err(err) => {
            outcome.messages.add(GraphQLMessage::critical(
                gqldoc::messages::codes::BAD_REQUEST,
                err.to_string(),
            ));
            return outcome;
        },
    };

    let document_generator = DocumentGenerator::new(schema);
    let mut document = match document_generator.create_document(&query_text) {
        Ok(document) => document,
        Err(DocumentGeneratorError::Syntax(errors)) => {
            outcome.messages.extend(errors.iter().map(GraphQLMessage::from_parse_error));
            return outcome;
        },
        Err(err @ DocumentGeneratorError::EmptyQueryText) => {
            log::warn!("Skipping {file_path:#?}: {err}.");
            return outcome;
        },
    };

    let is_valid = document_generator.validate_document(&mut document);
    outcome.messages.extend(document.messages().iter().cloned());
    if !is_valid {
        return outcome;
    }

    let plan_generator = ExecutionPlanGenerator::new(schema);
    for operation in document.operations() {
        let plan = plan_generator.create_plan(&document, *operation).await;
        log::trace!(
            "Planned an operation in {file_path:#?} with depth {} and complexity {}.",
            plan.depth(),
            plan.estimated_complexity(),
        );
        outcome.messages.extend(plan.messages().iter().cloned());
        outcome.num_operations += 1;
    }
    outcome
}

/// Every matching file at or under `paths`, canonicalized, plus the number
/// of entries that were skipped.
fn find_query_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> Result<(Vec<PathBuf>, usize), Vec<Box<dyn Error>>> {
    let mut errors: Vec<Box<dyn Error>> = vec![];
    let mut num_skipped_files = 0;
    let mut file_paths = vec![];
    log::debug!("Scanning {} input paths...", paths.len());
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(Box::new(err));
                    continue
                },
            };
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }
            if has_extension(entry_path, graphql_file_exts) {
                match std::fs::canonicalize(entry_path) {
                    Ok(canonical) => file_paths.push(canonical),
                    Err(err) => errors.push(Box::new(err)),
                }
            } else {
                num_skipped_files += 1;
            }
        }
    }

    // A single explicitly named file is validated whatever its extension.
    if file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file()
    {
        match std::fs::canonicalize(only_path) {
            Ok(canonical) => {
                log::warn!(
                    "Proceeding to validate {canonical:#?} even though it doesn't \
                    match any of the --graphql-file-exts.",
                );
                file_paths.push(canonical);
                num_skipped_files = 0;
            },
            Err(err) => errors.push(Box::new(err)),
        }
    }

    if errors.is_empty() {
        Ok((file_paths, num_skipped_files))
    } else {
        Err(errors)
    }
}

fn has_extension(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}

/// Dot-prefixes every extension.
fn normalize_extensions(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_owned()
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}
