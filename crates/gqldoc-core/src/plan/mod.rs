//! Turning a validated operation into an [`ExecutionPlan`].
//!
//! [`QueryExecutionPlanGenerator`] runs the whole pipeline for one request:
//! it builds and validates the document, picks the requested operation, and
//! hands it to an [`ExecutionPlanGenerator`]. That generator enforces the
//! schema's depth and complexity limits around the conversion of the
//! operation into an [`ExecutableOperation`].

mod default_executable_operation_generator;
mod executable_operation;
mod executable_operation_generator;
mod execution_plan;
mod execution_plan_generator;
mod query_execution_plan_generator;

pub use default_executable_operation_generator::DefaultExecutableOperationGenerator;
pub use executable_operation::ExecutableField;
pub use executable_operation::ExecutableOperation;
pub use executable_operation::ExecutableValue;
pub use executable_operation_generator::ExecutableOperationGenerator;
pub use execution_plan::ExecutionPlan;
pub use execution_plan_generator::ExecutionPlanGenerator;
pub use query_execution_plan_generator::QueryExecutionPlanGenerator;

#[cfg(test)]
mod tests;
