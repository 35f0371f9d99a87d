use crate::document::PartId;
use crate::QueryDocument;
use crate::SchemaConfiguration;

/// Estimates how expensive an operation is to execute. Servers with their
/// own cost model implement this and hand it to the
/// [`ExecutionPlanGenerator`](crate::plan::ExecutionPlanGenerator).
pub trait OperationComplexityCalculator: Send + Sync {
    fn calculate(
        &self,
        document: &QueryDocument,
        operation: PartId,
        configuration: &SchemaConfiguration,
    ) -> f64;
}
