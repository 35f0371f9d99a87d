use crate::document::PartId;
use crate::plan::ExecutableOperation;
use crate::QueryDocument;
use crate::schema::Schema;

/// Converts a validated operation into an [`ExecutableOperation`].
///
/// Conversion is asynchronous so implementations can consult external
/// services, e.g. to look up persisted cost data. Problems are recorded as
/// messages on the returned operation.
pub trait ExecutableOperationGenerator: Send + Sync {
    fn generate(
        &self,
        schema: &Schema,
        document: &QueryDocument,
        operation: PartId,
    ) -> impl Future<Output = ExecutableOperation> + Send;
}
