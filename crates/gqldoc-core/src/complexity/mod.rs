//! Estimated cost of executing an operation.

mod default_operation_complexity_calculator;
mod operation_complexity_calculator;

pub use default_operation_complexity_calculator::DefaultOperationComplexityCalculator;
pub use operation_complexity_calculator::OperationComplexityCalculator;

#[cfg(test)]
mod tests;
