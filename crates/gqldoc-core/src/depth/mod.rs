//! Operation depth: how deeply nested an operation's field selections are
//! once fragment spreads are followed.

mod operation_depth_calculator;

pub use operation_depth_calculator::OperationDepthCalculator;

#[cfg(test)]
mod tests;
