use crate::document::PartId;

/// Indexes gathered over everything an operation or named fragment owns,
/// filled in by the [aggregation pass](crate::linking::DocumentAggregator).
///
/// Parts reached through fragment spreads are not included; follow
/// `fragment_spreads` to reach them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregatedParts {
    pub(crate) directives: Vec<PartId>,
    pub(crate) fragment_spreads: Vec<PartId>,
    pub(crate) secure_parts: Vec<PartId>,
    pub(crate) variable_usages: Vec<PartId>,
}
impl AggregatedParts {
    pub fn directives(&self) -> &[PartId] {
        self.directives.as_slice()
    }

    pub fn fragment_spreads(&self) -> &[PartId] {
        self.fragment_spreads.as_slice()
    }

    /// Field selections whose schema field requires authorization.
    pub fn secure_parts(&self) -> &[PartId] {
        self.secure_parts.as_slice()
    }

    /// [`SuppliedValue`](crate::document::DocumentPartKind::SuppliedValue)
    /// parts that reference a variable.
    pub fn variable_usages(&self) -> &[PartId] {
        self.variable_usages.as_slice()
    }
}
