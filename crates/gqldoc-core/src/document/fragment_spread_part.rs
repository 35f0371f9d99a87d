use crate::document::DocumentPartError;
use crate::document::PartId;

/// A `...Name` spread and the named fragment it was linked to.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadPart {
    pub(crate) fragment: Option<PartId>,
    pub(crate) is_included: bool,
    pub(crate) name: String,
}
impl FragmentSpreadPart {
    pub(crate) fn new(name: String) -> Self {
        Self {
            fragment: None,
            is_included: true,
            name,
        }
    }

    /// Links this spread to `fragment`. A spread can only be linked once.
    pub fn assign_fragment(&mut self, fragment: PartId) -> Result<(), DocumentPartError> {
        if self.fragment.is_some() {
            return Err(DocumentPartError::FragmentAlreadyAssigned {
                spread_name: self.name.clone(),
            });
        }
        self.fragment = Some(fragment);
        Ok(())
    }

    /// The linked named fragment; `None` until linking succeeds.
    pub fn fragment(&self) -> Option<PartId> {
        self.fragment
    }

    pub fn is_included(&self) -> bool {
        self.is_included
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
