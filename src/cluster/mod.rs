//! Family records produced by a clustering pass

pub mod metrics;

/// One genome family: a connected component left standing after pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Component number in discovery order, starting at zero.
    pub id: usize,

    /// Member genome names in depth-first discovery order.
    pub members: Vec<String>,
}

impl Family {
    /// Report heading for this family.
    pub fn label(&self) -> String {
        format!("Family {}", self.id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
