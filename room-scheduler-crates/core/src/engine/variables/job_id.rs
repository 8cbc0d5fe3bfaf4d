use crate::containers::StorageKey;

/// The stable identity of a job; it is the position of the job in the input of the solver.
///
/// All lookups, comparisons and bookkeeping during search go through this identity, never through
/// the (mutable) fields of the job itself.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct JobId {
    pub id: u32,
}

impl JobId {
    pub fn new(id: u32) -> Self {
        JobId { id }
    }
}

impl StorageKey for JobId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        JobId { id: index as u32 }
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "j{}", self.id)
    }
}

impl std::fmt::Debug for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "j{}", self.id)
    }
}
