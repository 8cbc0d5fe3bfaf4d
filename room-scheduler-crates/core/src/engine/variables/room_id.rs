use crate::containers::StorageKey;

/// Identifies one of the interchangeable rooms; rooms are numbered `0..num_rooms`.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord, Debug)]
pub struct RoomId {
    pub id: u32,
}

impl RoomId {
    pub fn new(id: u32) -> Self {
        RoomId { id }
    }
}

impl StorageKey for RoomId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        RoomId { id: index as u32 }
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
