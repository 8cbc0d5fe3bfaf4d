use crate::engine::variables::RoomId;

/// The set of rooms which are still considered for a job.
///
/// Membership is stored per room so that removal and lookup are constant time; iteration is
/// always in ascending room order. A domain therefore takes one byte per room, for every job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDomain {
    is_present: Vec<bool>,
    size: usize,
}

impl RoomDomain {
    /// Creates the domain `{0, ..., num_rooms - 1}`.
    pub(crate) fn full(num_rooms: u32) -> RoomDomain {
        RoomDomain {
            is_present: vec![true; num_rooms as usize],
            size: num_rooms as usize,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.is_present
            .get(room.id as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Removes `room` from the domain; returns whether it was present.
    pub(crate) fn remove(&mut self, room: RoomId) -> bool {
        match self.is_present.get_mut(room.id as usize) {
            Some(is_present) if *is_present => {
                *is_present = false;
                self.size -= 1;
                true
            }
            _ => false,
        }
    }

    /// Adds `room` back into the domain; returns whether it was absent.
    pub(crate) fn insert(&mut self, room: RoomId) -> bool {
        match self.is_present.get_mut(room.id as usize) {
            Some(is_present) if !*is_present => {
                *is_present = true;
                self.size += 1;
                true
            }
            _ => false,
        }
    }

    /// Iterate over the rooms in the domain in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.is_present
            .iter()
            .enumerate()
            .filter(|(_, is_present)| **is_present)
            .map(|(index, _)| RoomId::new(index as u32))
    }
}
