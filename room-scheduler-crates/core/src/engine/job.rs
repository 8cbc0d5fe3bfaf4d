use crate::basic_types::JobInterval;
use crate::engine::room_domain::RoomDomain;
use crate::engine::variables::RoomId;

/// A job to be scheduled: its fixed interval, the rooms it may still use and, once decided, the
/// room it was given.
///
/// A job is identified by its [`JobId`](crate::engine::variables::JobId), never by its fields;
/// two different jobs may have identical fields at any point during the search.
#[derive(Debug, Clone)]
pub struct Job {
    interval: JobInterval,
    pub(crate) domain: RoomDomain,
    pub(crate) room: Option<RoomId>,
}

impl Job {
    pub(crate) fn new(interval: JobInterval, num_rooms: u32) -> Job {
        Job {
            interval,
            domain: RoomDomain::full(num_rooms),
            room: None,
        }
    }

    pub fn interval(&self) -> JobInterval {
        self.interval
    }

    pub fn start_time(&self) -> i64 {
        self.interval.start()
    }

    pub fn finish_time(&self) -> i64 {
        self.interval.finish()
    }

    pub fn domain(&self) -> &RoomDomain {
        &self.domain
    }

    pub fn is_assigned(&self) -> bool {
        self.room.is_some()
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn overlaps(&self, other: &Job) -> bool {
        self.interval.overlaps(&other.interval)
    }
}
