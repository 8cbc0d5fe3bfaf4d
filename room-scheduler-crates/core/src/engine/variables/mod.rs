//! The identities which the search operates on: jobs are the variables, rooms are the values.
mod job_id;
mod room_id;

pub use job_id::JobId;
pub use room_id::RoomId;
