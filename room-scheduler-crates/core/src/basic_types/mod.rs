mod failure_reason;
mod invalid_state_error;
mod job_interval;
mod trail;

pub use failure_reason::FailureReason;
pub use invalid_state_error::InvalidStateError;
pub use job_interval::InvalidIntervalError;
pub use job_interval::JobInterval;
pub(crate) use trail::Trail;
