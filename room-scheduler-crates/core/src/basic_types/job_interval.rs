use std::fmt::Display;

use thiserror::Error;

/// The half-open time interval `[start, finish)` during which a job occupies its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobInterval {
    start: i64,
    finish: i64,
}

/// Error returned when constructing a [`JobInterval`] which does not span any time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the interval [{start}, {finish}) is empty; a job must start before it finishes")]
pub struct InvalidIntervalError {
    pub start: i64,
    pub finish: i64,
}

impl JobInterval {
    pub fn new(start: i64, finish: i64) -> Result<JobInterval, InvalidIntervalError> {
        if start < finish {
            Ok(JobInterval { start, finish })
        } else {
            Err(InvalidIntervalError { start, finish })
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn finish(&self) -> i64 {
        self.finish
    }

    /// Two intervals overlap if they share at least one time point. Intervals which merely touch
    /// (one finishes exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &JobInterval) -> bool {
        self.start < other.finish && other.start < self.finish
    }
}

impl TryFrom<(i64, i64)> for JobInterval {
    type Error = InvalidIntervalError;

    fn try_from((start, finish): (i64, i64)) -> Result<Self, Self::Error> {
        JobInterval::new(start, finish)
    }
}

impl Display for JobInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.start, self.finish)
    }
}
