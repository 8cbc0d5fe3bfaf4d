use thiserror::Error;

use crate::parsers::job_file::JobFileError;

pub(crate) type SchedulerResult<T> = Result<T, SchedulerError>;

#[derive(Error, Debug)]
pub(crate) enum SchedulerError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The job file was invalid, more details: {0}")]
    InvalidJobFile(#[from] JobFileError),
}
