//! Reads the jobs to schedule from a delimited text file.
//!
//! Every line holds one job as two comma-separated numbers: its start time and its finish time.
//! Whitespace around the numbers is ignored, as are blank lines and lines starting with `#`. The
//! numbers have to be integers; a decimal number without fractional part (e.g. `3.0`) is accepted
//! as well.
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use room_scheduler::core::variables::InvalidIntervalError;
use room_scheduler::core::variables::JobInterval;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum JobFileError {
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected a start and a finish time separated by a comma, found {found} fields")]
    IncorrectFieldCount { line: usize, found: usize },

    #[error("line {line}: '{field}' is not an integer time")]
    InvalidTime { line: usize, field: String },

    #[error("line {line}: {source}")]
    InvalidInterval {
        line: usize,
        source: InvalidIntervalError,
    },
}

pub(crate) fn parse_job_file(path: impl AsRef<Path>) -> Result<Vec<JobInterval>, JobFileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| JobFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_jobs(BufReader::new(file))
}

pub(crate) fn parse_jobs(source: impl BufRead) -> Result<Vec<JobInterval>, JobFileError> {
    let mut jobs = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let fields = content.split(',').map(str::trim).collect::<Vec<_>>();
        let &[start, finish] = fields.as_slice() else {
            return Err(JobFileError::IncorrectFieldCount {
                line: line_number,
                found: fields.len(),
            });
        };

        let start = parse_time(start, line_number)?;
        let finish = parse_time(finish, line_number)?;

        let job = JobInterval::new(start, finish).map_err(|source| {
            JobFileError::InvalidInterval {
                line: line_number,
                source,
            }
        })?;
        jobs.push(job);
    }

    Ok(jobs)
}

fn parse_time(field: &str, line: usize) -> Result<i64, JobFileError> {
    if let Ok(time) = field.parse::<i64>() {
        return Ok(time);
    }

    field
        .parse::<f64>()
        .ok()
        .filter(|time| time.fract() == 0.0 && *time >= i64::MIN as f64 && *time < i64::MAX as f64)
        .map(|time| time as i64)
        .ok_or_else(|| JobFileError::InvalidTime {
            line,
            field: field.to_owned(),
        })
}
