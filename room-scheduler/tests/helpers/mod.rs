//! Helpers to run the `room-scheduler` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    /// The lines of stdout which are not statistics.
    pub(crate) fn output_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| !line.starts_with("%% stat:"))
            .collect()
    }
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

/// Runs the scheduler on `instance_path` with `num_rooms` rooms and the given extra arguments.
///
/// The output of the run is written to files next to the instance whose names contain
/// `prefix`, so that tests using the same instance do not interfere.
pub(crate) fn run_scheduler(
    instance_path: impl AsRef<Path>,
    num_rooms: &str,
    args: &[&str],
    prefix: &str,
) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let scheduler = PathBuf::from(env!("CARGO_BIN_EXE_room-scheduler"));

    let out_file_path = instance_path.with_extension(format!("{prefix}.out"));
    let err_file_path = instance_path.with_extension(format!("{prefix}.err"));

    let mut command = Command::new(scheduler);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path)
        .arg(num_rooms)
        .stdout(File::create(&out_file_path).expect("Failed to create output file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run the scheduler.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("scheduler took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting scheduler: {e}"),
    };

    let stdout = std::fs::read_to_string(&out_file_path).expect("Failed to read output file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");

    std::fs::remove_file(out_file_path).expect("Failed to remove output file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    Run {
        status,
        stdout,
        stderr,
    }
}
