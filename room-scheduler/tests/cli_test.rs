#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::instance;
use helpers::run_scheduler;

const UNSATISFIABLE: &str =
    "the jobs cannot be scheduled in the available rooms within the attempt threshold";

#[test]
fn overlapping_jobs_are_put_in_different_rooms() {
    let run = run_scheduler(instance("two_overlapping.csv"), "2", &[], "two_rooms");

    assert!(run.status.success());
    assert_eq!(
        run.output_lines(),
        vec![
            "Solution Found!",
            "(1, 3) assigned to Room: 0",
            "(2, 4) assigned to Room: 1",
        ]
    );
}

#[test]
fn touching_jobs_share_a_room() {
    let run = run_scheduler(instance("touching.csv"), "1", &[], "one_room");

    assert!(run.status.success());
    assert_eq!(
        run.output_lines(),
        vec![
            "Solution Found!",
            "(1, 3) assigned to Room: 0",
            "(3, 5) assigned to Room: 0",
        ]
    );
}

#[test]
fn infeasible_instance_is_reported() {
    let run = run_scheduler(instance("three_overlapping.csv"), "2", &[], "plain");

    assert!(run.status.success());
    assert_eq!(run.output_lines(), vec!["No Solution Found!", UNSATISFIABLE]);
}

#[test]
fn infeasible_instance_is_reported_with_backjumping() {
    let run = run_scheduler(
        instance("three_overlapping.csv"),
        "2",
        &["--backjumping"],
        "backjumping",
    );

    assert!(run.status.success());
    assert_eq!(run.output_lines(), vec!["No Solution Found!", UNSATISFIABLE]);
}

#[test]
fn every_conflict_resolver_can_be_selected() {
    for (resolver, prefix) in [
        ("no-backjumping", "resolver_none"),
        ("conflict-directed-backjumping", "resolver_cbj"),
        ("chronological-backtracking", "resolver_chronological"),
    ] {
        let run = run_scheduler(
            instance("lectures.csv"),
            "3",
            &["--conflict-resolver", resolver],
            prefix,
        );

        assert!(run.status.success());
        assert_eq!(
            run.output_lines(),
            vec![
                "Solution Found!",
                "(0, 4) assigned to Room: 1",
                "(1, 3) assigned to Room: 0",
                "(2, 6) assigned to Room: 2",
                "(5, 9) assigned to Room: 1",
                "(6, 7) assigned to Room: 2",
                "(8, 10) assigned to Room: 0",
                "(3, 8) assigned to Room: 0",
            ]
        );
    }
}

#[test]
fn threshold_bounds_the_search() {
    let run = run_scheduler(
        instance("lectures.csv"),
        "3",
        &["--threshold", "2"],
        "threshold",
    );

    assert!(run.status.success());
    assert_eq!(run.output_lines(), vec!["No Solution Found!", UNSATISFIABLE]);
}

#[test]
fn empty_file_is_a_vacuous_success() {
    let run = run_scheduler(instance("empty.csv"), "1", &[], "empty");

    assert!(run.status.success());
    assert_eq!(run.output_lines(), vec!["Solution Found!"]);
}

#[test]
fn decimal_times_and_comments_are_accepted() {
    let run = run_scheduler(instance("decimal_with_comments.csv"), "2", &[], "decimal");

    assert!(run.status.success());
    assert_eq!(
        run.output_lines(),
        vec![
            "Solution Found!",
            "(1, 3) assigned to Room: 0",
            "(2, 4) assigned to Room: 1",
            "(3, 5) assigned to Room: 0",
        ]
    );
}

#[test]
fn malformed_file_is_rejected_before_solving() {
    let run = run_scheduler(instance("malformed.csv"), "2", &[], "malformed");

    assert!(!run.status.success());
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("line 2: 'four' is not an integer time"));
}

#[test]
fn reversed_interval_is_rejected() {
    let run = run_scheduler(instance("reversed_interval.csv"), "1", &[], "reversed");

    assert!(!run.status.success());
    assert!(run.stderr.contains("line 2"));
}

#[test]
fn missing_file_is_rejected() {
    let run = run_scheduler(instance("does_not_exist.csv"), "1", &[], "missing");

    assert!(!run.status.success());
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("does_not_exist.csv"));
}

#[test]
fn zero_rooms_are_rejected() {
    let run = run_scheduler(instance("touching.csv"), "0", &[], "zero_rooms");

    assert!(!run.status.success());
}

#[test]
fn room_count_is_bounded() {
    let run = run_scheduler(instance("touching.csv"), "4294967295", &[], "many_rooms");

    assert!(!run.status.success());
    assert!(run.stdout.is_empty());
}

#[test]
fn statistics_are_printed_on_request() {
    let run = run_scheduler(
        instance("two_overlapping.csv"),
        "2",
        &["--log-statistics"],
        "statistics",
    );

    assert!(run.status.success());
    assert!(run.stdout.contains("%% stat: num_attempts=2"));
    assert!(run.stdout.contains("%% stat: num_dead_ends=0"));
}

#[test]
fn log_file_receives_the_log() {
    let log_file = std::env::temp_dir().join("room_scheduler_cli_test.log");

    let run = run_scheduler(
        instance("touching.csv"),
        "1",
        &[
            "--log",
            "DEBUG",
            "--log-file",
            log_file.to_str().expect("utf-8 temporary directory"),
        ],
        "log_file",
    );

    assert!(run.status.success());
    let log = std::fs::read_to_string(&log_file).expect("log file was written");
    assert!(log.contains("Assigned room 0 to j0"));
    std::fs::remove_file(log_file).expect("Failed to remove log file.");
}

#[test]
fn unwritable_log_file_falls_back_to_stderr() {
    let log_file = instance("no_such_directory").join("scheduler.log");

    let run = run_scheduler(
        instance("touching.csv"),
        "1",
        &[
            "--log-file",
            log_file.to_str().expect("utf-8 instance directory"),
        ],
        "unwritable_log",
    );

    assert!(run.status.success());
    assert_eq!(
        run.output_lines(),
        vec![
            "Solution Found!",
            "(1, 3) assigned to Room: 0",
            "(3, 5) assigned to Room: 0",
        ]
    );
    assert!(run.stderr.contains("Could not create the log file"));
    assert!(run.stderr.contains("scheduler.log"));
}
