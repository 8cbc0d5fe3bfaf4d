//! # Room scheduler
//! Assigns jobs with fixed time intervals to interchangeable rooms such that no two overlapping
//! jobs share a room. The search engine lives in [`core`]; this crate re-exports it and provides
//! the `room-scheduler` command line tool, which reads the jobs from a file.
//!
//! ```rust
//! # use room_scheduler::solve;
//! # use room_scheduler::variables::JobInterval;
//! let jobs = [JobInterval::new(1, 3).unwrap(), JobInterval::new(2, 4).unwrap()];
//!
//! assert!(solve(&jobs, 2, None).is_success());
//! assert!(!solve(&jobs, 1, None).is_success());
//! ```
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the solver, such as checking after every
//!   assignment that no two overlapping jobs share a room. Turned off by default.
pub use room_scheduler_core as core;
pub use room_scheduler_core::*;
