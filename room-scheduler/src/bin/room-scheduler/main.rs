mod os_signal_termination;
mod parsers;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use room_scheduler::core::convert_case::Case;
use room_scheduler::core::options::ConflictResolverType;
use room_scheduler::core::options::SolverOptions;
use room_scheduler::core::results::Outcome;
use room_scheduler::core::statistics::configure_statistic_logging;
use room_scheduler::core::termination::Combinator;
use room_scheduler::core::termination::TimeBudget;
use room_scheduler::core::variables::JobInterval;
use room_scheduler::Solver;
use result::SchedulerResult;

/// The largest number of rooms accepted on the command line.
const MAX_ROOMS: u32 = 1 << 16;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The file detailing the jobs to schedule.
    ///
    /// Every line holds one job as its start and finish time separated by a comma, e.g. `1,3`.
    /// Blank lines and lines starting with '#' are skipped.
    #[clap(verbatim_doc_comment)]
    csp_file: PathBuf,

    /// The number of rooms in which to schedule the jobs.
    ///
    /// Every job keeps track of every room, so memory grows with jobs times rooms.
    ///
    /// Possible values: u32, between 1 and 65536
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROOMS)),
        verbatim_doc_comment
    )]
    number_rooms: u32,

    /// The number of room assignments after which the search gives up.
    ///
    /// If not provided, the search gives up after 2^(jobs + rooms) assignments.
    ///
    /// Possible values: u64
    #[arg(long, verbatim_doc_comment)]
    threshold: Option<u64>,

    /// The logging level.
    #[arg(long, value_enum, ignore_case = true, default_value_t)]
    log: LogLevel,

    /// The file to which the log is written.
    ///
    /// If not provided, the log is written to stderr.
    #[arg(long, verbatim_doc_comment)]
    log_file: Option<PathBuf>,

    /// Determines what happens when the search reaches a job without rooms left.
    #[arg(long, value_enum, default_value_t)]
    conflict_resolver: ConflictResolverType,

    /// Shorthand for '--conflict-resolver conflict-directed-backjumping'.
    #[arg(long, conflicts_with = "conflict_resolver")]
    backjumping: bool,

    /// The time limit of the search in milliseconds.
    ///
    /// When the limit is reached before the search ends, no solution is reported.
    ///
    /// Possible values: u64
    #[arg(long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// Print the statistics of the search to stdout after it has ended.
    #[arg(long = "log-statistics", default_value_t = false)]
    log_statistics: bool,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[default]
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

fn configure_logging(level: LogLevel, log_file: Option<&Path>, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%% stat:", Some(Case::Snake));
    }

    let (target, log_file_error) = match log_file.map(|path| (path, File::create(path))) {
        Some((_, Ok(file))) => (env_logger::Target::Pipe(Box::new(file)), None),
        Some((path, Err(error))) => (env_logger::Target::Stderr, Some((path, error))),
        None => (env_logger::Target::Stderr, None),
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .filter_level(level.into())
        .target(target)
        .init();

    if let Some((path, error)) = log_file_error {
        warn!(
            "Could not create the log file {}, logging to stderr instead: {error}",
            path.display()
        );
    }
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SchedulerResult<()> {
    let args = Args::parse();

    configure_logging(args.log, args.log_file.as_deref(), args.log_statistics);

    if room_scheduler::core::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION
        >= room_scheduler::core::asserts::SCHEDULER_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            room_scheduler::core::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION
        );
    };

    let jobs = parsers::job_file::parse_job_file(&args.csp_file)?;
    info!("Read {} jobs from {}", jobs.len(), args.csp_file.display());

    let conflict_resolver = if args.backjumping {
        ConflictResolverType::ConflictDirectedBackjumping
    } else {
        args.conflict_resolver
    };
    let solver_options = SolverOptions {
        conflict_resolver,
        threshold: args.threshold,
    };

    let mut solver = Solver::new(&jobs, args.number_rooms, solver_options);
    let mut termination = Combinator::new(
        OsSignal::install()?,
        args.time_limit
            .map(Duration::from_millis)
            .map(TimeBudget::starting_now),
    );

    let outcome = solver.satisfy(&mut termination);
    print_outcome(&jobs, &outcome);
    solver.log_statistics();

    Ok(())
}

fn print_outcome(jobs: &[JobInterval], outcome: &Outcome) {
    match outcome {
        Outcome::Success(assignment) => {
            println!("Solution Found!");
            for (job, (_, room)) in jobs.iter().zip(assignment.iter()) {
                println!("{job} assigned to Room: {room}");
            }
        }
        Outcome::Failure(reason) => {
            println!("No Solution Found!");
            println!("{reason}");
        }
    }
}
