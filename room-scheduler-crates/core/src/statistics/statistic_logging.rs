//! Writes statistics to stdout as `{prefix} {name}={value}` lines once logging has been enabled.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistic lines are rendered.
#[derive(Debug, Clone, Copy)]
struct StatisticFormat {
    prefix: &'static str,
    casing: Option<Case>,
}

impl StatisticFormat {
    fn line(&self, name: impl Display, value: impl Display) -> String {
        let name = name.to_string();
        let name = match self.casing {
            Some(casing) => name.to_case(casing),
            None => name,
        };

        format!("{} {name}={value}", self.prefix)
    }
}

static STATISTIC_FORMAT: OnceLock<StatisticFormat> = OnceLock::new();

/// Enables the logging of statistics.
///
/// Every statistic is written to stdout on its own line, preceded by `prefix`; when `casing` is
/// provided the name of the statistic is converted to it. Only the first call has an effect.
pub fn configure_statistic_logging(prefix: &'static str, casing: Option<Case>) {
    let _ = STATISTIC_FORMAT.get_or_init(|| StatisticFormat { prefix, casing });
}

/// Logs the statistic `name` with `value`, if statistic logging has been enabled.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(format) = STATISTIC_FORMAT.get() {
        let line = format.line(name, value);
        if let Err(e) = writeln!(stdout().lock(), "{line}") {
            debug!("Could not write statistic: {e}")
        }
    }
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_FORMAT.get().is_some()
}
