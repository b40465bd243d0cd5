use std::fmt::Arguments;

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes records to stderr with a local timestamp. The active level lives in
/// `log::max_level`.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_record(Local::now(), record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

pub fn format_record(
    now: DateTime<Local>,
    level: Level,
    target: &str,
    args: &Arguments,
) -> String {
    format!(
        "{} {level:<5} {target}: {args}",
        now.format("%Y-%m-%dT%H:%M:%S%.3f")
    )
}

/// `-v` count to level: none is warnings only, then info, debug, trace.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for_verbosity(verbosity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{format_record, level_for_verbosity};
    use chrono::{Local, TimeZone};
    use log::{Level, LevelFilter};

    #[test]
    fn verbosity_steps_through_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn record_line_has_timestamp_level_and_target() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time");
        let line = format_record(
            now,
            Level::Info,
            "trajectory_rk4::simulation",
            &format_args!("{} samples", 290),
        );
        assert_eq!(
            line,
            "2024-03-09T14:05:07.000 INFO  trajectory_rk4::simulation: 290 samples"
        );
    }
}
