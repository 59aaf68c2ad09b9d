//! Minimal stderr backend for the `log` facade

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Debug | Level::Trace => {
                eprintln!("tally-sort [{}] {}", record.target(), record.args())
            }
            level => eprintln!("tally-sort: {}: {}", level, record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger; `debug` lowers the threshold to `Debug`.
/// Calling it twice keeps the first logger.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
