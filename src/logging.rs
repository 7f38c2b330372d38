use std::env;

use log::{self, Level, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the board renderer
            if record.level() <= Level::Warn {
                eprintln!("{} - {}", record.level(), record.args());
            } else {
                eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Parse a level filter, falling back to `default` when missing or invalid.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment
/// variable. Defaults to `default` if the variable is not set or invalid.
/// Later calls keep the first logger.
pub fn init_logging(default: LevelFilter) {
    let value = env::var(LOG_ENV).ok();
    let level = level_from(value.as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_on_garbage() {
        assert_eq!(level_from(Some("debug"), LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(level_from(Some("OFF"), LevelFilter::Warn), LevelFilter::Off);
        assert_eq!(level_from(Some("loud"), LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(level_from(None, LevelFilter::Info), LevelFilter::Info);
    }
}
