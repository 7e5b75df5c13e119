use log::{Level, LevelFilter, Log, Metadata, Record};

/// Routes `log` records to the browser console, tagged with the record target
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. Later calls keep the first logger.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    fn format(record: &Record) -> String {
        format!("[{}] {}", record.target(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format(record);
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}
