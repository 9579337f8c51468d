use std::io::Write;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Writes timestamped lines to stderr so stdout stays free for the board.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        write_console_line(&mut std::io::stderr().lock(), &self.format(message));
    }
}

/// Writes and flushes one line to a console stream. Write errors are
/// ignored: a closed console has nowhere to report them.
pub fn write_console_line<W: Write>(out: &mut W, line: &str) {
    if writeln!(out, "{}", line).is_ok() {
        let _ = out.flush();
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Dropped silently until `init_logger` runs, so library users and tests
/// that never configure logging stay quiet.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
