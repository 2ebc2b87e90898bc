use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static UNINITIALIZED_REPORTED: AtomicBool = AtomicBool::new(false);

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(message));
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            println!("{}", self.format_line(message));
        }
    }
}

/// Later calls are no-ops, the first configuration wins.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

fn with_logger(f: impl FnOnce(&Logger)) {
    match LOGGER.get() {
        Some(logger) => f(logger),
        None => {
            if !UNINITIALIZED_REPORTED.swap(true, Ordering::Relaxed) {
                eprintln!(
                    "Logger not initialized, call init_logger() first. Messages are dropped."
                );
            }
        }
    }
}

pub fn log(message: &str) {
    with_logger(|logger| logger.log(message));
}

pub fn debug(message: &str) {
    with_logger(|logger| logger.debug(message));
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::debug(&format!($($arg)*))
    };
}
