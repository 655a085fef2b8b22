use lazy_static::lazy_static;
use std::sync::Mutex;
use std::{fs::File, io::prelude::*};

/// The name of the log file, created in the working directory when logging
/// is enabled.
pub const LOG_FILE_NAME: &str = "conversion.log";

lazy_static! {
    pub static ref LOGGER: Mutex<Logger> = Mutex::new(Logger::new());
}

pub fn set_enabled(enabled: bool) {
    LOGGER.lock().unwrap().set_enabled(enabled);
}

pub fn log<M: AsRef<str>>(message: M, console: bool) {
    LOGGER.lock().unwrap().log(message.as_ref(), console);
}

pub fn log_inline<M: AsRef<str>>(message: M, console: bool) {
    LOGGER.lock().unwrap().log_inline(message.as_ref(), console);
}

pub fn section(title: &str, console: bool) {
    log(format!("{:-^1$}", title, 60), console);
}

pub fn subsection(title: &str, console: bool) {
    log(format!("[{title}]"), console);
}

#[allow(unused)]
pub struct Logger {
    pub enabled: bool,
    file: Option<File>,
}

impl Logger {
    pub fn new() -> Logger {
        Self {
            enabled: false,
            file: None,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if enabled && self.file.is_none() {
            self.file = match File::create(LOG_FILE_NAME) {
                Err(e) => {
                    eprintln!("failed to open log file {LOG_FILE_NAME}: {e}");
                    None
                }
                Ok(f) => Some(f),
            };
        }
    }

    pub fn log(&mut self, message: &str, console: bool) {
        self.log_inline(&format!("{message}\n"), console);
    }

    pub fn log_inline(&mut self, message: &str, console: bool) {
        if console {
            print!("{message}");
        }

        #[cfg(feature = "logging")]
        {
            if !self.enabled {
                return;
            }

            if let Some(file) = &mut self.file {
                _ = write!(file, "{message}");
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
