//! Logger utility for application-wide logging
//!
//! A `log::Log` implementation that mirrors every record to a log file
//! and to stderr, keeping stdout free for conversion output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File and console logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<File>,
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    /// * `level` - Most verbose level to record
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(file),
            level,
        })
    }

    /// Appends a line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut file = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        writeln!(file, "{}", message)?;
        file.flush()
    }

    /// Install a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_writes_enabled_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coordkit.log");
        let path_str = path.to_str().unwrap();
        let logger = Logger::new(path_str, LevelFilter::Info).unwrap();

        logger.log(&Record::builder()
            .level(Level::Info)
            .args(format_args!("converted {} inputs", 3))
            .build());
        logger.log(&Record::builder()
            .level(Level::Debug)
            .args(format_args!("hidden"))
            .build());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[INFO] converted 3 inputs\n");
    }
}
