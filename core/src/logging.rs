//! Session transcript logger
//!
//! An explicitly constructed, cloneable logging handle. Messages are printed
//! to the console as given (styling included) and mirrored, stripped of ANSI
//! sequences, to an append-only session log file. The handle is opened by the
//! entry point and must be closed on every exit path; `close` appends a
//! closing timestamp and releases the file.

use crate::error::Result;
use chrono::{Local, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Severity level for transcript messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Configuration for the session logger
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to mirror messages to a session log file
    pub log_to_file: bool,

    /// Directory for session log files
    pub log_dir: PathBuf,

    /// Session identifier used in the file name; defaults to a timestamp
    pub session_id: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_to_file: true,
            log_dir: PathBuf::from("logs"),
            session_id: None,
        }
    }
}

struct Inner {
    file: Option<File>,
    path: Option<PathBuf>,
}

/// Cloneable handle to the session transcript
#[derive(Clone)]
pub struct SessionLogger {
    inner: Arc<Mutex<Inner>>,
}

impl SessionLogger {
    /// Open a logger for a new session
    pub fn open(config: &LogConfig) -> Result<Self> {
        if !config.log_to_file {
            return Ok(Self::disabled());
        }

        fs::create_dir_all(&config.log_dir)?;
        let session_id = config
            .session_id
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%dT%H-%M-%S").to_string());
        let path = config.log_dir.join(format!("wisp-{}.log", session_id));

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "=== wisp session: {} ===", session_id)?;
        writeln!(file, "Started at: {}", Utc::now().to_rfc3339())?;
        writeln!(file)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                file: Some(file),
                path: Some(path),
            })),
        })
    }

    /// A logger that prints to the console only
    pub fn disabled() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                file: None,
                path: None,
            })),
        }
    }

    /// Path of the session log file, if file mirroring is active
    pub fn file_path(&self) -> Option<PathBuf> {
        self.inner.lock().ok().and_then(|inner| inner.path.clone())
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log a leveled message
    pub fn log(&self, level: LogLevel, message: &str) {
        println!("{}", message);
        self.append(level, message);
    }

    /// Log a leveled message with an attached structured value
    pub fn log_value(&self, level: LogLevel, message: &str, value: &serde_json::Value) {
        let line = format!("{} {}", message, value);
        println!("{}", line);
        self.append(level, &line);
    }

    fn append(&self, level: LogLevel, message: &str) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if let Some(file) = inner.file.as_mut() {
            let clean = console::strip_ansi_codes(message);
            if let Err(e) = writeln!(
                file,
                "{} - [{}] {}",
                Utc::now().to_rfc3339(),
                level.label(),
                clean
            ) {
                tracing::warn!("session log write failed: {}", e);
            }
        }
    }

    /// Append the closing timestamp and release the file handle
    ///
    /// Idempotent: later calls (and later writes through other clones of the
    /// handle) are console-only no-ops.
    pub fn close(&self) -> Result<()> {
        let Ok(mut inner) = self.inner.lock() else {
            return Ok(());
        };
        if let Some(mut file) = inner.file.take() {
            writeln!(file, "\nSession ended at: {}", Utc::now().to_rfc3339())?;
            file.flush()?;
        }
        Ok(())
    }
}
