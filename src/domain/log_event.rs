//! Request log event model and the injected logger handle.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// A single durable log entry.
///
/// Serialized as one JSON object per line in the log file:
/// `{"timestamp":"...","level":"info","message":"...","data":{...},"logID":"..."}`.
///
/// # Design
///
/// - Created in middleware and handlers with request metadata
/// - Sent to a bounded channel (non-blocking)
/// - Drained by [`crate::domain::log_worker::run_log_worker`]
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub data: Value,
    #[serde(rename = "logID")]
    pub log_id: Uuid,
}

/// Handle for emitting log entries from the request path.
///
/// Holds the channel sender and a process-stable identifier stamped into
/// every entry. The handle is injected through [`crate::state::AppState`]
/// rather than living in a process global, so its lifecycle is bound to
/// server start and shutdown.
///
/// The only contract toward callers: emitting never blocks and never fails
/// the request. A full queue or a stopped worker drops the entry.
#[derive(Debug, Clone)]
pub struct RequestLogger {
    tx: mpsc::Sender<LogEntry>,
    log_id: Uuid,
}

impl RequestLogger {
    /// Creates a logger handle and the receiving end for the worker.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<LogEntry>) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            Self {
                tx,
                log_id: Uuid::new_v4(),
            },
            rx,
        )
    }

    /// The process-stable identifier stamped into every entry.
    pub fn log_id(&self) -> Uuid {
        self.log_id
    }

    pub fn info(&self, message: impl Into<String>, data: Value) {
        self.log(LogLevel::Info, message, data);
    }

    pub fn warn(&self, message: impl Into<String>, data: Value) {
        self.log(LogLevel::Warn, message, data);
    }

    pub fn error(&self, message: impl Into<String>, data: Value) {
        self.log(LogLevel::Error, message, data);
    }

    fn log(&self, level: LogLevel, message: impl Into<String>, data: Value) {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            data,
            log_id: self.log_id,
        };

        let _ = self.tx.try_send(entry);
    }
}
