//! Background worker draining the request log channel.

use std::path::PathBuf;

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use crate::domain::log_event::{LogEntry, LogLevel};

/// Drains log entries, appending one JSON line per entry to `log_file` and
/// mirroring every entry to the console stream.
///
/// The worker exits when all sender handles are dropped. File I/O failures
/// are reported through `tracing` and otherwise swallowed; the request path
/// never observes them.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEntry>, log_file: PathBuf) {
    let mut file = open_log_file(&log_file).await;

    while let Some(entry) = rx.recv().await {
        mirror_to_console(&entry);

        let Ok(mut line) = serde_json::to_string(&entry) else {
            continue;
        };
        line.push('\n');

        if let Some(f) = file.as_mut() {
            if let Err(e) = f.write_all(line.as_bytes()).await {
                tracing::warn!(error = %e, "Failed to append log entry");
            }
        }
    }
}

/// Opens the log file in append mode, creating parent directories as needed.
async fn open_log_file(log_file: &PathBuf) -> Option<File> {
    if let Some(dir) = log_file.parent() {
        if !dir.as_os_str().is_empty() {
            if let Err(e) = tokio::fs::create_dir_all(dir).await {
                tracing::warn!(error = %e, path = %dir.display(), "Failed to create log directory");
            }
        }
    }

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .await
    {
        Ok(f) => Some(f),
        Err(e) => {
            tracing::warn!(error = %e, path = %log_file.display(), "Failed to open log file, file logging disabled");
            None
        }
    }
}

fn mirror_to_console(entry: &LogEntry) {
    match entry.level {
        LogLevel::Info => {
            tracing::info!(target: "request_log", data = %entry.data, "{}", entry.message)
        }
        LogLevel::Warn => {
            tracing::warn!(target: "request_log", data = %entry.data, "{}", entry.message)
        }
        LogLevel::Error => {
            tracing::error!(target: "request_log", data = %entry.data, "{}", entry.message)
        }
    }
}
