//! Append-only appointment log
//!
//! All writes go through a single writer task, so concurrent submissions
//! never race on the read-modify-write of the JSON array.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::StorageResult;
use crate::forms::AppointmentRequest;

/// One entry in the appointment log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    /// The submitted form, flattened into the record
    #[serde(flatten)]
    pub request: AppointmentRequest,

    /// Millisecond Unix timestamp of submission
    pub id: String,

    /// RFC 3339 UTC submission time
    pub submitted_at: String,
}

impl AppointmentRecord {
    /// Stamp a request with the current time
    #[must_use]
    pub fn new(request: AppointmentRequest) -> Self {
        let now = Utc::now();
        Self {
            request,
            id: now.timestamp_millis().to_string(),
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

enum Command {
    Append(Box<AppointmentRecord>),
    Flush(oneshot::Sender<()>),
}

/// Handle to the appointment log writer
///
/// Cloning is cheap; every clone feeds the same writer task.
///
/// ```rust,no_run
/// use wonderminds_site::storage::{AppointmentLog, AppointmentRecord};
/// use wonderminds_site::forms::AppointmentRequest;
///
/// # async fn example() {
/// let log = AppointmentLog::spawn("data/appointments.json");
/// log.append(AppointmentRecord::new(AppointmentRequest::default()));
/// log.flush().await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AppointmentLog {
    tx: Option<mpsc::UnboundedSender<Command>>,
}

impl AppointmentLog {
    /// Start the writer task for the log at `path`
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::unbounded_channel();

        info!(path = %path.display(), "Appointment log enabled");
        tokio::spawn(run_writer(path, rx));

        Self { tx: Some(tx) }
    }

    /// A log that drops every record
    #[must_use]
    pub const fn disabled() -> Self {
        Self { tx: None }
    }

    /// Whether records are being persisted
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Queue a record for writing
    ///
    /// Never fails the caller. A stopped writer is logged.
    pub fn append(&self, record: AppointmentRecord) {
        let Some(tx) = &self.tx else {
            debug!(id = %record.id, "Appointment log disabled, record dropped");
            return;
        };

        if tx.send(Command::Append(Box::new(record))).is_err() {
            warn!("Appointment log writer has stopped, record dropped");
        }
    }

    /// Wait until every record queued so far has been written
    pub async fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };

        let (done_tx, done_rx) = oneshot::channel();
        if tx.send(Command::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn run_writer(path: PathBuf, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Append(record) => match append_record(&path, &record).await {
                Ok(count) => {
                    debug!(id = %record.id, path = %path.display(), count, "Appointment saved");
                }
                Err(e) => {
                    warn!(id = %record.id, path = %path.display(), error = %e, "Failed to save appointment");
                }
            },
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

/// Append one record to the JSON array at `path`
///
/// Creates parent directories and the file as needed. Existing entries are
/// kept verbatim. Returns the number of records now in the log.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read or written, or does
/// not hold a JSON array
pub async fn append_record(path: &Path, record: &AppointmentRecord) -> StorageResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut records: Vec<Value> = match fs::read(path).await {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
        Ok(bytes) => serde_json::from_slice(&bytes)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    records.push(serde_json::to_value(record)?);
    fs::write(path, serde_json::to_vec_pretty(&records)?).await?;

    Ok(records.len())
}
