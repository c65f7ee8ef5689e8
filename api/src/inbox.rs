//! Append-only JSON Lines sink for received contact messages.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

use crate::contact::{ContactError, ContactMessage};

/// Environment variable naming the inbox file.
pub const INBOX_ENV: &str = "AFRIKIA_CONTACT_INBOX";
pub const DEFAULT_INBOX: &str = "contact-inbox.jsonl";

#[derive(Debug, Serialize)]
struct InboxRecord<'a> {
    id: String,
    received_at: String,
    #[serde(flatten)]
    message: &'a ContactMessage,
}

pub fn inbox_path() -> PathBuf {
    std::env::var_os(INBOX_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INBOX))
}

/// Append `message` as one JSON line to `path`; returns the generated record id.
pub fn append_to(path: &Path, message: &ContactMessage) -> Result<String, ContactError> {
    let received_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| ContactError::Inbox(err.to_string()))?;
    let record = InboxRecord {
        id: Uuid::new_v4().to_string(),
        received_at,
        message,
    };
    let line = serde_json::to_string(&record).map_err(|err| ContactError::Inbox(err.to_string()))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| ContactError::Inbox(format!("{}: {err}", path.display())))?;
    writeln!(file, "{line}").map_err(|err| ContactError::Inbox(err.to_string()))?;

    Ok(record.id)
}

/// [`append_to`] on the blocking thread pool, for async callers.
pub async fn store(path: PathBuf, message: ContactMessage) -> Result<String, ContactError> {
    tokio::task::spawn_blocking(move || append_to(&path, &message))
        .await
        .map_err(|err| ContactError::Inbox(format!("inbox writer stopped: {err}")))?
}
