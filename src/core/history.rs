/*
 * Data types for the generated-name history. A `HistoryEntry` pairs a folder
 * name with the moment it was generated; the history itself is a plain
 * `Vec<HistoryEntry>` kept newest-first. Entries serialize as
 * `{ "value": ..., "date": ... }`, which is also the on-disk shape.
 */
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub value: String,
    pub date: String,
}

impl HistoryEntry {
    /* Creates an entry stamped with the current local time. */
    pub fn new(value: String) -> Self {
        HistoryEntry {
            value,
            date: current_timestamp(),
        }
    }
}

pub type HistoryList = Vec<HistoryEntry>;

/* Inserts `entry` at the front so the list stays ordered by recency. */
pub fn prepend_entry(history: &mut HistoryList, entry: HistoryEntry) {
    history.insert(0, entry);
}

pub fn format_timestamp(moment: OffsetDateTime) -> String {
    moment.format(TIMESTAMP_FORMAT).unwrap_or_else(|e| {
        log::warn!("History: Failed to format timestamp {moment}: {e}");
        moment.to_string()
    })
}

/*
 * Formats "now" in local time. Falls back to UTC when the local offset cannot
 * be determined (e.g. on some multi-threaded Unix processes).
 */
pub fn current_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    let local = match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => {
            log::trace!("History: Local offset unavailable, using UTC.");
            now
        }
    };
    format_timestamp(local)
}
