/*
 * Persists the generated-name history in a single named slot. The slot is a
 * JSON file holding an array of `{ "value", "date" }` objects, rewritten in
 * full on every save (last write wins; a single writer is assumed).
 *
 * Access goes through `HistoryStoreOperations` so the session logic can be
 * tested against an in-memory store. `CoreHistoryStore` is the file-backed
 * implementation, normally rooted in the per-user local config directory.
 */
use super::history::{HistoryEntry, HistoryList};
use super::path_utils;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

pub const DEFAULT_HISTORY_SLOT: &str = "folder-names";

#[derive(Debug)]
pub enum HistoryStoreError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoConfigDirectory,
}

impl From<io::Error> for HistoryStoreError {
    fn from(err: io::Error) -> Self {
        HistoryStoreError::Io(err)
    }
}

impl From<serde_json::Error> for HistoryStoreError {
    fn from(err: serde_json::Error) -> Self {
        HistoryStoreError::Serde(err)
    }
}

impl std::fmt::Display for HistoryStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryStoreError::Io(e) => write!(f, "History I/O error: {e}"),
            HistoryStoreError::Serde(e) => write!(f, "History data is unreadable: {e}"),
            HistoryStoreError::NoConfigDirectory => {
                write!(f, "Could not determine a directory for the history slot")
            }
        }
    }
}

impl std::error::Error for HistoryStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryStoreError::Io(e) => Some(e),
            HistoryStoreError::Serde(e) => Some(e),
            HistoryStoreError::NoConfigDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HistoryStoreError>;

pub trait HistoryStoreOperations: Send + Sync {
    /* Returns the persisted list, or an empty list if nothing was ever saved. */
    fn load_history(&self) -> Result<HistoryList>;
    /* Overwrites the slot with `history`. */
    fn save_history(&self, history: &[HistoryEntry]) -> Result<()>;
}

pub struct CoreHistoryStore {
    file_path: PathBuf,
}

impl CoreHistoryStore {
    /*
     * Creates a store for `slot_name` inside the application's local config
     * directory, as resolved by `path_utils`.
     */
    pub fn for_app(app_name: &str, slot_name: &str) -> Result<Self> {
        let dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(HistoryStoreError::NoConfigDirectory)?;
        Ok(Self::at_path(path_utils::slot_file_path(
            &dir,
            slot_name,
            DEFAULT_HISTORY_SLOT,
        )))
    }

    pub fn at_path(file_path: PathBuf) -> Self {
        log::debug!("CoreHistoryStore: Using slot file {file_path:?}");
        CoreHistoryStore { file_path }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl HistoryStoreOperations for CoreHistoryStore {
    /*
     * A missing or blank file, or a stored JSON `null`, all mean "nothing saved
     * yet" and yield an empty list. Anything else that fails to parse is
     * reported as `HistoryStoreError::Serde`.
     */
    fn load_history(&self) -> Result<HistoryList> {
        log::trace!("CoreHistoryStore: Loading history from {:?}", self.file_path);
        if !self.file_path.exists() {
            log::debug!(
                "CoreHistoryStore: Slot file {:?} does not exist yet.",
                self.file_path
            );
            return Ok(HistoryList::new());
        }

        let mut contents = String::new();
        BufReader::new(File::open(&self.file_path)?).read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            log::debug!("CoreHistoryStore: Slot file {:?} is empty.", self.file_path);
            return Ok(HistoryList::new());
        }

        let history: Option<HistoryList> = serde_json::from_str(&contents)?;
        let history = history.unwrap_or_default();
        log::debug!(
            "CoreHistoryStore: Loaded {} entries from {:?}.",
            history.len(),
            self.file_path
        );
        Ok(history)
    }

    fn save_history(&self, history: &[HistoryEntry]) -> Result<()> {
        log::trace!(
            "CoreHistoryStore: Saving {} entries to {:?}",
            history.len(),
            self.file_path
        );
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(&self.file_path)?);
        serde_json::to_writer_pretty(writer, history)?;
        log::debug!(
            "CoreHistoryStore: Saved {} entries to {:?}.",
            history.len(),
            self.file_path
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(value: &str, date: &str) -> HistoryEntry {
        HistoryEntry {
            value: value.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_load_history_returns_empty_when_slot_missing() {
        let dir = tempdir().unwrap();
        let store = CoreHistoryStore::at_path(dir.path().join("folder-names.json"));

        let history = store.load_history().unwrap();

        assert!(history.is_empty());
    }

    #[test]
    fn test_save_then_load_returns_same_list() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = CoreHistoryStore::at_path(dir.path().join("folder-names.json"));
        let history = vec![
            entry("@3@a@b@Shoes\nRunning@10\" \"wide\"@1kg@Größe@", "2024-05-03 11:00:00"),
            entry("@2@b@c@d@e@f@", "2024-05-02 10:00:00"),
            entry("@1@a@c@d@e@f@", "2024-05-01 09:00:00"),
        ];

        // Act
        store.save_history(&history).unwrap();
        let loaded = store.load_history().unwrap();

        // Assert
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_save_history_survives_new_store_instance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("folder-names.json");
        CoreHistoryStore::at_path(path.clone())
            .save_history(&[entry("@x@", "2024-01-01 00:00:00")])
            .unwrap();

        let reopened = CoreHistoryStore::at_path(path);

        assert_eq!(
            reopened.load_history().unwrap(),
            vec![entry("@x@", "2024-01-01 00:00:00")]
        );
    }

    #[test]
    fn test_save_empty_list_clears_slot() {
        let dir = tempdir().unwrap();
        let store = CoreHistoryStore::at_path(dir.path().join("folder-names.json"));
        store
            .save_history(&[entry("@x@", "2024-01-01 00:00:00")])
            .unwrap();

        store.save_history(&[]).unwrap();

        assert!(store.load_history().unwrap().is_empty());
        let raw = fs::read_to_string(store.file_path()).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_load_history_reports_corrupt_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folder-names.json");
        fs::write(&path, "{ not json").unwrap();
        let store = CoreHistoryStore::at_path(path);

        match store.load_history() {
            Err(HistoryStoreError::Serde(_)) => {}
            other => panic!("Expected a Serde error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_history_treats_blank_file_and_null_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folder-names.json");
        let store = CoreHistoryStore::at_path(path.clone());

        fs::write(&path, "  \n").unwrap();
        assert!(store.load_history().unwrap().is_empty());

        fs::write(&path, "null").unwrap();
        assert!(store.load_history().unwrap().is_empty());
    }

    #[test]
    fn test_persisted_json_uses_value_and_date_keys() {
        let dir = tempdir().unwrap();
        let store = CoreHistoryStore::at_path(dir.path().join("folder-names.json"));
        store
            .save_history(&[entry("@a@", "2024-01-01 00:00:00")])
            .unwrap();

        let raw = fs::read_to_string(store.file_path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!([{"value": "@a@", "date": "2024-01-01 00:00:00"}])
        );
    }
}
