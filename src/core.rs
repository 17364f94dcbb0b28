/*
 * This module consolidates the core, platform-agnostic logic of the application:
 * the form field rules and validation, folder-name construction, the history
 * model and its persisted store, application settings, and clipboard access.
 * Storage, settings and clipboard sit behind `HistoryStoreOperations`,
 * `ConfigManagerOperations` and `ClipboardOperations` so the application logic
 * can be tested with mocks.
 */
pub mod clipboard;
pub mod config;
pub mod folder_name;
pub mod form_fields;
pub mod history;
pub mod history_store;
pub mod path_utils;

pub use clipboard::{ClipboardError, ClipboardOperations, CoreClipboard};

pub use config::{AppSettings, ConfigManagerOperations, CoreConfigManager};

pub use folder_name::build_folder_name;

pub use form_fields::{
    FORM_FIELDS, FieldDescriptor, FieldError, FieldKey, FieldSet, validate_fields,
};

pub use history::{HistoryEntry, HistoryList, prepend_entry};

pub use history_store::{CoreHistoryStore, HistoryStoreError, HistoryStoreOperations};
