/*
 * Locates the per-user directory where the application keeps its persisted
 * slots (generated-name history, settings) and maps slot names to file paths
 * inside it.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const SLOT_FILE_EXTENSION: &str = "json";

/*
 * Retrieves the application's local (non-roaming) configuration directory,
 * creating it if necessary. No organization qualifier is used, so the
 * directory sits directly under the platform's local config root.
 *
 * Returns `None` if the platform offers no home directory or the directory
 * cannot be created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Resolving local config dir for '{app_name}'");
    ProjectDirs::from("", "", app_name).and_then(|proj_dirs| {
        let config_path = proj_dirs.config_local_dir();
        if !config_path.exists() {
            if let Err(e) = fs::create_dir_all(config_path) {
                log::error!("PathUtils: Failed to create config directory {config_path:?}: {e}");
                return None;
            }
            log::debug!("PathUtils: Created config directory {config_path:?}");
        }
        Some(config_path.to_path_buf())
    })
}

/*
 * Maps a slot name such as `folder-names` to `<dir>/folder-names.json`.
 * Characters outside `[A-Za-z0-9_-]` are dropped so a slot name can never
 * escape `dir`; an empty result falls back to `default_slot`.
 */
pub fn slot_file_path(dir: &Path, slot_name: &str, default_slot: &str) -> PathBuf {
    let sanitized: String = slot_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    let stem = if sanitized.is_empty() {
        log::warn!("PathUtils: Slot name '{slot_name}' is unusable, using '{default_slot}'.");
        default_slot
    } else {
        sanitized.as_str()
    };
    dir.join(format!("{stem}.{SLOT_FILE_EXTENSION}"))
}
