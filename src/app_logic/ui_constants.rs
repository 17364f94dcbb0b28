/*
 * Shared display strings used by the `ui_description_layer` for the static
 * view and by the `app_logic` (Presenter) for dynamic updates.
 */

pub const APP_TITLE: &str = "OG Folder Namer";

// Heading of the generated-names list.
pub const HISTORY_LIST_TITLE: &str = "Generated Names";

// Shown by the platform in place of an empty list.
pub const EMPTY_HISTORY_TEXT: &str = "No names created";

pub const SUBMIT_SUCCESS_SUBTEXT: &str = "Added to Generated Names";

pub const CLIPBOARD_FAILURE_TEXT: &str = "Could not copy to clipboard";
