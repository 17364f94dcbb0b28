/*
 * This module defines the MainWindowUiState struct, the transient UI state of
 * the main view: which window it belongs to, the alert currently shown, whether
 * the history list is expanded, and the generation counter that keys each
 * alert to its scheduled expiry. None of it is persisted.
 */
use crate::platform_layer::{Alert, WindowId};

use super::ui_constants;

/*
 * Holds UI-specific state for the main view, separate from the persisted
 * history owned by `MyAppLogic`.
 *
 * Every alert that is set or cleared bumps `alert_generation`. An expiry only
 * clears the alert if it carries the current generation, so a timer scheduled
 * for an older alert can never remove a newer one.
 */
#[derive(Debug)]
pub struct MainWindowUiState {
    pub window_id: Option<WindowId>,
    pub alert: Option<Alert>,
    pub history_visible: bool,
    pub alert_generation: u64,
}

impl MainWindowUiState {
    pub fn new() -> Self {
        MainWindowUiState {
            window_id: None,
            alert: None,
            history_visible: false,
            alert_generation: 0,
        }
    }

    /* Replaces the current alert and returns the generation its expiry must carry. */
    pub fn set_alert(&mut self, alert: Alert) -> u64 {
        self.alert_generation += 1;
        log::debug!(
            "MainWindowUiState: Alert generation {} set: {:?}",
            self.alert_generation,
            alert.text
        );
        self.alert = Some(alert);
        self.alert_generation
    }

    /* Clears the alert now and invalidates any expiry still in flight. */
    pub fn clear_alert(&mut self) {
        self.alert_generation += 1;
        self.alert = None;
    }

    /*
     * Applies an expiry for `generation`. Returns true if it cleared the
     * alert; stale or redundant expiries are ignored.
     */
    pub fn expire_alert(&mut self, generation: u64) -> bool {
        if generation != self.alert_generation || self.alert.is_none() {
            log::trace!(
                "MainWindowUiState: Ignoring expiry for generation {generation} (current {}).",
                self.alert_generation
            );
            return false;
        }
        self.alert = None;
        true
    }

    pub fn toggle_history_visibility(&mut self) -> bool {
        self.history_visible = !self.history_visible;
        self.history_visible
    }

    pub fn compose_window_title(history_len: usize) -> String {
        match history_len {
            0 => format!("{} - [No names created]", ui_constants::APP_TITLE),
            1 => format!("{} - [1 name]", ui_constants::APP_TITLE),
            n => format!("{} - [{n} names]", ui_constants::APP_TITLE),
        }
    }
}

impl Default for MainWindowUiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform_layer::AlertKind;

    fn alert(text: &str) -> Alert {
        Alert {
            text: text.to_string(),
            subtext: None,
            kind: AlertKind::Success,
        }
    }

    #[test]
    fn test_main_window_ui_state_new() {
        crate::initialize_logging();

        let ui_state = MainWindowUiState::new();

        assert!(ui_state.window_id.is_none());
        assert!(ui_state.alert.is_none());
        assert!(!ui_state.history_visible);
        assert_eq!(ui_state.alert_generation, 0);
    }

    #[test]
    fn test_expire_alert_clears_current_generation() {
        crate::initialize_logging();
        let mut ui_state = MainWindowUiState::new();

        let generation = ui_state.set_alert(alert("first"));

        assert!(ui_state.expire_alert(generation));
        assert!(ui_state.alert.is_none());
        // A second expiry for the same generation is a no-op.
        assert!(!ui_state.expire_alert(generation));
    }

    #[test]
    fn test_stale_expiry_does_not_clear_newer_alert() {
        crate::initialize_logging();
        let mut ui_state = MainWindowUiState::new();

        let first = ui_state.set_alert(alert("first"));
        let second = ui_state.set_alert(alert("second"));

        assert!(second > first);
        assert!(!ui_state.expire_alert(first));
        assert_eq!(ui_state.alert, Some(alert("second")));
        assert!(ui_state.expire_alert(second));
    }

    #[test]
    fn test_clear_alert_invalidates_pending_expiry() {
        crate::initialize_logging();
        let mut ui_state = MainWindowUiState::new();
        let generation = ui_state.set_alert(alert("first"));

        ui_state.clear_alert();

        assert!(ui_state.alert.is_none());
        assert!(!ui_state.expire_alert(generation));
    }

    #[test]
    fn test_toggle_history_visibility_flips() {
        let mut ui_state = MainWindowUiState::new();
        assert!(ui_state.toggle_history_visibility());
        assert!(!ui_state.toggle_history_visibility());
    }

    #[test]
    fn test_compose_window_title() {
        assert_eq!(
            MainWindowUiState::compose_window_title(0),
            "OG Folder Namer - [No names created]"
        );
        assert_eq!(
            MainWindowUiState::compose_window_title(1),
            "OG Folder Namer - [1 name]"
        );
        assert_eq!(
            MainWindowUiState::compose_window_title(7),
            "OG Folder Namer - [7 names]"
        );
    }
}
