use crate::app_logic::MainWindowUiState;
use crate::app_logic::ui_constants;
use crate::core::{
    AppSettings, ClipboardOperations, FieldSet, HistoryEntry, HistoryList, HistoryStoreOperations,
    build_folder_name, prepend_entry,
};
use crate::platform_layer::{
    Alert, AlertKind, AppEvent, HistoryItemDescriptor, PlatformCommand, PlatformEventHandler,
    WindowId,
};
use std::collections::VecDeque;
use std::sync::Arc;

/*
 * The folder-name session manager. It owns the generated-name history (kept in
 * sync with the persisted slot on every change) and the transient UI state,
 * turns platform events into operations, and enqueues `PlatformCommand`s that
 * the platform layer drains after each event.
 *
 * Persistence and the clipboard are reached through `HistoryStoreOperations`
 * and `ClipboardOperations`, so the logic runs unchanged against mocks.
 */
pub struct MyAppLogic {
    pub(crate) history: HistoryList,
    pub(crate) ui_state: MainWindowUiState,
    settings: AppSettings,
    history_store: Arc<dyn HistoryStoreOperations>,
    clipboard: Arc<dyn ClipboardOperations>,
    command_queue: VecDeque<PlatformCommand>,
}

impl MyAppLogic {
    pub fn new(
        settings: AppSettings,
        history_store: Arc<dyn HistoryStoreOperations>,
        clipboard: Arc<dyn ClipboardOperations>,
    ) -> Self {
        MyAppLogic {
            history: HistoryList::new(),
            ui_state: MainWindowUiState::new(),
            settings,
            history_store,
            clipboard,
            command_queue: VecDeque::new(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.ui_state.alert.as_ref()
    }

    pub fn is_history_visible(&self) -> bool {
        self.ui_state.history_visible
    }

    fn enqueue_command(&mut self, command: PlatformCommand) {
        self.command_queue.push_back(command);
    }

    /*
     * Loads the persisted history for a freshly shown view. A slot that cannot
     * be read is treated as empty; the failure is logged and the app stays usable.
     * The history list always starts hidden.
     */
    fn on_main_window_ui_setup_complete(&mut self, window_id: WindowId) {
        log::debug!("AppLogic: Main window {window_id:?} setup complete, loading history.");
        self.ui_state.window_id = Some(window_id);
        self.ui_state.history_visible = false;
        self.history = match self.history_store.load_history() {
            Ok(history) => {
                log::info!("AppLogic: Loaded {} generated names.", history.len());
                history
            }
            Err(e) => {
                log::error!("AppLogic: Failed to load history, starting empty: {e}");
                HistoryList::new()
            }
        };
        self.enqueue_history_refresh();
        self.enqueue_alert_refresh();
    }

    /*
     * Builds the folder name for `fields`, copies it to the clipboard, records
     * it at the front of the history, persists the history, and shows an alert
     * naming the copied string. Exactly one history entry is added per call.
     *
     * A clipboard failure does not stop the name from being recorded; the
     * alert reports the failure instead.
     */
    pub fn submit(&mut self, fields: &FieldSet) -> String {
        let folder_name = build_folder_name(fields);
        log::info!("AppLogic: Generated folder name '{folder_name}'.");

        let copy_result = self.clipboard.write_text(&folder_name);

        prepend_entry(&mut self.history, HistoryEntry::new(folder_name.clone()));
        self.persist_history();
        self.enqueue_history_refresh();

        let alert = match copy_result {
            Ok(()) => Alert {
                text: format!("{folder_name} copied!"),
                subtext: Some(ui_constants::SUBMIT_SUCCESS_SUBTEXT.to_string()),
                kind: AlertKind::Success,
            },
            Err(e) => {
                log::warn!("AppLogic: {e}");
                Self::clipboard_failure_alert(&folder_name, &e.to_string())
            }
        };
        self.show_alert(alert);
        folder_name
    }

    /* Copies an existing entry again. The history is not modified. */
    pub fn copy_history_item(&mut self, entry: &HistoryEntry) {
        log::debug!("AppLogic: Copying history item '{}'.", entry.value);
        let alert = match self.clipboard.write_text(&entry.value) {
            Ok(()) => Alert {
                text: format!("{} copied!", entry.value),
                subtext: Some(format!("Generated {}", entry.date)),
                kind: AlertKind::Success,
            },
            Err(e) => {
                log::warn!("AppLogic: {e}");
                Self::clipboard_failure_alert(&entry.value, &e.to_string())
            }
        };
        self.show_alert(alert);
    }

    /* Index 0 is the newest entry. Out-of-range indices are ignored. */
    pub fn copy_history_item_at(&mut self, index: usize) {
        match self.history.get(index).cloned() {
            Some(entry) => self.copy_history_item(&entry),
            None => log::warn!(
                "AppLogic: No history item at index {index} ({} items).",
                self.history.len()
            ),
        }
    }

    /*
     * Empties and persists the history, hides the list, and removes the alert
     * immediately. Any expiry still pending becomes stale. Calling this on an
     * already-empty history leaves the same state.
     */
    pub fn clear_history(&mut self) {
        log::info!("AppLogic: Clearing {} generated names.", self.history.len());
        self.history.clear();
        self.persist_history();
        self.ui_state.history_visible = false;
        self.ui_state.clear_alert();
        self.enqueue_history_refresh();
        self.enqueue_alert_refresh();
    }

    pub fn toggle_history_visibility(&mut self) {
        let visible = self.ui_state.toggle_history_visibility();
        log::debug!("AppLogic: History visibility is now {visible}.");
        self.enqueue_history_refresh();
    }

    fn on_alert_expired(&mut self, generation: u64) {
        if self.ui_state.expire_alert(generation) {
            log::debug!("AppLogic: Alert generation {generation} expired.");
            self.enqueue_alert_refresh();
        }
    }

    fn clipboard_failure_alert(value: &str, reason: &str) -> Alert {
        Alert {
            text: ui_constants::CLIPBOARD_FAILURE_TEXT.to_string(),
            subtext: Some(format!("{value} ({reason})")),
            kind: AlertKind::Error,
        }
    }

    fn persist_history(&self) {
        if let Err(e) = self.history_store.save_history(&self.history) {
            log::error!("AppLogic: Failed to persist history: {e}");
        }
    }

    /* Sets the alert, renders it, and schedules its expiry. */
    fn show_alert(&mut self, alert: Alert) {
        let generation = self.ui_state.set_alert(alert);
        self.enqueue_alert_refresh();
        if let Some(window_id) = self.ui_state.window_id {
            self.enqueue_command(PlatformCommand::ScheduleAlertExpiry {
                window_id,
                generation,
                delay: self.settings.alert_timeout(),
            });
        }
    }

    fn enqueue_alert_refresh(&mut self) {
        let Some(window_id) = self.ui_state.window_id else {
            return;
        };
        let alert = self.ui_state.alert.clone();
        self.enqueue_command(PlatformCommand::ShowAlert { window_id, alert });
    }

    fn enqueue_history_refresh(&mut self) {
        let Some(window_id) = self.ui_state.window_id else {
            return;
        };
        let items = self
            .history
            .iter()
            .enumerate()
            .map(|(index, entry)| HistoryItemDescriptor {
                index,
                value: entry.value.clone(),
                date: entry.date.clone(),
            })
            .collect();
        self.enqueue_command(PlatformCommand::SetWindowTitle {
            window_id,
            title: MainWindowUiState::compose_window_title(self.history.len()),
        });
        self.enqueue_command(PlatformCommand::RenderHistory {
            window_id,
            title: ui_constants::HISTORY_LIST_TITLE.to_string(),
            items,
            visible: self.ui_state.history_visible,
        });
    }

    fn is_main_window(&self, window_id: WindowId) -> bool {
        if self.ui_state.window_id == Some(window_id) {
            true
        } else {
            log::warn!("AppLogic: Ignoring event for unknown window {window_id:?}.");
            false
        }
    }
}

impl PlatformEventHandler for MyAppLogic {
    fn handle_event(&mut self, event: AppEvent) {
        log::trace!("AppLogic: Handling {event:?}");
        match event {
            AppEvent::MainWindowUISetupComplete { window_id } => {
                self.on_main_window_ui_setup_complete(window_id);
            }
            AppEvent::WindowCloseRequestedByUser { window_id } => {
                if self.is_main_window(window_id) {
                    log::debug!("AppLogic: Main window close requested.");
                    self.enqueue_command(PlatformCommand::QuitApplication);
                }
            }
            AppEvent::FormSubmitted { window_id, fields } => {
                if self.is_main_window(window_id) {
                    self.submit(&fields);
                }
            }
            AppEvent::HistoryItemActivated { window_id, index } => {
                if self.is_main_window(window_id) {
                    self.copy_history_item_at(index);
                }
            }
            AppEvent::ClearHistoryRequested { window_id } => {
                if self.is_main_window(window_id) {
                    self.clear_history();
                }
            }
            AppEvent::ToggleHistoryRequested { window_id } => {
                if self.is_main_window(window_id) {
                    self.toggle_history_visibility();
                }
            }
            AppEvent::AlertExpired {
                window_id,
                generation,
            } => {
                if self.is_main_window(window_id) {
                    self.on_alert_expired(generation);
                }
            }
        }
    }

    fn on_quit(&mut self) {
        log::debug!(
            "AppLogic: Quitting with {} generated names.",
            self.history.len()
        );
    }

    fn try_dequeue_command(&mut self) -> Option<PlatformCommand> {
        self.command_queue.pop_front()
    }
}
