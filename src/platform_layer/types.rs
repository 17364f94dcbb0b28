/*
 * This module defines the types used for communication between the
 * application logic and the platform layer: window identifiers, view-model
 * descriptors for history items and alerts, platform-agnostic events
 * (`AppEvent`), commands for the platform layer (`PlatformCommand`), and the
 * `PlatformEventHandler` trait that the application logic implements.
 */

use crate::core::FieldSet;
use std::time::Duration;

// An opaque identifier for the main view, managed by the platform layer.
//
// The application logic uses this ID when sending commands and receiving
// events, without knowing how the platform presents the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/*
 * A transient notification shown above the history list. The application
 * logic decides when it appears and when it is cleared; the platform layer
 * only renders it.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub subtext: Option<String>,
    pub kind: AlertKind,
}

// Describes one row of the generated-names list. `index` is the position the
// user refers to when asking to copy an item (0 is the newest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItemDescriptor {
    pub index: usize,
    pub value: String,
    pub date: String,
}

// --- Events from Platform to App Logic ---

#[derive(Debug)]
pub enum AppEvent {
    // Signals that the main view is ready and its static content is shown.
    MainWindowUISetupComplete {
        window_id: WindowId,
    },
    WindowCloseRequestedByUser {
        window_id: WindowId,
    },
    // A completed form whose fields already passed validation.
    FormSubmitted {
        window_id: WindowId,
        fields: FieldSet,
    },
    HistoryItemActivated {
        window_id: WindowId,
        index: usize,
    },
    ClearHistoryRequested {
        window_id: WindowId,
    },
    ToggleHistoryRequested {
        window_id: WindowId,
    },
    // Fired by a timer scheduled through `PlatformCommand::ScheduleAlertExpiry`.
    AlertExpired {
        window_id: WindowId,
        generation: u64,
    },
}

// --- Commands from App Logic to Platform ---

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCommand {
    SetWindowTitle {
        window_id: WindowId,
        title: String,
    },
    ShowHelp {
        window_id: WindowId,
        title: String,
        lines: Vec<String>,
    },
    RenderHistory {
        window_id: WindowId,
        title: String,
        items: Vec<HistoryItemDescriptor>,
        visible: bool,
    },
    // `None` removes any alert currently shown.
    ShowAlert {
        window_id: WindowId,
        alert: Option<Alert>,
    },
    // Asks the platform to post `AppEvent::AlertExpired { generation }` once
    // `delay` has elapsed. Scheduled expiries are never cancelled; the logic
    // ignores generations that are no longer current.
    ScheduleAlertExpiry {
        window_id: WindowId,
        generation: u64,
        delay: Duration,
    },
    QuitApplication,
}

// --- Trait for App Logic to Handle Events ---

pub trait PlatformEventHandler: Send + 'static {
    // Handles one event and enqueues `PlatformCommand`s for the platform layer.
    fn handle_event(&mut self, event: AppEvent);

    // Called when the platform is about to leave its main loop.
    fn on_quit(&mut self) {}

    // Dequeues one pending command; called by the platform run loop until `None`.
    fn try_dequeue_command(&mut self) -> Option<PlatformCommand>;
}
