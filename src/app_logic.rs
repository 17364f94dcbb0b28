/*
 * This module provides the application logic layer, centered around
 * `MyAppLogic`, the Presenter that manages a folder-naming session, and
 * `MainWindowUiState`, the transient state of the main view.
 * Unit tests for `MyAppLogic` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod main_window_ui_state;
pub mod ui_constants;


pub use handler::MyAppLogic;
pub use main_window_ui_state::MainWindowUiState;
