// src/main.rs

mod app_logic;
mod core;
mod platform_layer;
mod ui_description_layer;

use crate::app_logic::MyAppLogic;
use crate::core::{
    AppSettings, ClipboardOperations, ConfigManagerOperations, CoreClipboard, CoreConfigManager,
    CoreHistoryStore, HistoryStoreOperations, history_store, path_utils,
};
use crate::platform_layer::{PlatformEventHandler, PlatformInterface, PlatformResult};

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::Path;
use std::sync::{Arc, Mutex, Once};

pub const APP_NAME: &str = "OGFolderNamer";

static LOGGING_INIT: Once = Once::new();

/*
 * Sets up the global logger once per process. Tests call this freely; only the
 * first call takes effect. Log output goes to stderr so it does not interleave
 * with the console view on stdout.
 */
pub fn initialize_logging() {
    initialize_logging_with_level(LevelFilter::Debug);
}

pub fn initialize_logging_with_level(level: LevelFilter) {
    LOGGING_INIT.call_once(|| {
        let mut config_builder = ConfigBuilder::new();
        if config_builder.set_time_offset_to_local().is_err() {
            eprintln!("Warning: Could not determine local time offset, logging in UTC.");
        }
        let config = config_builder
            .set_thread_level(LevelFilter::Trace)
            .set_target_level(LevelFilter::Off)
            .build();

        if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
            eprintln!("Failed to initialize logger: {e}");
        }
    });
}

/*
 * Returns `None` when an existing settings file could not be read. The caller
 * then runs on defaults and must leave the file untouched.
 */
fn load_settings(config_manager: &dyn ConfigManagerOperations) -> Option<AppSettings> {
    match config_manager.load_settings(APP_NAME) {
        Ok(settings) => Some(settings),
        Err(e) => {
            eprintln!("Could not load settings, using defaults: {e}");
            None
        }
    }
}

/* Writes loaded settings back so a missing file is created with every key. */
fn persist_loaded_settings(
    config_manager: &dyn ConfigManagerOperations,
    loaded: Option<&AppSettings>,
) {
    let Some(settings) = loaded else {
        log::warn!("Main: Keeping the unreadable settings file as is.");
        return;
    };
    if let Err(e) = config_manager.save_settings(APP_NAME, settings) {
        log::warn!("Main: Could not save settings: {e}");
    }
}

fn create_history_store(settings: &AppSettings) -> CoreHistoryStore {
    match CoreHistoryStore::for_app(APP_NAME, &settings.history_slot) {
        Ok(store) => store,
        Err(e) => {
            log::warn!("Main: No config directory ({e}), storing history in the working directory.");
            CoreHistoryStore::at_path(path_utils::slot_file_path(
                Path::new("."),
                &settings.history_slot,
                history_store::DEFAULT_HISTORY_SLOT,
            ))
        }
    }
}

fn main() -> PlatformResult<()> {
    let config_manager = CoreConfigManager::new();
    let loaded_settings = load_settings(&config_manager);
    let settings = loaded_settings.clone().unwrap_or_default();
    initialize_logging_with_level(settings.log_level_filter());
    log::info!("Main: {APP_NAME} starting with settings {settings:?}.");
    persist_loaded_settings(&config_manager, loaded_settings.as_ref());

    let history_store: Arc<dyn HistoryStoreOperations> = Arc::new(create_history_store(&settings));
    let clipboard: Arc<dyn ClipboardOperations> = Arc::new(CoreClipboard::new());

    let my_app_logic = MyAppLogic::new(settings, history_store, clipboard);
    let event_handler: Arc<Mutex<dyn PlatformEventHandler>> = Arc::new(Mutex::new(my_app_logic));

    let mut platform_interface = PlatformInterface::new();
    let main_window_id = platform_interface.create_main_window();
    let initial_commands = ui_description_layer::build_main_window_static_layout(main_window_id);

    let run_result = platform_interface.run(event_handler, main_window_id, initial_commands);
    log::info!("Main: {APP_NAME} exited.");
    run_result
}
