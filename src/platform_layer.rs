pub mod app;
pub(crate) mod command_executor;
pub mod error;
pub(crate) mod form_input;
pub mod types;
pub(crate) mod window_common;

pub use app::PlatformInterface;
pub use error::Result as PlatformResult;
pub use types::{
    Alert, AlertKind, AppEvent, HistoryItemDescriptor, PlatformCommand, PlatformEventHandler,
    WindowId,
};
