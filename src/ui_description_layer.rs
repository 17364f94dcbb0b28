/*
 * This module is responsible for defining the static structure of the main
 * view. It generates the `PlatformCommand`s that set the initial title and
 * describe the commands the console accepts, keeping that description out of
 * the platform layer.
 */
use crate::app_logic::ui_constants;
use crate::platform_layer::{PlatformCommand, WindowId};

const COMMAND_HELP_TITLE: &str = "Commands:";

const COMMAND_HELP_LINES: [&str; 6] = [
    "g       generate a folder name (fill in the form)",
    "c <n>   copy history item n to the clipboard",
    "h       show or hide the generated names",
    "x       clear the generated names",
    "?       show this help",
    "q       quit",
];

/*
 * Generates the commands that build the initial static view for the main
 * window. Called once, before the application logic receives
 * `MainWindowUISetupComplete`.
 */
pub fn build_main_window_static_layout(window_id: WindowId) -> Vec<PlatformCommand> {
    log::debug!("ui_description_layer: build_main_window_static_layout called.");

    vec![
        PlatformCommand::SetWindowTitle {
            window_id,
            title: ui_constants::APP_TITLE.to_string(),
        },
        PlatformCommand::ShowHelp {
            window_id,
            title: COMMAND_HELP_TITLE.to_string(),
            lines: COMMAND_HELP_LINES.iter().map(|l| l.to_string()).collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_layout_sets_title_then_help() {
        let window_id = WindowId(1);
        let commands = build_main_window_static_layout(window_id);

        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            PlatformCommand::SetWindowTitle {
                window_id,
                title: "OG Folder Namer".to_string()
            }
        );
        match &commands[1] {
            PlatformCommand::ShowHelp { lines, .. } => {
                assert!(lines.iter().any(|l| l.starts_with("c <n>")));
                assert_eq!(lines.len(), COMMAND_HELP_LINES.len());
            }
            other => panic!("Expected ShowHelp, got {other:?}"),
        }
    }
}
