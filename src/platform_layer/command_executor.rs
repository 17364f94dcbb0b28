/*
 * This module is responsible for executing `PlatformCommand`s against the
 * console view. Rendering commands update `ConsoleWindowData` and print the
 * changed block; `ScheduleAlertExpiry` starts a single-shot timer thread that
 * posts the expiry back into the platform's input channel.
 */

use super::app::PlatformInput;
use super::error::{PlatformError, Result as PlatformResult};
use super::types::{PlatformCommand, WindowId};
use super::window_common::{self, ConsoleWindowData};

use std::io::Write;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandOutcome {
    Continue,
    Quit,
}

fn ensure_window(window: &ConsoleWindowData, window_id: WindowId) -> PlatformResult<()> {
    if window.id == window_id {
        Ok(())
    } else {
        Err(PlatformError::InvalidHandle(format!(
            "WindowId {window_id:?} is not the console window {:?}",
            window.id
        )))
    }
}

pub(crate) fn execute_command(
    window: &mut ConsoleWindowData,
    out: &mut dyn Write,
    input_tx: &Sender<PlatformInput>,
    command: PlatformCommand,
) -> PlatformResult<CommandOutcome> {
    match command {
        PlatformCommand::SetWindowTitle { window_id, title } => {
            ensure_window(window, window_id)?;
            if window.title != title {
                window_common::render_title(out, &title)?;
                window.title = title;
            }
        }
        PlatformCommand::ShowHelp {
            window_id,
            title,
            lines,
        } => {
            ensure_window(window, window_id)?;
            window_common::render_help(out, &title, &lines)?;
        }
        PlatformCommand::RenderHistory {
            window_id,
            title,
            items,
            visible,
        } => {
            ensure_window(window, window_id)?;
            window.history_title = title;
            window.history_items = items;
            window.history_visible = visible;
            window_common::render_history(out, window)?;
        }
        PlatformCommand::ShowAlert { window_id, alert } => {
            ensure_window(window, window_id)?;
            match &alert {
                Some(alert) => window_common::render_alert(out, alert)?,
                None if window.alert.is_some() => window_common::render_alert_dismissed(out)?,
                None => {}
            }
            window.alert = alert;
        }
        PlatformCommand::ScheduleAlertExpiry {
            window_id,
            generation,
            delay,
        } => {
            ensure_window(window, window_id)?;
            execute_schedule_alert_expiry(input_tx.clone(), window_id, generation, delay)?;
        }
        PlatformCommand::QuitApplication => {
            log::debug!("CommandExecutor: Quit requested.");
            return Ok(CommandOutcome::Quit);
        }
    }
    out.flush()?;
    Ok(CommandOutcome::Continue)
}

/*
 * Starts a detached timer thread for one alert generation. The thread never
 * needs cancelling: if the generation is stale by the time it fires, the
 * application logic ignores it. A closed channel means the loop has exited.
 */
pub(crate) fn execute_schedule_alert_expiry(
    input_tx: Sender<PlatformInput>,
    window_id: WindowId,
    generation: u64,
    delay: Duration,
) -> PlatformResult<()> {
    log::trace!("CommandExecutor: Alert generation {generation} expires in {delay:?}.");
    thread::Builder::new()
        .name(format!("alert-expiry-{generation}"))
        .spawn(move || {
            thread::sleep(delay);
            if input_tx
                .send(PlatformInput::AlertTimerElapsed {
                    window_id,
                    generation,
                })
                .is_err()
            {
                log::trace!("CommandExecutor: Expiry {generation} fired after shutdown.");
            }
        })?;
    Ok(())
}
