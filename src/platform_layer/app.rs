use super::command_executor::{self, CommandOutcome};
use super::error::{PlatformError, Result as PlatformResult};
use super::form_input::{self, FormInput, FormProgress};
use super::types::{AppEvent, PlatformCommand, PlatformEventHandler, WindowId};
use super::window_common::ConsoleWindowData;
use crate::core::form_fields::descriptor_for;

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

/// Everything the console run loop reacts to. Input lines come from the stdin
/// reader thread, expiries from timer threads; both post into one channel so
/// events reach the application logic one at a time.
#[derive(Debug)]
pub(crate) enum PlatformInput {
    Line(String),
    EndOfInput,
    AlertTimerElapsed { window_id: WindowId, generation: u64 },
}

/// Commands the user can type while no form is being filled in.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ConsoleAction {
    Generate,
    // 1-based position as printed in the history list.
    Copy(usize),
    ToggleHistory,
    Clear,
    Quit,
    Help,
    Unknown(String),
}

pub(crate) fn parse_console_action(line: &str) -> ConsoleAction {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("").to_lowercase();
    let argument = words.next();
    match (command.as_str(), argument) {
        ("g" | "generate", None) => ConsoleAction::Generate,
        ("h" | "history", None) => ConsoleAction::ToggleHistory,
        ("x" | "clear", None) => ConsoleAction::Clear,
        ("q" | "quit", None) => ConsoleAction::Quit,
        ("?" | "help", None) => ConsoleAction::Help,
        ("c" | "copy", Some(n)) => match n.parse::<usize>() {
            Ok(position) if position > 0 => ConsoleAction::Copy(position),
            _ => ConsoleAction::Unknown(line.to_string()),
        },
        _ => ConsoleAction::Unknown(line.to_string()),
    }
}

/// The console platform: one main view rendered to `output`, driven by lines
/// of input. Owns the run loop that feeds `AppEvent`s to the application
/// logic and executes the `PlatformCommand`s it enqueues.
pub struct PlatformInterface {
    next_window_id_counter: usize,
    output: Box<dyn Write + Send>,
}

impl PlatformInterface {
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    pub fn with_output(output: Box<dyn Write + Send>) -> Self {
        PlatformInterface {
            next_window_id_counter: 1,
            output,
        }
    }

    pub fn create_main_window(&mut self) -> WindowId {
        let window_id = WindowId(self.next_window_id_counter);
        self.next_window_id_counter += 1;
        log::debug!("Platform: Created console window {window_id:?}.");
        window_id
    }

    /// Runs until the application logic asks to quit or stdin is closed.
    /// `initial_commands` (the static layout) are executed before the
    /// application logic sees `MainWindowUISetupComplete`.
    pub fn run(
        self,
        event_handler: Arc<Mutex<dyn PlatformEventHandler>>,
        window_id: WindowId,
        initial_commands: Vec<PlatformCommand>,
    ) -> PlatformResult<()> {
        let (input_tx, input_rx) = mpsc::channel();
        spawn_stdin_reader(input_tx.clone())?;
        self.main_event_loop(
            event_handler,
            window_id,
            initial_commands,
            input_tx,
            input_rx,
        )
    }

    pub(crate) fn main_event_loop(
        mut self,
        event_handler: Arc<Mutex<dyn PlatformEventHandler>>,
        window_id: WindowId,
        initial_commands: Vec<PlatformCommand>,
        input_tx: Sender<PlatformInput>,
        input_rx: Receiver<PlatformInput>,
    ) -> PlatformResult<()> {
        let mut window = ConsoleWindowData::new(window_id);
        let mut form: Option<FormInput> = None;

        let mut quit = self.execute_commands(&mut window, &input_tx, initial_commands)?;
        if !quit {
            quit = self.dispatch(
                &event_handler,
                &mut window,
                &input_tx,
                AppEvent::MainWindowUISetupComplete { window_id },
            )?;
        }

        while !quit {
            let input = match input_rx.recv() {
                Ok(input) => input,
                Err(_) => PlatformInput::EndOfInput,
            };
            quit = match input {
                PlatformInput::Line(line) => {
                    self.on_line(&event_handler, &mut window, &input_tx, &mut form, &line)?
                }
                PlatformInput::AlertTimerElapsed {
                    window_id,
                    generation,
                } => self.dispatch(
                    &event_handler,
                    &mut window,
                    &input_tx,
                    AppEvent::AlertExpired {
                        window_id,
                        generation,
                    },
                )?,
                PlatformInput::EndOfInput => {
                    log::debug!("Platform: Input closed, requesting close.");
                    self.dispatch(
                        &event_handler,
                        &mut window,
                        &input_tx,
                        AppEvent::WindowCloseRequestedByUser { window_id },
                    )?;
                    true
                }
            };
        }

        event_handler
            .lock()
            .map_err(|_| PlatformError::OperationFailed("event handler lock poisoned".into()))?
            .on_quit();
        log::debug!("Platform: Main loop exited.");
        Ok(())
    }

    fn on_line(
        &mut self,
        event_handler: &Arc<Mutex<dyn PlatformEventHandler>>,
        window: &mut ConsoleWindowData,
        input_tx: &Sender<PlatformInput>,
        form: &mut Option<FormInput>,
        line: &str,
    ) -> PlatformResult<bool> {
        let window_id = window.id;

        if let Some(active_form) = form.as_mut() {
            match active_form.accept_line(line) {
                FormProgress::NeedField(descriptor) => {
                    writeln!(self.output, "{}", form_input::prompt_for(descriptor))?;
                }
                FormProgress::NeedMoreLines(_) => {}
                FormProgress::Rejected(errors) => {
                    *form = None;
                    writeln!(self.output, "Form not submitted:")?;
                    for error in errors {
                        writeln!(
                            self.output,
                            "  - {}: {error}",
                            descriptor_for(error.key).label
                        )?;
                    }
                    writeln!(self.output, "Type 'g' to try again.")?;
                }
                FormProgress::Completed(fields) => {
                    *form = None;
                    return self.dispatch(
                        event_handler,
                        window,
                        input_tx,
                        AppEvent::FormSubmitted { window_id, fields },
                    );
                }
            }
            self.output.flush()?;
            return Ok(false);
        }

        let event = match parse_console_action(line) {
            ConsoleAction::Generate => {
                let first = FormInput::new();
                if let Some(descriptor) = first.current_field() {
                    writeln!(self.output, "{}", form_input::prompt_for(descriptor))?;
                }
                *form = Some(first);
                None
            }
            ConsoleAction::Copy(position) => Some(AppEvent::HistoryItemActivated {
                window_id,
                index: position - 1,
            }),
            ConsoleAction::ToggleHistory => Some(AppEvent::ToggleHistoryRequested { window_id }),
            ConsoleAction::Clear => Some(AppEvent::ClearHistoryRequested { window_id }),
            ConsoleAction::Quit => Some(AppEvent::WindowCloseRequestedByUser { window_id }),
            ConsoleAction::Help => {
                writeln!(self.output, "Commands: g, c <n>, h, x, q")?;
                None
            }
            ConsoleAction::Unknown(text) => {
                if !text.trim().is_empty() {
                    writeln!(self.output, "Unknown command '{text}'. Type '?' for help.")?;
                }
                None
            }
        };
        self.output.flush()?;

        match event {
            Some(event) => self.dispatch(event_handler, window, input_tx, event),
            None => Ok(false),
        }
    }

    /// Hands one event to the application logic, then drains and executes
    /// its queued commands. Returns true once `QuitApplication` was executed.
    fn dispatch(
        &mut self,
        event_handler: &Arc<Mutex<dyn PlatformEventHandler>>,
        window: &mut ConsoleWindowData,
        input_tx: &Sender<PlatformInput>,
        event: AppEvent,
    ) -> PlatformResult<bool> {
        let commands = {
            let mut handler = event_handler.lock().map_err(|_| {
                PlatformError::OperationFailed("event handler lock poisoned".into())
            })?;
            handler.handle_event(event);
            let mut commands = Vec::new();
            while let Some(command) = handler.try_dequeue_command() {
                commands.push(command);
            }
            commands
        };
        self.execute_commands(window, input_tx, commands)
    }

    fn execute_commands(
        &mut self,
        window: &mut ConsoleWindowData,
        input_tx: &Sender<PlatformInput>,
        commands: Vec<PlatformCommand>,
    ) -> PlatformResult<bool> {
        let mut quit = false;
        for command in commands {
            match command_executor::execute_command(
                window,
                self.output.as_mut(),
                input_tx,
                command,
            ) {
                Ok(CommandOutcome::Quit) => quit = true,
                Ok(CommandOutcome::Continue) => {}
                Err(PlatformError::Io(e)) => return Err(PlatformError::Io(e)),
                Err(e) => log::error!("Platform: Error executing command: {e}"),
            }
        }
        Ok(quit)
    }
}

impl Default for PlatformInterface {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_stdin_reader(input_tx: Sender<PlatformInput>) -> PlatformResult<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if input_tx.send(PlatformInput::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::error!("Platform: Failed to read input: {e}");
                        break;
                    }
                }
            }
            let _ = input_tx.send(PlatformInput::EndOfInput);
        })?;
    Ok(())
}
