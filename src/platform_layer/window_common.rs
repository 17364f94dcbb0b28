use super::types::{Alert, AlertKind, HistoryItemDescriptor, WindowId};
use crate::app_logic::ui_constants;

use std::io::{self, Write};

/// Holds what the console currently shows for the main view.
///
/// The console cannot redraw in place, so each render call prints a fresh
/// block; this struct remembers the last state so unchanged parts are not
/// printed again and tests can inspect what was shown.
#[derive(Debug)]
pub(crate) struct ConsoleWindowData {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) history_title: String,
    pub(crate) history_items: Vec<HistoryItemDescriptor>,
    pub(crate) history_visible: bool,
    pub(crate) alert: Option<Alert>,
}

impl ConsoleWindowData {
    pub(crate) fn new(id: WindowId) -> Self {
        ConsoleWindowData {
            id,
            title: String::new(),
            history_title: ui_constants::HISTORY_LIST_TITLE.to_string(),
            history_items: Vec::new(),
            history_visible: false,
            alert: None,
        }
    }
}

pub(crate) fn render_title(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {title} ===")
}

pub(crate) fn render_help(out: &mut dyn Write, title: &str, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for line in lines {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Prints the history block. A hidden list is summarized on one line; an
/// empty one shows the placeholder text. Items are numbered from 1.
pub(crate) fn render_history(out: &mut dyn Write, data: &ConsoleWindowData) -> io::Result<()> {
    let count = data.history_items.len();
    if !data.history_visible {
        return writeln!(
            out,
            "{}: {count} (hidden, 'h' to show)",
            data.history_title
        );
    }
    writeln!(out, "{}:", data.history_title)?;
    if data.history_items.is_empty() {
        return writeln!(out, "  {}", ui_constants::EMPTY_HISTORY_TEXT);
    }
    for item in &data.history_items {
        writeln!(out, "  [{}] {}  ({})", item.index + 1, item.value, item.date)?;
    }
    Ok(())
}

pub(crate) fn render_alert(out: &mut dyn Write, alert: &Alert) -> io::Result<()> {
    let marker = match alert.kind {
        AlertKind::Success => "OK",
        AlertKind::Error => "!!",
    };
    writeln!(out, "[{marker}] {}", alert.text)?;
    if let Some(subtext) = &alert.subtext {
        writeln!(out, "     {subtext}")?;
    }
    Ok(())
}

pub(crate) fn render_alert_dismissed(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "[--] (alert dismissed)")
}
