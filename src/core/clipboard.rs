/*
 * Write-only access to the system clipboard. `ClipboardOperations` lets the
 * application logic copy text without depending on a windowing system, and
 * `CoreClipboard` implements it with `arboard`.
 *
 * On X11 and Wayland the owning process serves the clipboard contents, so the
 * handle that set the text must stay alive. `SessionClipboard` opens one
 * handle on first use and keeps it for the rest of the session.
 */
use std::sync::Mutex;

#[derive(Debug)]
pub enum ClipboardError {
    Unavailable(String),
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(s) => write!(f, "Clipboard unavailable: {s}"),
            ClipboardError::WriteFailed(s) => write!(f, "Clipboard write failed: {s}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardOperations: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/* An open clipboard connection that can take ownership of a text selection. */
pub trait ClipboardHandle: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl ClipboardHandle for arboard::Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::set_text(self, text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

pub type HandleOpener<H> = Box<dyn Fn() -> Result<H> + Send + Sync>;

pub struct SessionClipboard<H: ClipboardHandle> {
    handle: Mutex<Option<H>>,
    open: HandleOpener<H>,
}

pub type CoreClipboard = SessionClipboard<arboard::Clipboard>;

impl CoreClipboard {
    pub fn new() -> Self {
        SessionClipboard::with_opener(Box::new(|| {
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
        }))
    }
}

impl Default for CoreClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ClipboardHandle> SessionClipboard<H> {
    pub fn with_opener(open: HandleOpener<H>) -> Self {
        SessionClipboard {
            handle: Mutex::new(None),
            open,
        }
    }
}

impl<H: ClipboardHandle> ClipboardOperations for SessionClipboard<H> {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".into()))?;

        if guard.is_none() {
            log::debug!("CoreClipboard: Opening clipboard handle.");
            *guard = Some((self.open)()?);
        }
        let handle = guard
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".into()))?;

        if let Err(e) = handle.set_text(text) {
            // The next write opens a fresh handle.
            *guard = None;
            return Err(e);
        }
        log::trace!("CoreClipboard: Copied {} bytes.", text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct SharedHandleState {
        opened: AtomicUsize,
        dropped: AtomicUsize,
        fail_next_set: AtomicBool,
        contents: Mutex<Option<String>>,
    }

    struct FakeHandle {
        shared: Arc<SharedHandleState>,
    }

    impl ClipboardHandle for FakeHandle {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.shared.fail_next_set.swap(false, Ordering::SeqCst) {
                return Err(ClipboardError::WriteFailed("selection lost".into()));
            }
            *self.shared.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.shared.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fake_clipboard() -> (SessionClipboard<FakeHandle>, Arc<SharedHandleState>) {
        let shared = Arc::new(SharedHandleState::default());
        let for_opener = Arc::clone(&shared);
        let clipboard = SessionClipboard::with_opener(Box::new(move || {
            for_opener.opened.fetch_add(1, Ordering::SeqCst);
            Ok(FakeHandle {
                shared: Arc::clone(&for_opener),
            })
        }));
        (clipboard, shared)
    }

    #[test]
    fn test_handle_stays_open_after_write() {
        // Arrange
        let (clipboard, shared) = fake_clipboard();

        // Act
        clipboard.write_text("@1@a@").unwrap();
        clipboard.write_text("@2@b@").unwrap();

        // Assert
        assert_eq!(shared.opened.load(Ordering::SeqCst), 1);
        assert_eq!(shared.dropped.load(Ordering::SeqCst), 0);
        assert_eq!(
            shared.contents.lock().unwrap().as_deref(),
            Some("@2@b@")
        );
    }

    #[test]
    fn test_failed_write_reopens_handle_on_next_write() {
        let (clipboard, shared) = fake_clipboard();
        clipboard.write_text("@1@").unwrap();
        shared.fail_next_set.store(true, Ordering::SeqCst);

        assert!(matches!(
            clipboard.write_text("@2@"),
            Err(ClipboardError::WriteFailed(_))
        ));
        clipboard.write_text("@3@").unwrap();

        assert_eq!(shared.opened.load(Ordering::SeqCst), 2);
        assert_eq!(shared.dropped.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_open_failure_is_reported_as_unavailable() {
        let clipboard: SessionClipboard<FakeHandle> = SessionClipboard::with_opener(Box::new(
            || Err(ClipboardError::Unavailable("no display".into())),
        ));

        let result = clipboard.write_text("@1@");

        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }
}
