//! System clipboard integration via arboard.

use arboard::Clipboard;
use snipvault_core::{ClipboardError, ClipboardWrite};

/// [`ClipboardWrite`] backed by the OS clipboard.
///
/// Construction failure (no display server, no clipboard utility) is held
/// until the first write so the session still starts; the failed write is
/// surfaced to the user as an error notice.
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::warn!(%err, "system clipboard unavailable");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWrite for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        match &mut self.inner {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|err| ClipboardError::WriteFailed(err.to_string())),
            None => Err(ClipboardError::Unavailable(
                "no system clipboard in this environment".into(),
            )),
        }
    }
}
