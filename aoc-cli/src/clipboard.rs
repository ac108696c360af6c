//! System clipboard backed by arboard

use aoc_runner::{Clipboard, ClipboardError};

/// The desktop clipboard, connected on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()));
        self.inner = Some(clipboard);
        result
    }
}
