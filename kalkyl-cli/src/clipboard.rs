//! System clipboard backed by `arboard`.

use kalkyl_core::{Clipboard, ShareError};

/// Opens the platform clipboard on every write; a headless session fails
/// with [`ShareError::ClipboardUnavailable`] instead of at startup.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

fn map_error(error: arboard::Error) -> ShareError {
    match error {
        arboard::Error::ClipboardNotSupported => ShareError::ClipboardUnavailable(error.to_string()),
        arboard::Error::Unknown { description } if description.contains("display") => {
            ShareError::ClipboardUnavailable(description)
        }
        other => ShareError::ClipboardFailed(other.to_string()),
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ShareError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .map_err(map_error)
    }
}
