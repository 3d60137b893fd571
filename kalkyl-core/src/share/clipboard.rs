use tracing::{info, warn};
use url::Url;

use super::ShareError;

/// Somewhere a share link can be written.
pub trait Clipboard {
    /// # Errors
    ///
    /// [`ShareError::ClipboardUnavailable`] when there is no clipboard in
    /// this environment, [`ShareError::ClipboardFailed`] for any other
    /// refusal.
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ShareError>;
}

/// In-process clipboard. Can be primed to fail, which is how the share
/// button's failure label is exercised without a display server.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_with: Option<ShareError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write returns `error`.
    pub fn failing(error: ShareError) -> Self {
        Self {
            contents: None,
            fail_with: Some(error),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ShareError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Label of the share button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl ShareStatus {
    pub fn from_result(result: &Result<(), ShareError>) -> Self {
        match result {
            Ok(()) => Self::Copied,
            Err(_) => Self::Failed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Dela",
            Self::Copied => "Länk kopierad!",
            Self::Failed => "Kunde inte dela",
        }
    }
}

/// Writes `url` to `clipboard`. Failures are logged and returned, never
/// panicked on; the page stays usable either way.
pub fn share_link(
    clipboard: &mut dyn Clipboard,
    url: &Url,
) -> Result<(), ShareError> {
    match clipboard.write_text(url.as_str()) {
        Ok(()) => {
            info!(%url, "share link copied");
            Ok(())
        }
        Err(error) => {
            warn!(%url, %error, "could not copy share link");
            Err(error)
        }
    }
}
