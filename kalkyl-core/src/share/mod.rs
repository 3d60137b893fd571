//! Share-state codec.
//!
//! Every shareable calculator describes its inputs once, through
//! [`ShareState`]; encoding to a query string, decoding back with
//! per-field defaults and copying the link to a clipboard are implemented
//! here for all of them.

mod clipboard;
mod codec;
mod params;

use thiserror::Error;

pub use clipboard::{Clipboard, MemoryClipboard, ShareStatus, share_link};
pub use codec::{Restored, ShareState, decode, decode_or_default, decode_url, encode, share_url};
pub use params::ShareParams;

/// Why a link could not be built or shared.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The calculator id has no registry entry, so it has no route.
    #[error("calculator '{0}' is not in the registry")]
    UnknownCalculator(String),

    /// The site base URL could not be joined with the calculator route.
    #[error("invalid share url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No clipboard exists in this environment (headless, no display).
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The clipboard exists but refused the write.
    #[error("clipboard write failed: {0}")]
    ClipboardFailed(String),
}
