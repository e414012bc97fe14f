//! Platform side effects behind injectable traits.

use std::sync::Mutex;

use mailpilot_logging::mp_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("failed to open {uri}: {reason}")]
    Open { uri: String, reason: String },
}

pub trait ClipboardWriter: Send {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

pub trait UriOpener: Send {
    fn open(&self, uri: &str) -> Result<(), CapabilityError>;
}

/// System clipboard via `arboard`.
///
/// The handle is acquired on first use and kept, since on some platforms
/// the copied text lives only as long as the handle.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| CapabilityError::Clipboard("clipboard lock poisoned".to_string()))?;
        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| CapabilityError::Clipboard(err.to_string()))?;
            *guard = Some(clipboard);
        }
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| CapabilityError::Clipboard("clipboard not acquired".to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| CapabilityError::Clipboard(err.to_string()))?;
        mp_debug!("Wrote {} chars to clipboard", text.chars().count());
        Ok(())
    }
}

/// Hands URIs to the desktop's default handler via `open`.
pub struct SystemUriOpener;

impl UriOpener for SystemUriOpener {
    fn open(&self, uri: &str) -> Result<(), CapabilityError> {
        open::that_detached(uri).map_err(|err| CapabilityError::Open {
            uri: uri.to_string(),
            reason: err.to_string(),
        })
    }
}
