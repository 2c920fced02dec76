//! Clipboard capability.
//!
//! The system clipboard is only available with the `clipboard` feature.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard backed by `copypasta`.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    ctx: copypasta::ClipboardContext,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = copypasta::ClipboardContext::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use copypasta::ClipboardProvider;

        self.ctx
            .set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Copied {} chars to the system clipboard", text.chars().count());

        Ok(())
    }
}
