use snafu::{ResultExt, Snafu};
use tracing::debug;

/// Destination for the rendered tree when `--clip` is requested.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, opened lazily on first copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context(UnavailableSnafu)?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard.set_text(text).context(WriteSnafu)?;
        debug!("Copied {} bytes to the clipboard", text.len());
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ClipboardError {
    #[snafu(display("The system clipboard is not available"))]
    UnavailableError { source: arboard::Error },
    #[snafu(display("Failed to copy the tree to the clipboard"))]
    WriteError { source: arboard::Error },
}
