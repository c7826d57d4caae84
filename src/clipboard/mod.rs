use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::debug;

use crate::models::PromptRecord;
use crate::utils::single_line;

/// Largest prompt body we will place on the clipboard (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Clipboard backend, swappable in tests
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

/// Checked before the system clipboard is touched, so headless runs still get clear errors
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }
    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns an error if the text is empty or over 10MB, or if the system clipboard is
/// unavailable (headless session, no X11/Wayland clipboard, access denied).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    validate_clipboard_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}

/// Copy a record's raw prompt body, exactly as stored
pub fn copy_prompt(record: &PromptRecord) -> Result<()> {
    copy_to_clipboard(&record.prompt)
        .with_context(|| format!("Failed to copy {} ({})", record.id, single_line(&record.act)))?;
    debug!(id = %record.id, bytes = record.prompt.len(), "Copied prompt to clipboard");
    Ok(())
}
