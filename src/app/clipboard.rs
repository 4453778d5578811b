//! Clipboard integration

use crate::app::error::{AppError, Result};
use arboard::Clipboard;
use log::debug;

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    debug!("copying {} chars to clipboard", text.len());

    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("failed to open clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| AppError::Clipboard(format!("failed to write clipboard: {}", e)))?;

    Ok(())
}
