//! Clipboard integration for copying the results panel
//!
//! Uses arboard for cross-platform clipboard access

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access, may fail in CI
    fn test_copy() {
        let mut clipboard = Clipboard::new().expect("Clipboard failed");
        copy_to_clipboard("+15 Physique").expect("Copy failed");
        assert_eq!(clipboard.get_text().expect("Paste failed"), "+15 Physique");
    }

    #[test]
    fn test_empty_copy() {
        // Should not touch the clipboard on empty string
        assert!(copy_to_clipboard("").is_ok());
    }
}
