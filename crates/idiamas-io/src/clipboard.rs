use anyhow::Context;
use arboard::Clipboard;

/// Replace the system clipboard contents with `text`
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    tracing::debug!("Copied {} chars to clipboard", text.chars().count());
    Ok(())
}
