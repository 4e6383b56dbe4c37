//! Clipboard integration.

use crate::calc::ERROR;
use crate::error::{AbacoError, Result};
use arboard::Clipboard;

/// Copy a raw calculator value to the clipboard.
///
/// The raw value is copied rather than the grouped display text so it pastes
/// cleanly into other programs. The error sentinel is refused.
pub fn copy_value(value: &str) -> Result<()> {
    if value == ERROR {
        return Err(AbacoError::NothingToCopy);
    }
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(value)?;
    Ok(())
}
