use log::debug;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::pad::Pad;

/// Saves a pad as compact JSON at the given path.
///
/// The serialization preserves row order and within-row order exactly, so a
/// loaded pad decodes byte-for-byte what the saved pad encoded. Compact
/// form is used because a full pad is roughly 195k integers.
///
/// # Errors
///
/// Returns an error if the pad cannot be serialized or the file cannot be
/// written.
pub fn save_pad(path: &Path, pad: &Pad) -> Result<()> {
    let serialized = serde_json::to_string(pad)?;
    fs::write(path, serialized)?;
    debug!("saved {}-row pad to '{}'", pad.len(), path.display());
    Ok(())
}

/// Loads a pad previously written by [`save_pad`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a pad.
pub fn load_pad(path: &Path) -> Result<Pad> {
    let contents = fs::read_to_string(path)?;
    let pad = serde_json::from_str(&contents)?;
    Ok(pad)
}
