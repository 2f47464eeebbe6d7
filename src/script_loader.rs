//! Script loading.
//!
//! Resolves a path to the script text shown in the prompter. Only plain UTF-8
//! text is supported; the prompter never touches the file again after this.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a script file from disk.
pub fn load_script(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    if path.is_dir() {
        bail!("{} is a directory, not a script file", path.display());
    }

    info!(path = %path.display(), "Loading script text");
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8 text", path.display()))?;
    let text = text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text);

    info!(total_chars = text.chars().count(), "Finished loading script text");
    Ok(text)
}
