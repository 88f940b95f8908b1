use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Largest chat export accepted: 256 MiB
pub const MAX_EXPORT_SIZE_BYTES: u64 = 256 * 1024 * 1024;

/// Largest stop-word list accepted: 16 MiB
pub const MAX_WORD_LIST_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// Validates that an open file is no larger than `max_bytes`
///
/// Takes the open handle rather than a path so the checked file is the one that gets read.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file exceeds the limit.
pub fn validate_file_size(file: &File, path: &Path, max_bytes: u64) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > max_bytes {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, max_bytes);
    }

    Ok(())
}

/// Read a UTF-8 text file no larger than `max_bytes`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, is too large, or is not UTF-8.
pub fn read_text_file(path: &Path, max_bytes: u64) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    validate_file_size(&file, path, max_bytes)?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
    Ok(text)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
