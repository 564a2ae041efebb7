use crate::shared::error::LicenseError;
use crate::shared::Result;
use anyhow::Context;
use std::fs::{self, Metadata};
use std::path::{Component, Path};

/// Largest license or state file that will be read (10 MB)
pub const MAX_LICENSE_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SYMLINK_HINT: &str = "Point to the real file instead of a link";

/// Metadata of the path itself, not of a link target
fn link_metadata(path: &Path, what: &str) -> Result<Metadata> {
    fs::symlink_metadata(path)
        .with_context(|| format!("Failed to inspect {} {}", what, path.display()))
}

fn symlink_error(path: &Path, reason: String) -> anyhow::Error {
    LicenseError::SecurityError {
        path: path.to_path_buf(),
        reason,
        hint: SYMLINK_HINT.to_string(),
    }
    .into()
}

/// Rejects a path that is a symbolic link
///
/// `operation` ("read", "write") only shapes the message. The path must
/// exist.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = link_metadata(path, &format!("{} target", operation))?;
    if metadata.is_symlink() {
        return Err(symlink_error(
            path,
            format!("{} operations on symbolic links are not allowed", operation),
        ));
    }
    Ok(())
}

/// Accepts only an existing regular file of at most [`MAX_LICENSE_FILE_SIZE`]
///
/// `file_description` names the file in messages, e.g. "License file".
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = link_metadata(path, file_description)?;

    if metadata.is_symlink() {
        return Err(symlink_error(
            path,
            format!("{} is a symbolic link", file_description),
        ));
    }
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }
    if metadata.len() > MAX_LICENSE_FILE_SIZE {
        return Err(LicenseError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, limit {} bytes)",
                file_description,
                metadata.len(),
                MAX_LICENSE_FILE_SIZE
            ),
            hint: "License files are plain text of a few kilobytes; check the path".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Accepts a bare file name that stays inside the folder it is joined to
///
/// Names built from free text (the customer id) must not carry separators,
/// `..` or a root, which would move the write out of the chosen folder.
pub fn validate_file_name(file_name: &str) -> Result<()> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == file_name => Ok(()),
        _ => Err(LicenseError::SecurityError {
            path: Path::new(file_name).to_path_buf(),
            reason: "File name must not contain path separators or '..'".to_string(),
            hint: "Use a customer id without '/', '\\' or '..'".to_string(),
        }
        .into()),
    }
}
