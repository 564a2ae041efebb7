use crate::ports::outbound::{LicenseFileWriter, OutputPresenter};
use crate::shared::error::LicenseError;
use crate::shared::security::{validate_file_name, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing license files
///
/// This adapter implements the LicenseFileWriter port.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(LicenseError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Refuses to write through a symbolic link
    fn validate_output_security(path: &Path) -> Result<()> {
        // symlink_metadata succeeds for dangling links too
        if fs::symlink_metadata(path).is_ok() {
            validate_not_symlink(path, "write")?;
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFileWriter for FileSystemWriter {
    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_parent_directory(path)?;
        Self::validate_output_security(path)?;

        fs::write(path, content).map_err(|e| LicenseError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn write_to_directory(
        &self,
        directory: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf> {
        validate_file_name(file_name)?;
        if !directory.is_dir() {
            return Err(LicenseError::InvalidInput {
                message: format!("{} is not a folder", directory.display()),
                hint: "Create the destination folder first or pass an existing one".to_string(),
            }
            .into());
        }

        let path = directory.join(file_name);
        self.write_file(&path, content)?;
        Ok(path)
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// A final newline is added when the content lacks one, so the shell
/// prompt starts on its own line.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        if !content.ends_with('\n') {
            stdout
                .write_all(b"\n")
                .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        }
        Ok(())
    }
}
