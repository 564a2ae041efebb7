use crate::ports::outbound::{LicenseDirectory, LicenseFileReader};
use crate::shared::error::LicenseError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading license files from disk
///
/// This adapter implements both LicenseFileReader and LicenseDirectory,
/// applying the same symlink and size checks to every file it reads.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after validating it is a regular, reasonably sized file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "License file")?;

        fs::read_to_string(path).map_err(|e| {
            LicenseError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFileReader for FileSystemReader {
    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(LicenseError::FileReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into());
        }
        self.safe_read_file(path)
    }
}

impl LicenseDirectory for FileSystemReader {
    fn list_license_files(&self, directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let directory_error = |details: String| LicenseError::DirectoryReadError {
            path: directory.to_path_buf(),
            details,
        };

        let entries = fs::read_dir(directory).map_err(|e| directory_error(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| directory_error(e.to_string()))?;
            let path = entry.path();
            let matches_extension = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
            // file_type() does not follow symlinks, so links are left out
            let is_file = entry.file_type().is_ok_and(|t| t.is_file());
            if matches_extension && is_file {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_license_file(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path)
    }
}
