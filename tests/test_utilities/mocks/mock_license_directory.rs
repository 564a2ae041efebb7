use license_builder::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mock LicenseDirectory backed by an in-memory folder
#[derive(Default)]
pub struct MockLicenseDirectory {
    files: BTreeMap<PathBuf, Option<String>>,
    unreadable_directory: bool,
}

#[allow(dead_code)]
impl MockLicenseDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), Some(content.to_string()));
        self
    }

    /// A listed file whose read fails
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }

    pub fn unreadable() -> Self {
        Self {
            unreadable_directory: true,
            ..Default::default()
        }
    }
}

impl LicenseDirectory for MockLicenseDirectory {
    fn list_license_files(&self, directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if self.unreadable_directory {
            return Err(LicenseError::DirectoryReadError {
                path: directory.to_path_buf(),
                details: "permission denied".to_string(),
            }
            .into());
        }
        Ok(self
            .files
            .keys()
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
            })
            .cloned()
            .collect())
    }

    fn read_license_file(&self, path: &Path) -> Result<String> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            _ => Err(LicenseError::FileReadError {
                path: path.to_path_buf(),
                details: "permission denied".to_string(),
            }
            .into()),
        }
    }
}
