use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LicenseDirectory port for scanning a folder of license files
pub trait LicenseDirectory {
    /// Lists the files directly inside `directory` whose extension matches
    /// `extension` (case-insensitive, without the dot)
    ///
    /// # Returns
    /// Matching paths in sorted order
    ///
    /// # Errors
    /// Returns a `DirectoryReadError` if the folder cannot be read.
    fn list_license_files(&self, directory: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    /// Reads one listed file
    fn read_license_file(&self, path: &Path) -> Result<String>;
}
