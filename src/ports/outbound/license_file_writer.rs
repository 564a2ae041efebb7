use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LicenseFileWriter port for saving generated license text
pub trait LicenseFileWriter {
    /// Writes `content` to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory does not exist
    /// - The target is a symbolic link
    /// - Writing fails
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Writes `content` to `directory/file_name`
    ///
    /// # Returns
    /// The full path that was written
    fn write_to_directory(
        &self,
        directory: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf>;
}
