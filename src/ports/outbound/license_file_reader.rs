use crate::shared::Result;
use std::path::Path;

/// LicenseFileReader port for reading an existing license file
///
/// This port abstracts the file system operations needed to import
/// products from a license file chosen by the user.
pub trait LicenseFileReader {
    /// Reads the whole file as text
    ///
    /// # Arguments
    /// * `path` - Path to the license file
    ///
    /// # Returns
    /// The raw content of the file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The path is a symbolic link or not a regular file
    /// - The file exceeds the size limit
    fn read_file(&self, path: &Path) -> Result<String>;
}
