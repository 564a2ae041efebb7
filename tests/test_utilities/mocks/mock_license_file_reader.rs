use license_builder::prelude::*;
use std::path::Path;

/// Mock LicenseFileReader returning fixed content
pub struct MockLicenseFileReader {
    content: Option<String>,
}

#[allow(dead_code)]
impl MockLicenseFileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// A reader for which every file is missing
    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl LicenseFileReader for MockLicenseFileReader {
    fn read_file(&self, path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(LicenseError::FileReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into()),
        }
    }
}
