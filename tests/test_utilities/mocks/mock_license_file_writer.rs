use license_builder::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LicenseFileWriter recording every write
#[derive(Default, Clone)]
pub struct MockLicenseFileWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

#[allow(dead_code)]
impl MockLicenseFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl LicenseFileWriter for MockLicenseFileWriter {
    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }

    fn write_to_directory(
        &self,
        directory: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf> {
        let path = directory.join(file_name);
        self.write_file(&path, content)?;
        Ok(path)
    }
}
