use crate::license_generation::services::ParseOptions;
use std::path::PathBuf;

/// LoadRequest - Request DTO for importing products from a license file
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub path: PathBuf,
    pub options: ParseOptions,
}

impl LoadRequest {
    pub fn new(path: PathBuf, options: ParseOptions) -> Self {
        Self { path, options }
    }
}
