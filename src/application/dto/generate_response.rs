use std::path::PathBuf;

/// GenerateResponse - Result of license file generation
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// The serialized license text
    pub content: String,
    /// Path written to; `None` when the text went to the presenter
    pub written_to: Option<PathBuf>,
    pub feature_count: usize,
}

impl GenerateResponse {
    pub fn new(content: String, written_to: Option<PathBuf>, feature_count: usize) -> Self {
        Self {
            content,
            written_to,
            feature_count,
        }
    }
}
