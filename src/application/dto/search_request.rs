use std::path::PathBuf;

/// SearchRequest - Request DTO for searching license files by content
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Folder to scan (not recursive)
    pub directory: PathBuf,
    /// Matched case-insensitively as a substring of each file's content
    pub term: String,
    /// File extension to consider, without the dot
    pub extension: String,
}

impl SearchRequest {
    pub fn new(directory: PathBuf, term: String, extension: String) -> Self {
        Self {
            directory,
            term,
            extension,
        }
    }
}
