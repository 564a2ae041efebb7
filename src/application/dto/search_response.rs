use std::path::PathBuf;

/// SearchResponse - Files whose content matched the search term
#[derive(Debug, Clone, Default)]
pub struct SearchResponse {
    /// Matching files in sorted path order
    pub matches: Vec<PathBuf>,
    /// Number of candidate files looked at
    pub scanned: usize,
    /// Number of candidate files that could not be read
    pub skipped: usize,
}

impl SearchResponse {
    pub fn new(matches: Vec<PathBuf>, scanned: usize, skipped: usize) -> Self {
        Self {
            matches,
            scanned,
            skipped,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}
