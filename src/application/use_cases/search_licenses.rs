use crate::application::dto::{SearchRequest, SearchResponse};
use crate::ports::outbound::{LicenseDirectory, ProgressReporter};
use crate::shared::error::LicenseError;
use crate::shared::Result;

/// SearchLicensesUseCase - Find license files containing a term
///
/// # Type Parameters
/// * `D` - LicenseDirectory implementation
/// * `PR` - ProgressReporter implementation
pub struct SearchLicensesUseCase<D, PR> {
    directory: D,
    progress_reporter: PR,
}

impl<D, PR> SearchLicensesUseCase<D, PR>
where
    D: LicenseDirectory,
    PR: ProgressReporter,
{
    pub fn new(directory: D, progress_reporter: PR) -> Self {
        Self {
            directory,
            progress_reporter,
        }
    }

    /// Executes the search
    ///
    /// Files that cannot be read are reported and skipped; only an
    /// unreadable folder fails the search.
    pub fn execute(&self, request: SearchRequest) -> Result<SearchResponse> {
        if request.term.trim().is_empty() {
            return Err(LicenseError::InvalidInput {
                message: "Search term is empty".to_string(),
                hint: "Pass the text to look for, e.g. a customer id or hostname".to_string(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "🔍 Searching {} for \"{}\"...",
            request.directory.display(),
            request.term
        ));

        // Surrounding spaces are part of the term
        let term = request.term.to_lowercase();

        let candidates = self
            .directory
            .list_license_files(&request.directory, &request.extension)?;
        let total = candidates.len();

        let mut matches = Vec::new();
        let mut skipped = 0;
        for (index, path) in candidates.into_iter().enumerate() {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&file_name));

            match self.directory.read_license_file(&path) {
                Ok(content) => {
                    if content.to_lowercase().contains(&term) {
                        matches.push(path);
                    }
                }
                Err(e) => {
                    skipped += 1;
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping {}: {}",
                        path.display(),
                        e
                    ));
                }
            }
        }

        matches.sort();
        self.progress_reporter.report_completion(&format!(
            "✅ {} of {} file(s) matched",
            matches.len(),
            total
        ));

        Ok(SearchResponse::new(matches, total, skipped))
    }
}
