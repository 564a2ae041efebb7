use crate::application::dto::{LoadRequest, LoadResponse};
use crate::license_generation::services::LicenseParser;
use crate::ports::outbound::{LicenseFileReader, ProgressReporter, StateRepository};
use crate::shared::error::LicenseError;
use crate::shared::Result;

/// LoadLicenseUseCase - Import products from an existing license file
///
/// The recovered products replace the current product list. Server info,
/// global values and notes are kept.
///
/// # Type Parameters
/// * `SR` - StateRepository implementation
/// * `R` - LicenseFileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadLicenseUseCase<SR, R, PR> {
    state_repository: SR,
    file_reader: R,
    progress_reporter: PR,
}

impl<SR, R, PR> LoadLicenseUseCase<SR, R, PR>
where
    SR: StateRepository,
    R: LicenseFileReader,
    PR: ProgressReporter,
{
    pub fn new(state_repository: SR, file_reader: R, progress_reporter: PR) -> Self {
        Self {
            state_repository,
            file_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: LoadRequest) -> Result<LoadResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading license file: {}",
            request.path.display()
        ));

        let content = self.file_reader.read_file(&request.path)?;
        if content.trim().is_empty() {
            return Err(LicenseError::InvalidInput {
                message: format!("{} is empty", request.path.display()),
                hint: "Choose a license file that contains FEATURE lines".to_string(),
            }
            .into());
        }

        let outcome = LicenseParser::parse_with(&content, &request.options);
        for diagnostic in &outcome.diagnostics {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: Skipped {}", diagnostic));
        }

        let product_count = outcome.products.len();
        let state = self
            .state_repository
            .load()?
            .replace_products(outcome.products);
        self.state_repository.save(&state)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} product(s) from {}",
            product_count,
            request.path.display()
        ));

        Ok(LoadResponse::new(product_count, outcome.diagnostics))
    }
}
