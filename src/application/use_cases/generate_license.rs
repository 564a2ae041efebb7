use crate::application::dto::{Destination, GenerateRequest, GenerateResponse};
use crate::application::state::PreferencesPatch;
use crate::ports::outbound::{LicenseFileWriter, OutputPresenter, ProgressReporter, StateRepository};
use crate::shared::Result;

/// GenerateLicenseUseCase - Serialize the saved license and deliver it
///
/// # Type Parameters
/// * `SR` - StateRepository implementation
/// * `W` - LicenseFileWriter implementation
/// * `OP` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicenseUseCase<SR, W, OP, PR> {
    state_repository: SR,
    file_writer: W,
    presenter: OP,
    progress_reporter: PR,
}

impl<SR, W, OP, PR> GenerateLicenseUseCase<SR, W, OP, PR>
where
    SR: StateRepository,
    W: LicenseFileWriter,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    pub fn new(state_repository: SR, file_writer: W, presenter: OP, progress_reporter: PR) -> Self {
        Self {
            state_repository,
            file_writer,
            presenter,
            progress_reporter,
        }
    }

    /// Executes license generation
    ///
    /// Writing into a directory also records that directory as the last
    /// used destination.
    pub fn execute(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let state = self.state_repository.load()?;
        let content = state.generate_license_file();
        let feature_count = state.license.products.len();

        if feature_count == 0 {
            self.progress_reporter
                .report_error("⚠️  Warning: The license has no products; only SERVER and ISV lines will be written.");
        }

        let written_to = match request.destination {
            Destination::Stdout => {
                self.presenter.present(&content)?;
                None
            }
            Destination::File(path) => {
                self.file_writer.write_file(&path, &content)?;
                Some(path)
            }
            Destination::Directory(directory) => {
                let path = self.file_writer.write_to_directory(
                    &directory,
                    &state.license_file_name(),
                    &content,
                )?;
                let state = state.with_preferences(&PreferencesPatch {
                    destination_folder_path: Some(directory),
                    ..Default::default()
                })?;
                self.state_repository.save(&state)?;
                Some(path)
            }
        };

        if let Some(path) = &written_to {
            self.progress_reporter.report_completion(&format!(
                "✅ Wrote {} feature line(s) to {}",
                feature_count,
                path.display()
            ));
        }

        Ok(GenerateResponse::new(content, written_to, feature_count))
    }
}
