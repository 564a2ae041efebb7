use crate::application::dto::LicenseEdit;
use crate::application::state::LicenseState;
use crate::license_generation::domain::ServerInfoPatch;
use crate::ports::outbound::{ProgressReporter, StateRepository};
use crate::shared::Result;

/// EditLicenseUseCase - Load, mutate and save the license state
///
/// Exactly one edit is applied per execution. A failed edit leaves the
/// saved state untouched.
///
/// # Type Parameters
/// * `SR` - StateRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct EditLicenseUseCase<SR, PR> {
    state_repository: SR,
    progress_reporter: PR,
    server_defaults: ServerInfoPatch,
}

impl<SR, PR> EditLicenseUseCase<SR, PR>
where
    SR: StateRepository,
    PR: ProgressReporter,
{
    pub fn new(state_repository: SR, progress_reporter: PR) -> Self {
        Self {
            state_repository,
            progress_reporter,
            server_defaults: ServerInfoPatch::default(),
        }
    }

    /// Server values re-applied after the license is cleared
    pub fn with_server_defaults(mut self, defaults: ServerInfoPatch) -> Self {
        self.server_defaults = defaults;
        self
    }

    /// Executes one edit
    ///
    /// # Returns
    /// The state as saved after the edit
    pub fn execute(&self, edit: LicenseEdit) -> Result<LicenseState> {
        let state = self.state_repository.load()?;
        let description = edit.describe();
        let clears = matches!(edit, LicenseEdit::ClearAll);

        let mut next = edit.apply(state)?;
        if clears {
            next = next.with_server_info(&self.server_defaults);
        }

        self.state_repository.save(&next)?;
        self.progress_reporter
            .report_completion(&format!("✅ {}", description));
        Ok(next)
    }

    /// Returns the saved state without changing it
    pub fn current(&self) -> Result<LicenseState> {
        self.state_repository.load()
    }
}
