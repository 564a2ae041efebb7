use crate::application::state::LicenseState;
use crate::shared::Result;

/// StateRepository port for persisting the license state between runs
pub trait StateRepository {
    /// Loads the saved state
    ///
    /// A repository with nothing saved yet returns a fresh state rather
    /// than an error.
    ///
    /// # Errors
    /// Returns a `StateLoadError` if saved data exists but cannot be read.
    fn load(&self) -> Result<LicenseState>;

    /// Saves the state, replacing what was saved before
    fn save(&self, state: &LicenseState) -> Result<()>;
}
