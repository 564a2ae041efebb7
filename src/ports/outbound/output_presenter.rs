use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (usually stdout) where
/// license text and listings are shown to the user.
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
