/// Status channel for use cases
///
/// Implementations write somewhere other than stdout, which carries only
/// license text and listings.
pub trait ProgressReporter {
    /// A plain status line, e.g. "📖 Loading license file: acme.lic"
    fn report(&self, message: &str);

    /// File `current` of `total` while scanning a folder, with its name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// A warning or a skipped item; shown even when status lines are muted
    fn report_error(&self, message: &str);

    /// Last line of an operation; ends any progress display
    fn report_completion(&self, message: &str);
}
