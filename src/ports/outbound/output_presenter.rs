use crate::shared::Result;

/// OutputPresenter port for the machine-readable run summary
///
/// Automation reads this output; diagnostics go through
/// [`ProgressReporter`](super::ProgressReporter) instead.
pub trait OutputPresenter {
    /// Presents the summary text
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
