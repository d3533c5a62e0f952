use crate::errata::domain::ErratumPayload;
use crate::shared::Result;

/// ErratumPublisher port for creating an advisory in the target system
pub trait ErratumPublisher {
    /// Publishes one erratum
    ///
    /// # Errors
    /// Returns an error if staging the payload fails or the target system
    /// rejects it. Implementations clean up any staged artifacts on every
    /// path.
    fn publish(&self, payload: &ErratumPayload) -> Result<()>;
}
