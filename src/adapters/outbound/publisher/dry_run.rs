use crate::errata::domain::ErratumPayload;
use crate::ports::outbound::ErratumPublisher;
use crate::shared::Result;

/// DryRunPublisher adapter that logs the payload instead of publishing it
#[derive(Debug, Default)]
pub struct DryRunPublisher;

impl DryRunPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl ErratumPublisher for DryRunPublisher {
    fn publish(&self, payload: &ErratumPayload) -> Result<()> {
        tracing::info!(
            advisory = %payload.advisory_id,
            repository = %payload.repository_label,
            repo_id = %payload.publish_target_id,
            release = %payload.release_tag,
            packages = payload.packages.len(),
            references = payload.references.len(),
            "dry run: erratum not published"
        );
        for row in &payload.packages {
            tracing::debug!(advisory = %payload.advisory_id, filename = %row.filename, "dry run package");
        }
        Ok(())
    }
}
