use crate::application::dto::{ImportRequest, IngestRequest, SyncResponse};
use crate::application::use_cases::{ImportAdvisoriesUseCase, IngestAdvisoriesUseCase};
use crate::ports::outbound::{
    AdvisoryStore, ErratumPublisher, ProgressReporter, RepositoryCatalog, SourceDocumentReader,
};
use crate::shared::Result;

/// SyncAdvisoriesUseCase - Runs the load pass and then the import pass
///
/// The configured repository labels are checked against the catalog before
/// the load pass runs, so an unknown label fails the run with the store and
/// its checkpoint untouched.
pub struct SyncAdvisoriesUseCase<SDR, S, PR, IS, C, P, IPR> {
    ingest: IngestAdvisoriesUseCase<SDR, S, PR>,
    import: ImportAdvisoriesUseCase<IS, C, P, IPR>,
}

impl<SDR, S, PR, IS, C, P, IPR> SyncAdvisoriesUseCase<SDR, S, PR, IS, C, P, IPR>
where
    SDR: SourceDocumentReader,
    S: AdvisoryStore,
    PR: ProgressReporter,
    IS: AdvisoryStore,
    C: RepositoryCatalog,
    P: ErratumPublisher,
    IPR: ProgressReporter,
{
    pub fn new(
        ingest: IngestAdvisoriesUseCase<SDR, S, PR>,
        import: ImportAdvisoriesUseCase<IS, C, P, IPR>,
    ) -> Self {
        Self { ingest, import }
    }

    pub fn execute(
        &self,
        ingest_request: IngestRequest,
        import_request: ImportRequest,
    ) -> Result<SyncResponse> {
        self.import.verify_repositories(&import_request)?;
        let ingest = self.ingest.execute(ingest_request)?;
        let import = self.import.execute(import_request)?;
        Ok(SyncResponse { ingest, import })
    }
}
