use super::{ImportResponse, IngestResponse};

/// SyncResponse - Outcome of a load pass followed by an import pass
#[derive(Debug, Clone)]
pub struct SyncResponse {
    pub ingest: IngestResponse,
    pub import: ImportResponse,
}

impl SyncResponse {
    /// Load summary line followed by the per-repository lines
    pub fn summary(&self) -> String {
        let import = self.import.summary();
        if import.is_empty() {
            self.ingest.summary()
        } else {
            format!("{}\n{}", self.ingest.summary(), import)
        }
    }
}
