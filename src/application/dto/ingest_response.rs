/// IngestResponse - Outcome of the loader pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestResponse {
    /// The errata document matched the stored checkpoint; nothing was parsed
    Unchanged { digest: String },
    /// The documents were parsed and new advisories written
    Ingested { digest: String, created: usize },
}

impl IngestResponse {
    pub fn created(&self) -> usize {
        match self {
            IngestResponse::Unchanged { .. } => 0,
            IngestResponse::Ingested { created, .. } => *created,
        }
    }

    pub fn digest(&self) -> &str {
        match self {
            IngestResponse::Unchanged { digest } | IngestResponse::Ingested { digest, .. } => {
                digest
            }
        }
    }

    /// Machine-readable stdout line
    pub fn summary(&self) -> String {
        match self {
            IngestResponse::Unchanged { .. } => "unchanged".to_string(),
            IngestResponse::Ingested { created, .. } => format!("created {}", created),
        }
    }
}
