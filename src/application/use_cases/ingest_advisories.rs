use crate::application::dto::{IngestRequest, IngestResponse};
use crate::errata::services::{content_digest, AdvisoryParser};
use crate::ports::outbound::{AdvisoryStore, ProgressReporter, SourceDocumentReader};
use crate::shared::Result;

/// IngestAdvisoriesUseCase - Loads new advisories into the store
///
/// The pass is gated on the digest of the errata document: when it equals
/// the stored checkpoint nothing is parsed or written. Otherwise both
/// documents are parsed completely, every new advisory is written, and only
/// then is the checkpoint moved to the new digest.
///
/// # Type Parameters
/// * `SDR` - SourceDocumentReader implementation
/// * `S` - AdvisoryStore implementation
/// * `PR` - ProgressReporter implementation
pub struct IngestAdvisoriesUseCase<SDR, S, PR> {
    document_reader: SDR,
    store: S,
    progress_reporter: PR,
}

impl<SDR, S, PR> IngestAdvisoriesUseCase<SDR, S, PR>
where
    SDR: SourceDocumentReader,
    S: AdvisoryStore,
    PR: ProgressReporter,
{
    pub fn new(document_reader: SDR, store: S, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            store,
            progress_reporter,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn execute(&self, request: IngestRequest) -> Result<IngestResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading errata from: {}",
            request.errata_path.display()
        ));
        let errata = self
            .document_reader
            .read_document(&request.errata_path, "errata document")?;

        let digest = content_digest(errata.as_bytes());
        if self.store.checkpoint()?.as_deref() == Some(digest.as_str()) {
            self.progress_reporter
                .report_completion("✅ Errata document unchanged since last load, nothing to do");
            return Ok(IngestResponse::Unchanged { digest });
        }

        self.progress_reporter.report(&format!(
            "📖 Loading OVAL definitions from: {}",
            request.oval_path.display()
        ));
        let oval = self
            .document_reader
            .read_document(&request.oval_path, "OVAL definitions")?;
        let parser = AdvisoryParser::new(&oval)?;
        tracing::debug!(definitions = parser.definition_count(), "OVAL definitions indexed");

        let advisories = parser.parse(&errata, |id| self.store.contains(id))?;
        self.progress_reporter
            .report(&format!("🔍 Found {} new advisory record(s)", advisories.len()));

        for (index, advisory) in advisories.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, advisories.len(), Some(advisory.id()));
            self.store.put(advisory)?;
        }

        self.store.set_checkpoint(&digest)?;
        self.progress_reporter.report_completion(&format!(
            "✅ Stored {} new advisory record(s)",
            advisories.len()
        ));

        Ok(IngestResponse::Ingested {
            digest,
            created: advisories.len(),
        })
    }
}
