/// Use cases module containing application business logic orchestration
mod import_advisories;
mod ingest_advisories;
mod sync_advisories;

pub use import_advisories::ImportAdvisoriesUseCase;
pub use ingest_advisories::IngestAdvisoriesUseCase;
pub use sync_advisories::SyncAdvisoriesUseCase;
