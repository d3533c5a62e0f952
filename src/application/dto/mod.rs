/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod import_request;
mod import_response;
mod ingest_request;
mod ingest_response;
mod sync_response;

pub use import_request::{ImportRequest, RepositorySelection};
pub use import_response::{ImportResponse, PublishFailure, RepositoryTally};
pub use ingest_request::IngestRequest;
pub use ingest_response::IngestResponse;
pub use sync_response::SyncResponse;
