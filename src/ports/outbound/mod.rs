/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach the
/// advisory cache, the repository-management API, the publishing tool, the
/// filesystem and the console.
pub mod advisory_store;
pub mod erratum_publisher;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_catalog;
pub mod source_document_reader;

pub use advisory_store::{AdvisoryStore, CHECKPOINT_KEY};
pub use erratum_publisher::ErratumPublisher;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_catalog::{RemoteRepository, RepositoryCatalog};
pub use source_document_reader::SourceDocumentReader;
