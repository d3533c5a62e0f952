/// Mock implementations for testing
mod mock_advisory_store;
mod mock_erratum_publisher;
mod mock_progress_reporter;
mod mock_repository_catalog;

pub use mock_advisory_store::MockAdvisoryStore;
pub use mock_erratum_publisher::MockErratumPublisher;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_catalog::{package_record, MockRepositoryCatalog};
