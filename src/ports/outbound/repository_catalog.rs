use crate::errata::domain::PackageRecord;
use crate::shared::Result;

/// Repository as listed by the repository-management API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub id: u64,
    pub label: String,
}

/// RepositoryCatalog port for the repository-management API (Katello)
///
/// Every listing must be complete: implementations walk pagination to the
/// end rather than returning the first page.
pub trait RepositoryCatalog {
    /// Lists every repository known to the server
    fn list_repositories(&self) -> Result<Vec<RemoteRepository>>;

    /// Returns the checksum type the repository identifies packages with
    fn checksum_type(&self, repository_id: u64) -> Result<String>;

    /// Lists the ids of the advisories already present in the repository
    fn list_advisory_ids(&self, repository_id: u64) -> Result<Vec<String>>;

    /// Lists every package in the repository
    fn list_packages(&self, repository_id: u64) -> Result<Vec<PackageRecord>>;
}
