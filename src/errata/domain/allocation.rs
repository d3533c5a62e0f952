use super::{OsRelease, PackageRecord, RepositoryInventory};

/// The single (release, repository) pair an advisory is published to in a
/// run, together with the repository's records for the matched packages.
#[derive(Debug, Clone)]
pub struct Allocation<'a> {
    pub os_release: OsRelease,
    pub repository: &'a RepositoryInventory,
    pub packages: Vec<&'a PackageRecord>,
}

impl<'a> Allocation<'a> {
    pub fn repository_id(&self) -> u64 {
        self.repository.repository_id()
    }

    pub fn repository_label(&self) -> &'a str {
        self.repository.label()
    }
}
