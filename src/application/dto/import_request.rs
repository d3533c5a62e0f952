use crate::errata::domain::OsRelease;

/// A configured repository taking part in the import pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySelection {
    pub label: String,
    pub os_release: OsRelease,
    /// Repository id understood by the publishing tool
    pub publish_target_id: String,
}

impl RepositorySelection {
    pub fn new(
        label: impl Into<String>,
        os_release: OsRelease,
        publish_target_id: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            os_release,
            publish_target_id: publish_target_id.into(),
        }
    }
}

/// ImportRequest - Input of the matching and publishing pass
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub repositories: Vec<RepositorySelection>,
}

impl ImportRequest {
    pub fn new(repositories: Vec<RepositorySelection>) -> Self {
        Self { repositories }
    }
}
