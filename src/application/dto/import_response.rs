use crate::errata::domain::OsRelease;

/// Number of advisories allocated to one repository during the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTally {
    pub label: String,
    pub os_release: OsRelease,
    pub count: usize,
}

/// An allocated advisory the publishing tool did not accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishFailure {
    pub advisory_id: String,
    pub repository_label: String,
    pub reason: String,
}

/// ImportResponse - Outcome of the matching and publishing pass
#[derive(Debug, Clone, Default)]
pub struct ImportResponse {
    pub advisories_considered: usize,
    pub allocated: usize,
    /// One entry per inventoried repository, release order then listing order
    pub tallies: Vec<RepositoryTally>,
    pub failures: Vec<PublishFailure>,
}

impl ImportResponse {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn tally(&self, label: &str) -> Option<usize> {
        self.tallies
            .iter()
            .find(|tally| tally.label == label)
            .map(|tally| tally.count)
    }

    /// Machine-readable stdout lines, `label count` per repository
    pub fn summary(&self) -> String {
        self.tallies
            .iter()
            .map(|tally| format!("{} {}", tally.label, tally.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
