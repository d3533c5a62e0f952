use super::OsRelease;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Metadata of one RPM as listed by the repository-management API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub filename: String,
    pub name: String,
    pub version: String,
    pub release: String,
    pub epoch: String,
    pub arch: String,
    pub checksum: String,
    pub nvra: String,
    pub nvrea: String,
}

/// Snapshot of a configured repository taken at the start of an import run.
///
/// Packages are indexed by filename; the key set of that index is the
/// `package_filenames` view used for membership tests while matching, so the
/// two can never drift apart.
#[derive(Debug, Clone)]
pub struct RepositoryInventory {
    repository_id: u64,
    label: String,
    os_release: OsRelease,
    checksum_type: String,
    publish_target_id: String,
    existing_advisory_ids: HashSet<String>,
    packages: HashMap<String, PackageRecord>,
}

impl RepositoryInventory {
    pub fn new(
        repository_id: u64,
        label: impl Into<String>,
        os_release: OsRelease,
        checksum_type: impl Into<String>,
        publish_target_id: impl Into<String>,
    ) -> Self {
        Self {
            repository_id,
            label: label.into(),
            os_release,
            checksum_type: checksum_type.into(),
            publish_target_id: publish_target_id.into(),
            existing_advisory_ids: HashSet::new(),
            packages: HashMap::new(),
        }
    }

    pub fn with_existing_advisories<I>(mut self, advisory_ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.existing_advisory_ids.extend(advisory_ids);
        self
    }

    /// Indexes packages by filename; a repeated filename keeps the last record
    pub fn with_packages<I>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = PackageRecord>,
    {
        self.packages.extend(
            packages
                .into_iter()
                .map(|package| (package.filename.clone(), package)),
        );
        self
    }

    pub fn repository_id(&self) -> u64 {
        self.repository_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn os_release(&self) -> OsRelease {
        self.os_release
    }

    pub fn checksum_type(&self) -> &str {
        &self.checksum_type
    }

    /// Opaque handle the publishing tool uses to address this repository
    pub fn publish_target_id(&self) -> &str {
        &self.publish_target_id
    }

    pub fn has_advisory(&self, advisory_id: &str) -> bool {
        self.existing_advisory_ids.contains(advisory_id)
    }

    pub fn existing_advisory_count(&self) -> usize {
        self.existing_advisory_ids.len()
    }

    pub fn package(&self, filename: &str) -> Option<&PackageRecord> {
        self.packages.get(filename)
    }

    pub fn contains_package(&self, filename: &str) -> bool {
        self.packages.contains_key(filename)
    }

    pub fn package_filenames(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}

/// Inventories grouped by the OS release they serve. Within a release the
/// vector order is the repository-iteration order used for tie-breaking.
pub type InventoriesByRelease = BTreeMap<OsRelease, Vec<RepositoryInventory>>;

#[cfg(test)]
pub(crate) mod test_support {
    use super::PackageRecord;

    /// Builds a record from a filename of the form `name-version-release.arch.rpm`
    pub fn package_record(filename: &str) -> PackageRecord {
        let stem = filename.trim_end_matches(".rpm");
        let (nvr, arch) = stem.rsplit_once('.').unwrap_or((stem, "noarch"));
        let mut parts = nvr.rsplitn(3, '-');
        let release = parts.next().unwrap_or_default().to_string();
        let version = parts.next().unwrap_or_default().to_string();
        let name = parts.next().unwrap_or_default().to_string();
        PackageRecord {
            filename: filename.to_string(),
            nvra: format!("{}-{}-{}.{}", name, version, release, arch),
            nvrea: format!("{}-{}-{}-0.{}", name, version, release, arch),
            name,
            version,
            release,
            epoch: "0".to_string(),
            arch: arch.to_string(),
            checksum: format!("sha256-of-{}", filename),
        }
    }
}
