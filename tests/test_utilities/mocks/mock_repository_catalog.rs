use errata_sync::ports::outbound::RemoteRepository;
use errata_sync::prelude::*;
use std::collections::HashMap;

/// Builds a package record from a filename of the form
/// `name-version-release.arch.rpm`
pub fn package_record(filename: &str) -> PackageRecord {
    let stem = filename.trim_end_matches(".rpm");
    let (nvr, arch) = stem.rsplit_once('.').unwrap();
    let mut parts = nvr.rsplitn(3, '-');
    let release = parts.next().unwrap().to_string();
    let version = parts.next().unwrap().to_string();
    let name = parts.next().unwrap().to_string();
    PackageRecord {
        filename: filename.to_string(),
        nvra: format!("{}-{}-{}.{}", name, version, release, arch),
        nvrea: format!("{}-{}-{}-0.{}", name, version, release, arch),
        name,
        version,
        release,
        epoch: "0".to_string(),
        arch: arch.to_string(),
        checksum: format!("checksum-of-{}", filename),
    }
}

struct ScriptedRepository {
    checksum_type: String,
    advisory_ids: Vec<String>,
    packages: Vec<PackageRecord>,
}

/// Mock RepositoryCatalog serving a fixed set of repositories
#[derive(Default)]
pub struct MockRepositoryCatalog {
    listing: Vec<RemoteRepository>,
    repositories: HashMap<u64, ScriptedRepository>,
}

#[allow(dead_code)]
impl MockRepositoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(
        mut self,
        id: u64,
        label: &str,
        existing_advisories: &[&str],
        package_filenames: &[&str],
    ) -> Self {
        self.listing.push(RemoteRepository {
            id,
            label: label.to_string(),
        });
        self.repositories.insert(
            id,
            ScriptedRepository {
                checksum_type: "sha256".to_string(),
                advisory_ids: existing_advisories.iter().map(|s| s.to_string()).collect(),
                packages: package_filenames.iter().map(|f| package_record(f)).collect(),
            },
        );
        self
    }

    fn repository(&self, id: u64) -> Result<&ScriptedRepository> {
        self.repositories
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("no scripted repository {}", id))
    }
}

impl RepositoryCatalog for MockRepositoryCatalog {
    fn list_repositories(&self) -> Result<Vec<RemoteRepository>> {
        Ok(self.listing.clone())
    }

    fn checksum_type(&self, repository_id: u64) -> Result<String> {
        Ok(self.repository(repository_id)?.checksum_type.clone())
    }

    fn list_advisory_ids(&self, repository_id: u64) -> Result<Vec<String>> {
        Ok(self.repository(repository_id)?.advisory_ids.clone())
    }

    fn list_packages(&self, repository_id: u64) -> Result<Vec<PackageRecord>> {
        Ok(self.repository(repository_id)?.packages.clone())
    }
}
