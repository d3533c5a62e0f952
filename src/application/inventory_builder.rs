use crate::application::dto::RepositorySelection;
use crate::errata::domain::{InventoriesByRelease, RepositoryInventory};
use crate::ports::outbound::{ProgressReporter, RemoteRepository, RepositoryCatalog};
use crate::shared::error::ErrataError;
use crate::shared::Result;
use std::collections::HashMap;

/// InventoryBuilder - Snapshots the configured repositories
///
/// Every configured label is checked against the live repository listing
/// before any inventory is fetched, so an unknown label fails the run
/// without side effects. Within a release, repositories keep the order the
/// catalog lists them in.
pub struct InventoryBuilder<'a, C, PR> {
    catalog: &'a C,
    progress_reporter: &'a PR,
}

impl<'a, C, PR> InventoryBuilder<'a, C, PR>
where
    C: RepositoryCatalog,
    PR: ProgressReporter,
{
    pub fn new(catalog: &'a C, progress_reporter: &'a PR) -> Self {
        Self {
            catalog,
            progress_reporter,
        }
    }

    /// Lists the remote repositories and fails with
    /// [`ErrataError::UnknownRepository`] on the first configured label the
    /// catalog does not know. Nothing is fetched beyond the listing.
    pub fn verify_labels(&self, selections: &[RepositorySelection]) -> Result<Vec<RemoteRepository>> {
        self.progress_reporter
            .report("📡 Listing repositories from Katello...");
        let remote = self.catalog.list_repositories()?;

        for selection in selections {
            if !remote.iter().any(|repository| repository.label == selection.label) {
                return Err(ErrataError::UnknownRepository {
                    label: selection.label.clone(),
                }
                .into());
            }
        }
        Ok(remote)
    }

    pub fn build(&self, selections: &[RepositorySelection]) -> Result<InventoriesByRelease> {
        let remote = self.verify_labels(selections)?;

        let configured: HashMap<&str, &RepositorySelection> = selections
            .iter()
            .map(|selection| (selection.label.as_str(), selection))
            .collect();

        let mut seen = Vec::with_capacity(selections.len());
        let targets: Vec<_> = remote
            .iter()
            .filter_map(|repository| {
                let selection = configured.get(repository.label.as_str())?;
                if seen.contains(&repository.label) {
                    return None;
                }
                seen.push(repository.label.clone());
                Some((repository.id, *selection))
            })
            .collect();

        let mut inventories = InventoriesByRelease::new();
        for (index, (repository_id, selection)) in targets.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, targets.len(), Some(&selection.label));
            let inventory = self.fetch(*repository_id, selection)?;
            tracing::info!(
                repository = %selection.label,
                os_release = selection.os_release,
                packages = inventory.package_count(),
                errata = inventory.existing_advisory_count(),
                "repository inventoried"
            );
            inventories
                .entry(selection.os_release)
                .or_default()
                .push(inventory);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Inventoried {} repositor{}",
            targets.len(),
            if targets.len() == 1 { "y" } else { "ies" }
        ));
        Ok(inventories)
    }

    fn fetch(&self, repository_id: u64, selection: &RepositorySelection) -> Result<RepositoryInventory> {
        let checksum_type = self.catalog.checksum_type(repository_id)?;
        let advisory_ids = self.catalog.list_advisory_ids(repository_id)?;
        let packages = self.catalog.list_packages(repository_id)?;

        Ok(RepositoryInventory::new(
            repository_id,
            selection.label.clone(),
            selection.os_release,
            checksum_type,
            selection.publish_target_id.clone(),
        )
        .with_existing_advisories(advisory_ids)
        .with_packages(packages))
    }
}
