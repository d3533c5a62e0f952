//! Decides which single repository claims an advisory.
//!
//! Search order is the advisory's own release order, then the
//! repository order within that release. The first repository sharing at
//! least one binary package with the advisory's release subset wins and
//! ends the search. A repository that already carries the advisory ends the
//! search for that release without an allocation.

use crate::errata::domain::{Advisory, Allocation, InventoriesByRelease, PackageRecord};

pub struct Allocator;

impl Allocator {
    /// Returns the allocation for `advisory`, or `None` when no configured
    /// repository needs it in this run.
    pub fn allocate<'a>(
        advisory: &Advisory,
        inventories: &'a InventoriesByRelease,
    ) -> Option<Allocation<'a>> {
        if advisory.os_releases().is_empty() {
            tracing::debug!(advisory = advisory.id(), "no OS release, skipping");
            return None;
        }

        for &os_release in advisory.os_releases() {
            let packages = match advisory.packages_for_os_release(os_release) {
                Some(packages) if !packages.is_empty() => packages,
                _ => continue,
            };
            let Some(repositories) = inventories.get(&os_release) else {
                continue;
            };

            for repository in repositories {
                if repository.has_advisory(advisory.id()) {
                    tracing::debug!(
                        advisory = advisory.id(),
                        repository = repository.label(),
                        "already present, skipping release {}",
                        os_release
                    );
                    break;
                }

                let matched: Vec<&PackageRecord> = packages
                    .iter()
                    .filter_map(|filename| repository.package(filename))
                    .collect();

                if !matched.is_empty() {
                    tracing::debug!(
                        advisory = advisory.id(),
                        repository = repository.label(),
                        os_release,
                        packages = matched.len(),
                        "allocated"
                    );
                    return Some(Allocation {
                        os_release,
                        repository,
                        packages: matched,
                    });
                }
            }
        }

        None
    }
}
