use crate::errata::policies::{is_source_package, matches_release};
use crate::shared::error::ErrataError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Integer major version of the target operating system (5, 6, 7, ...)
pub type OsRelease = u32;

/// Severity applied when the advisory document carries none
pub const DEFAULT_SEVERITY: &str = "Low";

/// Release-specific package subset of an advisory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePackages {
    pub packages: Vec<String>,
}

/// Canonical advisory record, keyed by its external id (`CESA-2019:1234`).
///
/// Instances are produced by [`AdvisoryBuilder`] or deserialized from the
/// advisory store and are read-only afterwards. The serialized form uses the
/// field names below verbatim; every sequence is always present, so an empty
/// list and a missing field stay distinguishable.
///
/// Invariants:
/// - every key of `packages_by_os_release` is listed in `os_releases`
/// - every package in a release subset also appears in `all_packages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    id: String,
    synopsis: String,
    description: String,
    issue_date: String,
    advisory_type: String,
    severity: String,
    contact_email: String,
    release: String,
    references: Vec<String>,
    os_releases: Vec<OsRelease>,
    all_packages: Vec<String>,
    packages_by_os_release: BTreeMap<OsRelease, ReleasePackages>,
}

impl Advisory {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn issue_date(&self) -> &str {
        &self.issue_date
    }

    pub fn advisory_type(&self) -> &str {
        &self.advisory_type
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// The advisory's own revision counter
    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// OS releases in document order
    pub fn os_releases(&self) -> &[OsRelease] {
        &self.os_releases
    }

    pub fn all_packages(&self) -> &[String] {
        &self.all_packages
    }

    /// Binary packages built for `os_release`, or `None` when the advisory
    /// does not target that release at all.
    pub fn packages_for_os_release(&self, os_release: OsRelease) -> Option<&[String]> {
        self.packages_by_os_release
            .get(&os_release)
            .map(|subset| subset.packages.as_slice())
    }

    pub fn packages_by_os_release(&self) -> &BTreeMap<OsRelease, ReleasePackages> {
        &self.packages_by_os_release
    }
}

/// Incrementally collects advisory fields during a single parse pass and
/// yields an immutable [`Advisory`] once every required field is set.
#[derive(Debug, Clone)]
pub struct AdvisoryBuilder {
    id: String,
    synopsis: Option<String>,
    description: Option<String>,
    issue_date: Option<String>,
    advisory_type: Option<String>,
    severity: Option<String>,
    contact_email: Option<String>,
    release: Option<String>,
    references: Vec<String>,
    os_releases: Vec<OsRelease>,
    all_packages: Vec<String>,
    packages_by_os_release: BTreeMap<OsRelease, ReleasePackages>,
}

impl AdvisoryBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            synopsis: None,
            description: None,
            issue_date: None,
            advisory_type: None,
            severity: None,
            contact_email: None,
            release: None,
            references: Vec::new(),
            os_releases: Vec::new(),
            all_packages: Vec::new(),
            packages_by_os_release: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn synopsis(&mut self, synopsis: impl Into<String>) -> &mut Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    /// Sets the description. Empty text is ignored so that the synopsis
    /// fallback in [`build`](Self::build) still applies.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.description = Some(description);
        }
        self
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn issue_date(&mut self, issue_date: impl Into<String>) -> &mut Self {
        self.issue_date = Some(issue_date.into());
        self
    }

    pub fn advisory_type(&mut self, advisory_type: impl Into<String>) -> &mut Self {
        self.advisory_type = Some(advisory_type.into());
        self
    }

    pub fn severity(&mut self, severity: impl Into<String>) -> &mut Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn contact_email(&mut self, contact_email: impl Into<String>) -> &mut Self {
        self.contact_email = Some(contact_email.into());
        self
    }

    pub fn release(&mut self, release: impl Into<String>) -> &mut Self {
        self.release = Some(release.into());
        self
    }

    pub fn add_reference(&mut self, reference: impl Into<String>) -> &mut Self {
        self.references.push(reference.into());
        self
    }

    /// Records an OS release and opens an empty package subset for it.
    /// Repeated releases are ignored.
    pub fn add_os_release(&mut self, os_release: OsRelease) -> &mut Self {
        if !self.os_releases.contains(&os_release) {
            self.os_releases.push(os_release);
            self.packages_by_os_release
                .insert(os_release, ReleasePackages::default());
        }
        self
    }

    /// Adds a package filename and files it under every release recorded so
    /// far whose dist tag it carries. Source packages only land in
    /// `all_packages`.
    pub fn add_package(&mut self, filename: impl Into<String>) -> &mut Self {
        let filename = filename.into();
        if !is_source_package(&filename) {
            for os_release in &self.os_releases {
                if matches_release(&filename, *os_release) {
                    if let Some(subset) = self.packages_by_os_release.get_mut(os_release) {
                        subset.packages.push(filename.clone());
                    }
                }
            }
        }
        self.all_packages.push(filename);
        self
    }

    /// Finishes the record.
    ///
    /// `severity` falls back to [`DEFAULT_SEVERITY`] and `description` to the
    /// synopsis; every other scalar field must have been set.
    pub fn build(self) -> Result<Advisory> {
        let id = self.id;
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or_else(|| ErrataError::IncompleteAdvisory {
                id: id.clone(),
                field,
            })
        };

        let synopsis = require(self.synopsis, "synopsis")?;
        let issue_date = require(self.issue_date, "issue_date")?;
        let advisory_type = require(self.advisory_type, "advisory_type")?;
        let contact_email = require(self.contact_email, "contact_email")?;
        let release = require(self.release, "release")?;
        let description = self.description.unwrap_or_else(|| synopsis.clone());
        let severity = self
            .severity
            .unwrap_or_else(|| DEFAULT_SEVERITY.to_string());

        Ok(Advisory {
            id,
            synopsis,
            description,
            issue_date,
            advisory_type,
            severity,
            contact_email,
            release,
            references: self.references,
            os_releases: self.os_releases,
            all_packages: self.all_packages,
            packages_by_os_release: self.packages_by_os_release,
        })
    }
}
