use serde::Serialize;

/// Value written to the trailing column of every package row
pub const PACKAGE_ROW_PLACEHOLDER: &str = "N/A";

/// Status every published erratum is created with
pub const ERRATUM_STATUS: &str = "final";

/// One line of the package-list CSV, in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRow {
    pub name: String,
    pub version: String,
    pub release: String,
    pub epoch: String,
    pub arch: String,
    pub filename: String,
    pub checksum: String,
    pub checksum_type: String,
    pub placeholder: String,
}

/// One line of the reference-list CSV, in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    pub reference: String,
    pub advisory_type: String,
    pub advisory_id: String,
    pub synopsis: String,
}

/// Complete input for the external publishing tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErratumPayload {
    pub advisory_id: String,
    pub title: String,
    pub description: String,
    pub version: String,
    /// OS-release-qualified release tag, e.g. `el7`
    pub release_tag: String,
    pub advisory_type: String,
    pub severity: String,
    pub status: &'static str,
    pub issued: String,
    pub updated: String,
    pub contact_email: String,
    pub repository_label: String,
    pub publish_target_id: String,
    pub packages: Vec<PackageRow>,
    pub references: Vec<ReferenceRow>,
}
