use crate::errata::domain::{
    Advisory, Allocation, ErratumPayload, PackageRow, ReferenceRow, ERRATUM_STATUS,
    PACKAGE_ROW_PLACEHOLDER,
};

/// Turns an allocation into the publishing tool's input.
pub struct PayloadBuilder;

impl PayloadBuilder {
    pub fn build(advisory: &Advisory, allocation: &Allocation<'_>) -> ErratumPayload {
        let checksum_type = allocation.repository.checksum_type();

        let packages = allocation
            .packages
            .iter()
            .map(|package| PackageRow {
                name: package.name.clone(),
                version: package.version.clone(),
                release: package.release.clone(),
                epoch: package.epoch.clone(),
                arch: package.arch.clone(),
                filename: package.filename.clone(),
                checksum: package.checksum.clone(),
                checksum_type: checksum_type.to_string(),
                placeholder: PACKAGE_ROW_PLACEHOLDER.to_string(),
            })
            .collect();

        let references = advisory
            .references()
            .iter()
            .map(|reference| ReferenceRow {
                reference: reference.clone(),
                advisory_type: advisory.advisory_type().to_string(),
                advisory_id: advisory.id().to_string(),
                synopsis: advisory.synopsis().to_string(),
            })
            .collect();

        ErratumPayload {
            advisory_id: advisory.id().to_string(),
            title: advisory.synopsis().to_string(),
            description: advisory.description().to_string(),
            version: advisory.release().to_string(),
            release_tag: format!("el{}", allocation.os_release),
            advisory_type: advisory.advisory_type().to_string(),
            severity: advisory.severity().to_string(),
            status: ERRATUM_STATUS,
            // The feed carries a single date; it doubles as the update date.
            issued: advisory.issue_date().to_string(),
            updated: advisory.issue_date().to_string(),
            contact_email: advisory.contact_email().to_string(),
            repository_label: allocation.repository_label().to_string(),
            publish_target_id: allocation.repository.publish_target_id().to_string(),
            packages,
            references,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errata::domain::inventory::test_support::package_record;
    use crate::errata::domain::{AdvisoryBuilder, RepositoryInventory};

    #[test]
    fn test_build_payload() {
        let mut builder = AdvisoryBuilder::new("CESA-2019:1234");
        builder
            .synopsis("Important CentOS foo Security Update")
            .description("foo frobnicates")
            .issue_date("2019-05-14 09:23:35")
            .advisory_type("Security Advisory")
            .severity("Important")
            .contact_email("centos-announce@centos.org")
            .release("2")
            .add_reference("https://access.redhat.com/errata/RHSA-2019:1234")
            .add_reference("https://lists.centos.org/x.html")
            .add_os_release(7)
            .add_package("foo-1.0-1.el7.x86_64.rpm");
        let advisory = builder.build().unwrap();

        let repository = RepositoryInventory::new(3, "centos7-updates", 7, "sha256", "org-c7-updates")
            .with_packages(vec![package_record("foo-1.0-1.el7.x86_64.rpm")]);
        let allocation = Allocation {
            os_release: 7,
            repository: &repository,
            packages: vec![repository.package("foo-1.0-1.el7.x86_64.rpm").unwrap()],
        };

        let payload = PayloadBuilder::build(&advisory, &allocation);

        assert_eq!(payload.advisory_id, "CESA-2019:1234");
        assert_eq!(payload.title, "Important CentOS foo Security Update");
        assert_eq!(payload.description, "foo frobnicates");
        assert_eq!(payload.version, "2");
        assert_eq!(payload.release_tag, "el7");
        assert_eq!(payload.severity, "Important");
        assert_eq!(payload.status, "final");
        assert_eq!(payload.issued, payload.updated);
        assert_eq!(payload.publish_target_id, "org-c7-updates");
        assert_eq!(payload.repository_label, "centos7-updates");

        assert_eq!(payload.packages.len(), 1);
        let row = &payload.packages[0];
        assert_eq!(row.name, "foo");
        assert_eq!(row.filename, "foo-1.0-1.el7.x86_64.rpm");
        assert_eq!(row.checksum_type, "sha256");
        assert_eq!(row.placeholder, "N/A");

        assert_eq!(payload.references.len(), 2);
        assert_eq!(
            payload.references[0],
            ReferenceRow {
                reference: "https://access.redhat.com/errata/RHSA-2019:1234".to_string(),
                advisory_type: "Security Advisory".to_string(),
                advisory_id: "CESA-2019:1234".to_string(),
                synopsis: "Important CentOS foo Security Update".to_string(),
            }
        );
    }
}
