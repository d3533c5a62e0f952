//! Builds [`Advisory`] records from the CentOS errata feed and the Red Hat
//! OVAL definitions feed.
//!
//! The errata document is a flat list of elements whose tag is the advisory
//! id with `:` spelled `--` (XML names cannot contain colons):
//!
//! ```xml
//! <opt>
//!   <CESA-2019--1234 synopsis="..." issue_date="..." release="1" from="..."
//!                    type="Security Advisory" severity="Important" references="url url">
//!     <os_release>7</os_release>
//!     <packages>foo-1.0-1.el7.x86_64.rpm</packages>
//!   </CESA-2019--1234>
//! </opt>
//! ```
//!
//! Security advisories have a companion OVAL definition whose description is
//! richer than anything in the errata feed.

use crate::errata::domain::{Advisory, AdvisoryBuilder, OsRelease};
use crate::shared::error::ErrataError;
use crate::shared::Result;
use regex::Regex;
use roxmltree::{Document, Node};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Tag/id prefix shared by every CentOS advisory (CESA, CEBA, CEEA)
pub const ADVISORY_ID_PREFIX: &str = "CE";

pub const OVAL_NAMESPACE: &str = "http://oval.mitre.org/XMLSchema/oval-definitions-5";

const OVAL_RHSA_PREFIX: &str = "oval:com.redhat.rhsa:def:";

static SECURITY_ADVISORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^CESA-(\d+):(\d+)").expect("unable to compile security advisory regex")
});

/// Converts a document tag into the canonical advisory id
/// (`CESA-2019--1234` -> `CESA-2019:1234`).
pub fn canonical_advisory_id(tag: &str) -> String {
    tag.replace("--", ":")
}

/// OVAL definition id describing a security advisory, `None` for bugfix and
/// enhancement advisories.
pub fn oval_definition_id(advisory_id: &str) -> Option<String> {
    let caps = SECURITY_ADVISORY_RE.captures(advisory_id)?;
    let number: u32 = caps.get(2)?.as_str().parse().ok()?;
    Some(format!(
        "{}{}{:04}",
        OVAL_RHSA_PREFIX,
        caps.get(1)?.as_str(),
        number
    ))
}

pub struct AdvisoryParser {
    oval_descriptions: HashMap<String, String>,
}

impl AdvisoryParser {
    /// Indexes the OVAL definitions document by definition id.
    pub fn new(oval_xml: &str) -> Result<Self> {
        let document = Document::parse(oval_xml).map_err(|e| ErrataError::SourceParse {
            document: "OVAL definitions document".to_string(),
            details: e.to_string(),
        })?;

        let oval_descriptions = document
            .descendants()
            .filter(|node| node.has_tag_name((OVAL_NAMESPACE, "definition")))
            .filter_map(|definition| {
                let id = definition.attribute("id")?;
                let description = oval_child(definition, "metadata")
                    .and_then(|metadata| oval_child(metadata, "description"))?
                    .text()?;
                Some((id.to_string(), description.to_string()))
            })
            .collect();

        Ok(Self { oval_descriptions })
    }

    pub fn definition_count(&self) -> usize {
        self.oval_descriptions.len()
    }

    /// Parses every advisory of `errata_xml` that `is_known` does not report
    /// as already stored.
    ///
    /// The whole document is parsed before anything is returned, so a
    /// malformed entry fails the pass without yielding partial results.
    pub fn parse<F>(&self, errata_xml: &str, mut is_known: F) -> Result<Vec<Advisory>>
    where
        F: FnMut(&str) -> Result<bool>,
    {
        let document = Document::parse(errata_xml).map_err(|e| ErrataError::SourceParse {
            document: "errata document".to_string(),
            details: e.to_string(),
        })?;

        let mut seen = HashSet::new();
        let mut advisories = Vec::new();

        for entry in document.root_element().children().filter(Node::is_element) {
            let tag = entry.tag_name().name();
            if !tag.starts_with(ADVISORY_ID_PREFIX) {
                tracing::debug!(tag, "skipping entry: not a CentOS advisory");
                continue;
            }

            let id = canonical_advisory_id(tag);
            if !seen.insert(id.clone()) {
                tracing::debug!(advisory = %id, "skipping entry: duplicate in document");
                continue;
            }
            if is_known(&id)? {
                tracing::debug!(advisory = %id, "skipping entry: already in store");
                continue;
            }

            tracing::debug!(advisory = %id, "retrieving advisory data");
            advisories.push(self.parse_entry(entry, id)?);
        }

        Ok(advisories)
    }

    fn parse_entry(&self, entry: Node<'_, '_>, id: String) -> Result<Advisory> {
        let attribute = |name: &str| required_attribute(entry, &id, name);
        let synopsis = attribute("synopsis")?.replace(',', ";");
        let issue_date = attribute("issue_date")?;
        let release = attribute("release")?;
        let contact_email = attribute("from")?;
        let advisory_type = attribute("type")?;
        let references = attribute("references")?;

        let mut builder = AdvisoryBuilder::new(id);
        builder
            .synopsis(synopsis)
            .issue_date(issue_date)
            .release(release)
            .contact_email(contact_email)
            .advisory_type(advisory_type);

        if let Some(severity) = entry.attribute("severity").filter(|s| !s.is_empty()) {
            builder.severity(severity);
        }
        for reference in references.split_whitespace() {
            builder.add_reference(reference);
        }

        for child in entry.children().filter(Node::is_element) {
            let text = child.text().map(str::trim).unwrap_or_default();
            match child.tag_name().name() {
                "os_release" => {
                    let os_release: OsRelease =
                        text.parse().map_err(|_| ErrataError::SourceParse {
                            document: "errata document".to_string(),
                            details: format!(
                                "advisory {} has an invalid os_release '{}'",
                                builder.id(),
                                text
                            ),
                        })?;
                    builder.add_os_release(os_release);
                }
                "packages" if !text.is_empty() => {
                    builder.add_package(text);
                }
                _ => {}
            }
        }

        if let Some(oval_id) = oval_definition_id(builder.id()) {
            match self.oval_descriptions.get(&oval_id) {
                Some(description) => {
                    tracing::debug!(advisory = builder.id(), oval_id = %oval_id, "OVAL definition found");
                    builder.description(description.as_str());
                }
                None => {
                    tracing::debug!(advisory = builder.id(), oval_id = %oval_id, "no OVAL definition");
                }
            }
        }

        builder.build()
    }
}

fn required_attribute<'a>(entry: Node<'a, '_>, advisory: &str, name: &str) -> Result<&'a str> {
    entry.attribute(name).ok_or_else(|| {
        ErrataError::MissingAttribute {
            advisory: advisory.to_string(),
            attribute: name.to_string(),
        }
        .into()
    })
}

fn oval_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.has_tag_name((OVAL_NAMESPACE, name)))
}
