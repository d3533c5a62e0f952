//! Filename predicates deciding which advisory packages belong to which
//! OS release.
//!
//! Binary RPM filenames embed the release they were built for as a dist tag
//! (`foo-1.0-1.el7.x86_64.rpm`, `bar-2.3-4.el6_10.i686.rpm`). Source RPMs
//! carry the same tag but are never published into binary repositories, so
//! they are excluded before release matching.

use crate::errata::domain::OsRelease;
use regex::Regex;
use std::sync::LazyLock;

static SOURCE_PACKAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+\.src\.rpm").expect("unable to compile source package regex")
});

static RELEASE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:el|EL|rhel|RHEL)(\d+)").expect("unable to compile release tag regex")
});

/// Returns true for source RPM filenames (`*.src.rpm`).
pub fn is_source_package(filename: &str) -> bool {
    SOURCE_PACKAGE_RE.is_match(filename)
}

/// Iterates over the OS releases named by dist tags inside `filename`.
///
/// A tag only counts when something precedes and follows it, so a bare
/// `.el7` suffix is not a release marker.
pub fn release_tags(filename: &str) -> impl Iterator<Item = OsRelease> + '_ {
    RELEASE_TAG_RE.captures_iter(filename).filter_map(move |caps| {
        let tag = caps.get(0)?;
        if tag.start() == 0 || tag.end() >= filename.len() {
            return None;
        }
        caps.get(1)?.as_str().parse().ok()
    })
}

/// Returns true when `filename` carries a dist tag for exactly `release`.
///
/// Source packages are not excluded here; callers combine this with
/// [`is_source_package`].
pub fn matches_release(filename: &str, release: OsRelease) -> bool {
    release_tags(filename).any(|tag| tag == release)
}
