pub mod package_classification;

pub use package_classification::{is_source_package, matches_release, release_tags};
