pub mod advisory_parser;
pub mod allocator;
pub mod content_digest;
pub mod payload_builder;

pub use advisory_parser::{
    canonical_advisory_id, oval_definition_id, AdvisoryParser, ADVISORY_ID_PREFIX,
};
pub use allocator::Allocator;
pub use content_digest::content_digest;
pub use payload_builder::PayloadBuilder;
