//! Cross-cutting types: the error taxonomy, exit codes, the crate-wide
//! `Result` alias and file-access guards.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
