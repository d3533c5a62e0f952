use crate::shared::Result;
use std::path::Path;

/// SourceDocumentReader port for the errata and OVAL feeds
pub trait SourceDocumentReader {
    /// Reads a whole source document
    ///
    /// # Arguments
    /// * `path` - Location of the document
    /// * `description` - Human readable name used in error messages
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, not UTF-8, or
    /// fails the file-access guards
    fn read_document(&self, path: &Path, description: &str) -> Result<String>;
}
