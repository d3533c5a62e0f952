use crate::ports::outbound::SourceDocumentReader;
use crate::shared::error::ErrataError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_SOURCE_DOCUMENT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the errata and OVAL feeds
///
/// Rejects symbolic links, non-regular files and oversized files before
/// reading anything.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_SOURCE_DOCUMENT_SIZE,
        }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceDocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path, description: &str) -> Result<String> {
        if !path.exists() {
            return Err(ErrataError::FileReadError {
                path: path.to_path_buf(),
                details: format!("{} does not exist", description),
            }
            .into());
        }

        let metadata = validate_regular_file(path, description)?;
        validate_file_size(metadata.len(), path, self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            ErrataError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
