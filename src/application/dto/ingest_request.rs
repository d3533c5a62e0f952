use std::path::PathBuf;

/// IngestRequest - Input of the loader pass
#[derive(Debug, Clone)]
pub struct IngestRequest {
    /// Errata document; its digest gates the whole pass
    pub errata_path: PathBuf,
    /// OVAL definitions supplying security advisory descriptions
    pub oval_path: PathBuf,
}

impl IngestRequest {
    pub fn new(errata_path: impl Into<PathBuf>, oval_path: impl Into<PathBuf>) -> Self {
        Self {
            errata_path: errata_path.into(),
            oval_path: oval_path.into(),
        }
    }
}
