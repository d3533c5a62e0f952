use sha1::{Digest, Sha1};

/// Hex-encoded SHA-1 of a source document, as stored in the ingestion
/// checkpoint
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
