use crate::errata::domain::Advisory;
use crate::shared::Result;

/// Key of the idempotency checkpoint holding the digest of the last
/// successfully ingested errata document
pub const CHECKPOINT_KEY: &str = "errata_file_hash";

/// AdvisoryStore port for the persistent advisory cache
///
/// Advisories are stored under their id; a single reserved key holds the
/// ingestion checkpoint. Implementations decide the serialized form.
pub trait AdvisoryStore {
    /// Fetches an advisory, `None` when the id is unknown
    ///
    /// # Errors
    /// Returns an error if the store is unreachable or the stored value
    /// cannot be decoded
    fn get(&self, id: &str) -> Result<Option<Advisory>>;

    /// Returns true when an advisory is stored under `id`
    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Stores an advisory under its id, replacing any previous value
    fn put(&self, advisory: &Advisory) -> Result<()>;

    /// Lists the ids of every stored advisory starting with `prefix`
    fn scan(&self, prefix: &str) -> Result<Vec<String>>;

    /// Reads the digest recorded by the last completed ingestion pass
    fn checkpoint(&self) -> Result<Option<String>>;

    /// Records the digest of a completed ingestion pass
    fn set_checkpoint(&self, digest: &str) -> Result<()>;
}

impl<T: AdvisoryStore + ?Sized> AdvisoryStore for &T {
    fn get(&self, id: &str) -> Result<Option<Advisory>> {
        (**self).get(id)
    }

    fn contains(&self, id: &str) -> Result<bool> {
        (**self).contains(id)
    }

    fn put(&self, advisory: &Advisory) -> Result<()> {
        (**self).put(advisory)
    }

    fn scan(&self, prefix: &str) -> Result<Vec<String>> {
        (**self).scan(prefix)
    }

    fn checkpoint(&self) -> Result<Option<String>> {
        (**self).checkpoint()
    }

    fn set_checkpoint(&self, digest: &str) -> Result<()> {
        (**self).set_checkpoint(digest)
    }
}
