use errata_sync::prelude::*;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct StoreState {
    values: BTreeMap<String, String>,
    checkpoint: Option<String>,
    writes: usize,
}

/// In-memory AdvisoryStore keeping advisories as serialized JSON blobs
#[derive(Default, Clone)]
pub struct MockAdvisoryStore {
    state: Arc<Mutex<StoreState>>,
}

#[allow(dead_code)]
impl MockAdvisoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advisory(self, advisory: &Advisory) -> Self {
        self.put(advisory).unwrap();
        self.state.lock().unwrap().writes = 0;
        self
    }

    /// Number of advisory writes since creation
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn ids(&self) -> Vec<String> {
        self.state.lock().unwrap().values.keys().cloned().collect()
    }

    pub fn raw(&self, id: &str) -> Option<String> {
        self.state.lock().unwrap().values.get(id).cloned()
    }

    pub fn checkpoint_value(&self) -> Option<String> {
        self.state.lock().unwrap().checkpoint.clone()
    }
}

impl AdvisoryStore for MockAdvisoryStore {
    fn get(&self, id: &str) -> Result<Option<Advisory>> {
        let state = self.state.lock().unwrap();
        match state.values.get(id) {
            Some(value) => Ok(Some(serde_json::from_str(value)?)),
            None => Ok(None),
        }
    }

    fn put(&self, advisory: &Advisory) -> Result<()> {
        let value = serde_json::to_string(advisory)?;
        let mut state = self.state.lock().unwrap();
        state.values.insert(advisory.id().to_string(), value);
        state.writes += 1;
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .values
            .keys()
            .filter(|id| id.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn checkpoint(&self) -> Result<Option<String>> {
        Ok(self.checkpoint_value())
    }

    fn set_checkpoint(&self, digest: &str) -> Result<()> {
        self.state.lock().unwrap().checkpoint = Some(digest.to_string());
        Ok(())
    }
}
