use errata_sync::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock ErratumPublisher recording every payload it receives
#[derive(Default, Clone)]
pub struct MockErratumPublisher {
    published: Arc<Mutex<Vec<ErratumPayload>>>,
    rejected_ids: HashSet<String>,
}

#[allow(dead_code)]
impl MockErratumPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes publishing `advisory_id` fail like a non-zero tool exit
    pub fn rejecting(mut self, advisory_id: &str) -> Self {
        self.rejected_ids.insert(advisory_id.to_string());
        self
    }

    pub fn published(&self) -> Vec<ErratumPayload> {
        self.published.lock().unwrap().clone()
    }

    pub fn published_ids(&self) -> Vec<String> {
        self.published()
            .into_iter()
            .map(|payload| payload.advisory_id)
            .collect()
    }
}

impl ErratumPublisher for MockErratumPublisher {
    fn publish(&self, payload: &ErratumPayload) -> Result<()> {
        self.published.lock().unwrap().push(payload.clone());
        if self.rejected_ids.contains(&payload.advisory_id) {
            anyhow::bail!("pulp-admin exited with exit status: 1");
        }
        Ok(())
    }
}
