use crate::errata::domain::{Advisory, InventoriesByRelease};

/// State shared by the phases of one import run.
///
/// Created at run start and dropped at run end; nothing in it outlives the
/// process.
#[derive(Debug, Default)]
pub struct RunContext {
    pub advisories: Vec<Advisory>,
    pub inventories: InventoriesByRelease,
}

impl RunContext {
    pub fn new(advisories: Vec<Advisory>, inventories: InventoriesByRelease) -> Self {
        Self {
            advisories,
            inventories,
        }
    }

    pub fn repository_count(&self) -> usize {
        self.inventories.values().map(Vec::len).sum()
    }
}
