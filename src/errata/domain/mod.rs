pub mod advisory;
pub mod allocation;
pub mod inventory;
pub mod payload;

pub use advisory::{Advisory, AdvisoryBuilder, OsRelease, ReleasePackages, DEFAULT_SEVERITY};
pub use allocation::Allocation;
pub use inventory::{InventoriesByRelease, PackageRecord, RepositoryInventory};
pub use payload::{
    ErratumPayload, PackageRow, ReferenceRow, ERRATUM_STATUS, PACKAGE_ROW_PLACEHOLDER,
};
