//! errata-sync - CentOS errata ingestion and matching engine
//!
//! This library parses CentOS advisories from the errata and OVAL feeds,
//! keeps them in a Redis-backed store, and allocates each advisory to the
//! single Katello/Satellite repository that should receive it, following
//! hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`errata`): advisories, inventories, classification
//!   policies, the parser and the allocator
//! - **Application Layer** (`application`): the load and import use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Redis, Katello, pulp-admin, filesystem and
//!   console implementations of the ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use errata_sync::prelude::*;
//! use errata_sync::config::load_config_from_path;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let config = load_config_from_path(Path::new("config.yaml"))?;
//! let store = RedisAdvisoryStore::connect(&config.redis)?;
//!
//! let use_case = IngestAdvisoriesUseCase::new(
//!     FileSystemReader::new(),
//!     &store,
//!     TracingProgressReporter::new(),
//! );
//! let response = use_case.execute(IngestRequest::new(
//!     config.data_files.errata_files.clone(),
//!     config.data_files.oval_files.clone(),
//! ))?;
//! println!("{}", response.summary());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod errata;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StdoutPresenter, TracingProgressReporter};
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::network::KatelloClient;
    pub use crate::adapters::outbound::publisher::{DryRunPublisher, PulpAdminPublisher};
    pub use crate::adapters::outbound::store::RedisAdvisoryStore;
    pub use crate::application::dto::{
        ImportRequest, ImportResponse, IngestRequest, IngestResponse, RepositorySelection,
        SyncResponse,
    };
    pub use crate::application::use_cases::{
        ImportAdvisoriesUseCase, IngestAdvisoriesUseCase, SyncAdvisoriesUseCase,
    };
    pub use crate::errata::domain::{
        Advisory, AdvisoryBuilder, Allocation, ErratumPayload, OsRelease, PackageRecord,
        RepositoryInventory,
    };
    pub use crate::errata::policies::{is_source_package, matches_release};
    pub use crate::errata::services::{AdvisoryParser, Allocator, PayloadBuilder};
    pub use crate::ports::outbound::{
        AdvisoryStore, ErratumPublisher, OutputPresenter, ProgressReporter, RepositoryCatalog,
        SourceDocumentReader,
    };
    pub use crate::shared::Result;
}
