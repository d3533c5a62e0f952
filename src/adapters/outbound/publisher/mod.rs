/// Publishing adapters
mod dry_run;
mod pulp_admin;

pub use dry_run::DryRunPublisher;
pub use pulp_admin::PulpAdminPublisher;
