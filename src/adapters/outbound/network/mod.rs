/// Network adapters for the repository-management API
mod katello_client;

pub use katello_client::KatelloClient;
