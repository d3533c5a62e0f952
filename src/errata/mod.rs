//! Domain layer: advisory records, repository inventories and the pure
//! parsing, classification, allocation and payload rules that connect them.
pub mod domain;
pub mod policies;
pub mod services;
