//! Process configuration, read from the environment at startup.

pub mod loader;

pub use loader::*;

use std::net::SocketAddr;

/// Backend holding the subjects table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Schema that holds the `subjects` table.
    pub schema: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Create the target database before connecting when it is missing.
    pub create_database: bool,
    pub store: StoreKind,
}
