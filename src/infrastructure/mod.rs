// Infrastructure layer module
// Contains the SQLite pool, repository adapters, and logging setup
// Follows Hexagonal Architecture

pub mod database;
pub mod logging;
pub mod repositories;
