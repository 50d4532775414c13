//! Team presentation order randomizer
//!
//! An authenticated operator draws unpresented teams at random, confirms or
//! skips them, and resets the round. This library holds the domain model,
//! the selection engine, the SQLite adapters, and the HTTP API.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
