//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Database connection (db) and demo data (seed)
//! - Repository implementations (repositories)
//! - Application state (state)
//! - HTTP server setup (server)

pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
