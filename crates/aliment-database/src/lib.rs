//! # aliment-database
//!
//! SQLite connection management, schema setup, and the aliment repository
//! contract with its concrete implementation.

pub mod connection;
pub mod repositories;
pub mod schema;

pub use connection::DatabasePool;
pub use repositories::aliment::{AlimentRepository, SqliteAlimentRepository};
