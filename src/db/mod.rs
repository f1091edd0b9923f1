//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, one per query
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the `AccountStore` over a sqlx pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AccountSummary, KeyRow, RemovedAccount};
pub use schema::SQLITE_INIT;
pub use sqlite::{AccountStore, SqlitePool};
