//! # accounts-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `AccountRepository` port defined in `accounts-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `accounts-app` (for port traits) and `accounts-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod account_repo;
mod error;
mod pool;

pub use account_repo::SqliteAccountRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
