//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the dashboard API:
//! a SQLx PostgreSQL pool and [`PgRowStore`], the adapter that answers the
//! [`core_kernel::RowStore`] port against the insurance schema.
//!
//! Rows are rendered by PostgreSQL itself (`row_to_json`), so the adapter
//! never needs to know a table's column types.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, PgRowStore, create_pool};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance")).await?;
//! let store = PgRowStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod row_store;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use row_store::PgRowStore;
