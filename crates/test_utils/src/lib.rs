//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! dashboard API test suite.
//!
//! # Modules
//!
//! - `memory_store`: In-memory row store with failure injection
//! - `random`: Deterministic random sources
//! - `fixtures`: Pre-built rows for every table
//! - `assertions`: Format assertions for synthetic fields
//! - `generators`: Property-based test data generators

pub mod memory_store;
pub mod random;
pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use memory_store::*;
pub use random::*;
pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
