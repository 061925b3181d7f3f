//! Core Kernel - Foundational types shared by every crate of the dashboard API
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed integer identifiers for store rows
//! - The row store port through which all data is read
//! - The injectable random source behind every synthetic field

pub mod identifiers;
pub mod ports;
pub mod random;
pub mod error;

pub use identifiers::{ApplicationId, ClaimId, InsuranceId};
pub use ports::{decode_row, Filter, PortError, Row, RowStore, Table};
pub use random::{Random, SeededRandom, ThreadRandom};
pub use error::CoreError;
