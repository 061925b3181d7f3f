//! Application Domain
//!
//! Read-only views of the `applications` and `vehicles` tables. An
//! application carries the applicant's personal data and the precomputed
//! risk values; its vehicle is looked up separately by application id.

pub mod application;
pub mod vehicle;

pub use application::Application;
pub use vehicle::{FuelType, Vehicle};

/// Joins two optional name parts with a space, dropping missing parts
pub(crate) fn join_name(first: Option<&str>, second: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), second.unwrap_or(""))
        .trim()
        .to_string()
}
