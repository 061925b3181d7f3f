//! Claims Domain
//!
//! Read-only views of the `claims` and `insurances` tables, plus the fixed
//! accident descriptions shown next to a claim on the dashboard.

pub mod claim;
pub mod insurance;

pub use claim::{accident_description, Claim, ClaimType, GENERIC_ACCIDENT_DESCRIPTION};
pub use insurance::Insurance;
