//! Risk Assessment Domain
//!
//! Builds the vehicle and driver risk assessments shown on the application
//! detail page. Only the risk score is derived from stored data; the other
//! assessment fields are synthetic placeholders regenerated on every call.
//!
//! # Risk Score
//!
//! ```text
//! stored risk in [0, 1]  --linear rescale-->  [1, 10]  --round half to even-->  score
//! missing risk                                          --uniform random-->     score
//! ```
//!
//! All randomness comes from a caller-supplied [`core_kernel::Random`].

pub mod normalize;
pub mod synthetic;
pub mod assessment;
pub mod error;

pub use normalize::{normalize_risk_score, RiskScale};
pub use synthetic::{
    co2_emissions, construction_year_diff, generate_license, generate_vin, mock_status,
    past_claims, ApplicationStatus, PastClaims,
};
pub use assessment::{assess_driver, assess_vehicle, DriverRiskAssessment, VehicleRiskAssessment};
pub use error::RiskError;
