//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{ApplicationId, ClaimId, InsuranceId};
use proptest::prelude::*;

/// Strategy for stored risk values inside `[0, 1]`
pub fn risk_score_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1.0f64
}

/// Strategy for stored risk values, sometimes missing
pub fn optional_risk_score_strategy() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(risk_score_strategy())
}

/// Strategy for fuel type column values, including odd casing and blanks
pub fn fuel_type_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("electric".to_string())),
        Just(Some("Electric".to_string())),
        Just(Some("diesel".to_string())),
        Just(Some("DIESEL".to_string())),
        Just(Some("petrol".to_string())),
        Just(Some("hybrid".to_string())),
        Just(Some("lpg".to_string())),
    ]
}

/// Strategy for claim type codes, known and unknown
pub fn claim_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("collision".to_string()),
        Just("theft".to_string()),
        Just("natural_disaster".to_string()),
        Just("vandalism".to_string()),
        Just("mechanical".to_string()),
        "[a-z_]{3,12}",
    ]
}

/// Strategy for construction years (1950 to 2030)
pub fn construction_year_strategy() -> impl Strategy<Value = i32> {
    1950i32..=2030i32
}

/// Strategy for generating ClaimId
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    (1i64..1_000_000i64).prop_map(ClaimId::new)
}

/// Strategy for generating InsuranceId
pub fn insurance_id_strategy() -> impl Strategy<Value = InsuranceId> {
    (1i64..1_000_000i64).prop_map(InsuranceId::new)
}

/// Strategy for generating ApplicationId
pub fn application_id_strategy() -> impl Strategy<Value = ApplicationId> {
    (1i64..1_000_000i64).prop_map(ApplicationId::new)
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}
