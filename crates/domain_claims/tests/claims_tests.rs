//! Tests for domain_claims records and descriptions

use serde_json::json;

use core_kernel::{ApplicationId, ClaimId, InsuranceId};
use domain_claims::{accident_description, Claim, ClaimType, Insurance, GENERIC_ACCIDENT_DESCRIPTION};

// ============================================================================
// Accident description tests
// ============================================================================

mod description_tests {
    use super::*;

    #[test]
    fn test_collision_description() {
        assert_eq!(
            accident_description(Some("collision")),
            "Vehicle collision occurred resulting in damage to the insured vehicle. Incident requires assessment of damage and liability."
        );
    }

    #[test]
    fn test_theft_description() {
        assert_eq!(
            accident_description(Some("theft")),
            "Vehicle was reported stolen. Case requires police report and investigation of circumstances."
        );
    }

    #[test]
    fn test_each_known_type_has_its_own_description() {
        for kind in ClaimType::ALL {
            let text = accident_description(Some(kind.code()));
            assert_ne!(text, GENERIC_ACCIDENT_DESCRIPTION);
            assert_eq!(text, kind.description());
        }
    }

    #[test]
    fn test_unrecognized_type_falls_back() {
        assert_eq!(
            accident_description(Some("meteor_strike")),
            "Claim requires investigation and assessment of damages."
        );
    }

    #[test]
    fn test_missing_type_falls_back() {
        assert_eq!(accident_description(None), GENERIC_ACCIDENT_DESCRIPTION);
    }
}

// ============================================================================
// Record decoding tests
// ============================================================================

mod record_tests {
    use super::*;

    #[test]
    fn test_claim_from_full_row() {
        let claim: Claim = serde_json::from_value(json!({
            "id": 5,
            "insurance_id": 10,
            "application_id": 20,
            "claim_type": "vandalism",
            "approval_status": "pending",
            "created_at": "2024-03-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(claim.id, ClaimId::new(5));
        assert_eq!(claim.insurance_id, Some(InsuranceId::new(10)));
        assert_eq!(claim.application_id, Some(ApplicationId::new(20)));
        assert_eq!(claim.kind(), Some(ClaimType::Vandalism));
        assert_eq!(claim.accident_description(), ClaimType::Vandalism.description());
    }

    #[test]
    fn test_claim_with_null_references() {
        let claim: Claim = serde_json::from_value(json!({
            "id": 6,
            "insurance_id": null,
            "claim_type": null
        }))
        .unwrap();

        assert!(claim.insurance_id.is_none());
        assert!(claim.application_id.is_none());
        assert!(claim.kind().is_none());
        assert_eq!(claim.accident_description(), GENERIC_ACCIDENT_DESCRIPTION);
    }

    #[test]
    fn test_claim_without_id_is_rejected() {
        let result = serde_json::from_value::<Claim>(json!({"claim_type": "theft"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_insurance_from_row() {
        let insurance: Insurance = serde_json::from_value(json!({
            "insurance_id": 10,
            "insurance_type": "Comprehensive",
            "date_end": "2025-12-31T00:00:00",
            "policy_number": "P-1"
        }))
        .unwrap();

        assert_eq!(insurance.insurance_id, InsuranceId::new(10));
        assert_eq!(insurance.insurance_type.as_deref(), Some("Comprehensive"));
        assert_eq!(insurance.date_end.as_deref(), Some("2025-12-31T00:00:00"));
    }
}

// ============================================================================
// Property tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_uppercase_codes_are_not_recognized(code in "[A-Z_]{1,20}") {
            prop_assert_eq!(accident_description(Some(&code)), GENERIC_ACCIDENT_DESCRIPTION);
        }

        #[test]
        fn prop_description_is_never_empty(code in ".{0,30}") {
            prop_assert!(!accident_description(Some(&code)).is_empty());
        }
    }
}
