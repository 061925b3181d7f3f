//! Tests for score normalization, synthetic fields and assessments

use proptest::prelude::*;
use serde_json::json;

use core_kernel::{SeededRandom, ThreadRandom};
use domain_application::{Application, FuelType, Vehicle};
use domain_risk::*;
use test_utils::{
    assert_co2_in_range, assert_license_format, assert_vin_format, construction_year_strategy,
    fuel_type_strategy, optional_risk_score_strategy, risk_score_strategy, FixedRandom,
    ScriptedRandom,
};

// ============================================================================
// Normalization Tests
// ============================================================================

mod normalize_tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(normalize_risk_score(Some(0.0), &ThreadRandom), 1);
        assert_eq!(normalize_risk_score(Some(1.0), &ThreadRandom), 10);
    }

    #[test]
    fn test_midpoint_rounds_half_to_even() {
        // 1 + 0.5 * 9 = 5.5
        assert_eq!(normalize_risk_score(Some(0.5), &ThreadRandom), 6);
    }

    #[test]
    fn test_out_of_range_scores_are_not_clamped() {
        assert_eq!(normalize_risk_score(Some(2.0), &ThreadRandom), 19);
        assert_eq!(normalize_risk_score(Some(-1.0), &ThreadRandom), -8);
    }

    #[test]
    fn test_missing_score_draws_from_target_range() {
        assert_eq!(normalize_risk_score(None, &FixedRandom::Low), 1);
        assert_eq!(normalize_risk_score(None, &FixedRandom::High), 10);
        assert_eq!(normalize_risk_score(None, &ScriptedRandom::new([7])), 7);
    }

    #[test]
    fn test_present_score_consumes_no_randomness() {
        let rng = ScriptedRandom::new([3]);
        normalize_risk_score(Some(0.2), &rng);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_custom_scale() {
        let scale = RiskScale::new((0.0, 100.0), (0, 5)).unwrap();
        assert_eq!(scale.rescale(100.0), 5);
        assert_eq!(scale.rescale(50.0), 2);
        assert_eq!(scale.normalize(None, &FixedRandom::High), 5);
    }

    proptest! {
        #[test]
        fn prop_scores_in_unit_interval_map_into_one_to_ten(score in risk_score_strategy()) {
            let normalized = normalize_risk_score(Some(score), &ThreadRandom);
            prop_assert!((1..=10).contains(&normalized));
        }

        #[test]
        fn prop_missing_scores_stay_in_range(seed in any::<u64>()) {
            let rng = SeededRandom::new(seed);
            for _ in 0..20 {
                let normalized = normalize_risk_score(None, &rng);
                prop_assert!((1..=10).contains(&normalized));
            }
        }

        #[test]
        fn prop_normalization_is_monotonic(a in risk_score_strategy(), b in risk_score_strategy()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                normalize_risk_score(Some(low), &ThreadRandom)
                    <= normalize_risk_score(Some(high), &ThreadRandom)
            );
        }

        #[test]
        fn prop_optional_scores_stay_in_range(score in optional_risk_score_strategy()) {
            let normalized = normalize_risk_score(score, &ThreadRandom);
            prop_assert!((1..=10).contains(&normalized));
        }
    }
}

// ============================================================================
// Synthetic Field Tests
// ============================================================================

mod synthetic_tests {
    use super::*;

    #[test]
    fn test_co2_electric_and_missing_are_zero() {
        assert_eq!(co2_emissions(Some(FuelType::Electric), &FixedRandom::High), "0g/km");
        assert_eq!(co2_emissions(None, &FixedRandom::High), "0g/km");
    }

    #[test]
    fn test_co2_diesel_bounds() {
        assert_eq!(co2_emissions(Some(FuelType::Diesel), &FixedRandom::Low), "120g/km");
        assert_eq!(co2_emissions(Some(FuelType::Diesel), &FixedRandom::High), "200g/km");
    }

    #[test]
    fn test_co2_other_fuel_bounds() {
        assert_eq!(co2_emissions(Some(FuelType::Combustion), &FixedRandom::Low), "95g/km");
        assert_eq!(co2_emissions(Some(FuelType::Combustion), &FixedRandom::High), "165g/km");
    }

    proptest! {
        #[test]
        fn prop_co2_matches_fuel(raw in fuel_type_strategy(), seed in any::<u64>()) {
            let rng = SeededRandom::new(seed);
            let fuel = raw.as_deref().and_then(FuelType::parse);
            let co2 = co2_emissions(fuel, &rng);
            match fuel {
                None | Some(FuelType::Electric) => prop_assert_eq!(co2, "0g/km"),
                Some(FuelType::Diesel) => { assert_co2_in_range(&co2, 120, 200); }
                Some(FuelType::Combustion) => { assert_co2_in_range(&co2, 95, 165); }
            }
        }

        #[test]
        fn prop_vin_layout(seed in any::<u64>()) {
            assert_vin_format(&generate_vin(&SeededRandom::new(seed)));
        }

        #[test]
        fn prop_license_layout(seed in any::<u64>()) {
            assert_license_format(&generate_license(&SeededRandom::new(seed)));
        }

        #[test]
        fn prop_construction_age_is_exact_when_year_known(year in construction_year_strategy()) {
            prop_assert_eq!(
                construction_year_diff(Some(year), 2026, &ThreadRandom),
                2026 - i64::from(year)
            );
        }
    }

    #[test]
    fn test_vin_uses_first_alphabet_entries_with_low_random() {
        assert_eq!(generate_vin(&FixedRandom::Low), "AAAAAAAA0AA000000");
    }

    #[test]
    fn test_license_with_scripted_letters() {
        let rng = ScriptedRandom::new([11, 4, 24, 18]);
        assert_eq!(generate_license(&rng), "License: XXXXX-LEYS-XXXXX");
    }

    #[test]
    fn test_past_claims() {
        let rng = ScriptedRandom::new([2, 4]);
        let history = past_claims(&rng);
        assert_eq!(history.incidents, 2);
        assert_eq!(history.period, "Last 4 years");

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json, json!({"incidents": 2, "period": "Last 4 years"}));
    }

    #[test]
    fn test_past_claims_bounds() {
        let low = past_claims(&FixedRandom::Low);
        assert_eq!((low.incidents, low.period.as_str()), (0, "Last 1 years"));
        let high = past_claims(&FixedRandom::High);
        assert_eq!((high.incidents, high.period.as_str()), (5, "Last 5 years"));
    }

    #[test]
    fn test_mock_status_covers_all_labels() {
        let labels: Vec<&str> = (0..4)
            .map(|i| mock_status(&ScriptedRandom::new([i])).label())
            .collect();
        assert_eq!(labels, ["Pending", "Approved", "Declined", "Further Review Required"]);
    }

    #[test]
    fn test_construction_age_missing_year() {
        assert_eq!(construction_year_diff(None, 2026, &FixedRandom::Low), 0);
        assert_eq!(construction_year_diff(None, 2026, &FixedRandom::High), 15);
    }

    #[test]
    fn test_construction_age_future_year_is_negative() {
        assert_eq!(construction_year_diff(Some(2030), 2026, &ThreadRandom), -4);
    }
}

// ============================================================================
// Assessment Tests
// ============================================================================

mod assessment_tests {
    use super::*;

    fn vehicle() -> Vehicle {
        serde_json::from_value(json!({
            "application_id": 1,
            "vehicle_manufacturer": "Volvo",
            "vehicle_model": "V60",
            "construction_year": 2019,
            "fuel_type": "diesel",
            "vehicle_risk": 1.0
        }))
        .unwrap()
    }

    fn application() -> Application {
        serde_json::from_value(json!({
            "application_id": 1,
            "first_name": "Jane",
            "last_name": "Doe",
            "age": 41,
            "driver_risk": 0.0
        }))
        .unwrap()
    }

    #[test]
    fn test_vehicle_assessment() {
        let assessment = assess_vehicle(&vehicle(), 2026, &FixedRandom::Low);

        assert_eq!(assessment.vehicle_name, "Volvo V60");
        assert_eq!(assessment.construction_year_diff, 7);
        assert_eq!(assessment.co2_emissions, "120g/km");
        assert_eq!(assessment.risk_score, 10);
        assert_vin_format(&assessment.vin);
    }

    #[test]
    fn test_driver_assessment() {
        let assessment = assess_driver(&application(), &FixedRandom::High);

        assert_eq!(assessment.name, "Jane Doe");
        assert_eq!(assessment.age, Some(41));
        assert_eq!(assessment.risk_score, 1);
        assert_eq!(assessment.past_claims.incidents, 5);
        assert_license_format(&assessment.license);
    }

    #[test]
    fn test_assessments_regenerate_identifiers() {
        let rng = SeededRandom::new(99);
        let first = assess_vehicle(&vehicle(), 2026, &rng);
        let second = assess_vehicle(&vehicle(), 2026, &rng);
        assert_ne!(first.vin, second.vin);
    }

    #[test]
    fn test_driver_assessment_serializes_expected_keys() {
        let json = serde_json::to_value(assess_driver(&application(), &FixedRandom::Low)).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["name", "license", "age", "past_claims", "risk_score"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
    }
}
