//! Tests for application and vehicle records

use serde_json::json;

use core_kernel::ApplicationId;
use domain_application::{Application, FuelType, Vehicle};

mod application_tests {
    use super::*;

    #[test]
    fn test_application_from_row() {
        let application: Application = serde_json::from_value(json!({
            "application_id": 3,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "request_type": "individual",
            "insurance_type": "Third Party",
            "age": 36,
            "vehicle_risk": 0.4,
            "driver_risk": null,
            "camunda_instance_id": "abc"
        }))
        .unwrap();

        assert_eq!(application.application_id, ApplicationId::new(3));
        assert_eq!(application.full_name(), "Ada Lovelace");
        assert_eq!(application.age, Some(36));
        assert_eq!(application.vehicle_risk, Some(0.4));
        assert!(application.driver_risk.is_none());
    }

    #[test]
    fn test_full_name_with_missing_parts() {
        let application: Application = serde_json::from_value(json!({
            "application_id": 4,
            "first_name": "Grace"
        }))
        .unwrap();
        assert_eq!(application.full_name(), "Grace");

        let nameless: Application =
            serde_json::from_value(json!({"application_id": 5})).unwrap();
        assert_eq!(nameless.full_name(), "");
    }
}

mod vehicle_tests {
    use super::*;

    #[test]
    fn test_vehicle_display_name() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "application_id": 3,
            "vehicle_manufacturer": "Volvo",
            "vehicle_model": "V60",
            "construction_year": 2019,
            "fuel_type": "Diesel"
        }))
        .unwrap();

        assert_eq!(vehicle.display_name(), "Volvo V60");
        assert_eq!(vehicle.fuel(), Some(FuelType::Diesel));
        assert_eq!(vehicle.construction_year, Some(2019));
    }

    #[test]
    fn test_vehicle_without_model() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "vehicle_manufacturer": "Tesla"
        }))
        .unwrap();

        assert_eq!(vehicle.display_name(), "Tesla");
        assert!(vehicle.fuel().is_none());
    }

    #[test]
    fn test_fuel_type_parsing() {
        assert_eq!(FuelType::parse("ELECTRIC"), Some(FuelType::Electric));
        assert_eq!(FuelType::parse("diesel"), Some(FuelType::Diesel));
        assert_eq!(FuelType::parse("petrol"), Some(FuelType::Combustion));
        assert_eq!(FuelType::parse("  "), None);
    }

    #[test]
    fn test_fuel_type_parsing_trims_whitespace() {
        assert_eq!(FuelType::parse(" electric "), Some(FuelType::Electric));
        assert_eq!(FuelType::parse("\tDiesel\n"), Some(FuelType::Diesel));
        assert_eq!(FuelType::parse(""), None);
    }
}
