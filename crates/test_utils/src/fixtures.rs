//! Pre-built Test Fixtures
//!
//! Rows shaped like the store's tables, plus a small coherent dataset.
//! These fixtures are designed to be consistent and predictable for unit tests.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};

use core_kernel::{Row, Table};

use crate::memory_store::MemoryRowStore;

/// Converts a JSON object literal into a row
///
/// # Panics
///
/// Panics if `value` is not an object
pub fn to_row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture row must be a JSON object, got {}", other),
    }
}

/// Fixture rows for each table
pub struct RowFixtures;

impl RowFixtures {
    /// A `claims` row
    pub fn claim(id: i64, insurance_id: i64, application_id: i64, claim_type: &str) -> Row {
        to_row(json!({
            "id": id,
            "insurance_id": insurance_id,
            "application_id": application_id,
            "claim_type": claim_type,
            "approval_status": "pending",
        }))
    }

    /// An `insurances` row
    pub fn insurance(insurance_id: i64, insurance_type: &str) -> Row {
        to_row(json!({
            "insurance_id": insurance_id,
            "insurance_type": insurance_type,
            "policy_number": format!("POL-{:05}", insurance_id),
            "date_end": "2025-12-31T00:00:00",
        }))
    }

    /// An `applications` row with fixed risk values
    pub fn application(application_id: i64, first_name: &str, last_name: &str) -> Row {
        to_row(json!({
            "application_id": application_id,
            "first_name": first_name,
            "last_name": last_name,
            "request_type": "individual",
            "insurance_type": "Comprehensive",
            "age": 34,
            "vehicle_risk": 0.5,
            "driver_risk": 0.0,
        }))
    }

    /// An `applications` row with a generated name
    pub fn application_with_fake_name(application_id: i64) -> Row {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        Self::application(application_id, &first, &last)
    }

    /// A `vehicles` row
    pub fn vehicle(
        application_id: i64,
        manufacturer: &str,
        model: &str,
        construction_year: Option<i32>,
        fuel_type: Option<&str>,
        vehicle_risk: Option<f64>,
    ) -> Row {
        to_row(json!({
            "application_id": application_id,
            "vehicle_manufacturer": manufacturer,
            "vehicle_model": model,
            "construction_year": construction_year,
            "fuel_type": fuel_type,
            "vehicle_risk": vehicle_risk,
        }))
    }
}

/// A small dataset where every reference resolves
///
/// - applications 1 (Jane Doe) and 2 (John Roe), each with a vehicle
/// - insurances 10 (Comprehensive) and 20 (Third Party)
/// - claims 100 (collision, app 1, ins 10) and 200 (theft, app 2, ins 20)
pub fn sample_store() -> MemoryRowStore {
    MemoryRowStore::new()
        .with_row(Table::Applications, RowFixtures::application(1, "Jane", "Doe"))
        .with_row(Table::Applications, RowFixtures::application(2, "John", "Roe"))
        .with_row(
            Table::Vehicles,
            RowFixtures::vehicle(1, "Volvo", "V60", Some(2019), Some("diesel"), Some(1.0)),
        )
        .with_row(
            Table::Vehicles,
            RowFixtures::vehicle(2, "Tesla", "Model 3", Some(2022), Some("electric"), None),
        )
        .with_row(Table::Insurances, RowFixtures::insurance(10, "Comprehensive"))
        .with_row(Table::Insurances, RowFixtures::insurance(20, "Third Party"))
        .with_row(Table::Claims, RowFixtures::claim(100, 10, 1, "collision"))
        .with_row(Table::Claims, RowFixtures::claim(200, 20, 2, "theft"))
}
