//! Vehicle record

use serde::{Deserialize, Serialize};

use core_kernel::ApplicationId;

use crate::join_name;

/// A row of the `vehicles` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Application the vehicle was submitted with
    pub application_id: Option<ApplicationId>,
    pub vehicle_manufacturer: Option<String>,
    pub vehicle_model: Option<String>,
    pub construction_year: Option<i32>,
    pub fuel_type: Option<String>,
    /// Precomputed vehicle risk in `[0, 1]`
    pub vehicle_risk: Option<f64>,
}

impl Vehicle {
    /// Manufacturer and model joined by a space
    pub fn display_name(&self) -> String {
        join_name(
            self.vehicle_manufacturer.as_deref(),
            self.vehicle_model.as_deref(),
        )
    }

    /// Parsed fuel type; `None` when the column is empty
    pub fn fuel(&self) -> Option<FuelType> {
        self.fuel_type.as_deref().and_then(FuelType::parse)
    }
}

/// Fuel categories that drive the emission estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Electric,
    Diesel,
    /// Petrol, hybrid, LPG and anything else that burns fuel
    Combustion,
}

impl FuelType {
    /// Parses a stored fuel type, ignoring case
    ///
    /// Surrounding whitespace is trimmed first, so `" electric "` is
    /// `Electric` and a blank value is `None` like an empty one.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if raw.eq_ignore_ascii_case("electric") {
            Some(FuelType::Electric)
        } else if raw.eq_ignore_ascii_case("diesel") {
            Some(FuelType::Diesel)
        } else {
            Some(FuelType::Combustion)
        }
    }
}
