//! Vehicle and driver risk assessments

use serde::{Deserialize, Serialize};

use core_kernel::Random;
use domain_application::{Application, Vehicle};

use crate::normalize::normalize_risk_score;
use crate::synthetic::{
    co2_emissions, construction_year_diff, generate_license, generate_vin, past_claims, PastClaims,
};

/// Risk view of the insured vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRiskAssessment {
    pub vehicle_name: String,
    /// Vehicle age in years
    pub construction_year_diff: i64,
    pub vin: String,
    pub co2_emissions: String,
    /// 1-10
    pub risk_score: i64,
}

/// Risk view of the applicant as driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRiskAssessment {
    pub name: String,
    pub license: String,
    pub age: Option<i64>,
    pub past_claims: PastClaims,
    /// 1-10
    pub risk_score: i64,
}

/// Builds the vehicle assessment
///
/// The score comes from the vehicle's own risk value.
pub fn assess_vehicle(vehicle: &Vehicle, current_year: i32, rng: &dyn Random) -> VehicleRiskAssessment {
    VehicleRiskAssessment {
        vehicle_name: vehicle.display_name(),
        construction_year_diff: construction_year_diff(vehicle.construction_year, current_year, rng),
        vin: generate_vin(rng),
        co2_emissions: co2_emissions(vehicle.fuel(), rng),
        risk_score: normalize_risk_score(vehicle.vehicle_risk, rng),
    }
}

/// Builds the driver assessment from the application's personal data
pub fn assess_driver(application: &Application, rng: &dyn Random) -> DriverRiskAssessment {
    DriverRiskAssessment {
        name: application.full_name(),
        license: generate_license(rng),
        age: application.age,
        past_claims: past_claims(rng),
        risk_score: normalize_risk_score(application.driver_risk, rng),
    }
}
