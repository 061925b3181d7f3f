//! Synthetic display fields
//!
//! Placeholder values with no backing column. None of them are persisted or
//! carry identity across requests.

use serde::{Deserialize, Serialize};

use core_kernel::Random;
use domain_application::FuelType;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn draw(rng: &dyn Random, alphabet: &[u8], len: usize) -> String {
    (0..len).map(|_| rng.char_from(alphabet)).collect()
}

/// Estimated CO2 output, e.g. `"143g/km"`
///
/// Electric or unknown fuel emits nothing; diesel draws from 120-200 and
/// any other fuel from 95-165.
pub fn co2_emissions(fuel: Option<FuelType>, rng: &dyn Random) -> String {
    let grams = match fuel {
        None | Some(FuelType::Electric) => 0,
        Some(FuelType::Diesel) => rng.int_in(120, 200),
        Some(FuelType::Combustion) => rng.int_in(95, 165),
    };
    format!("{}g/km", grams)
}

/// A 17-character VIN-shaped string
///
/// Segments: manufacturer (3) and attributes (5) alphanumeric, a check digit,
/// model year and plant letters, and a 6-digit sequence. The check digit is
/// not computed.
pub fn generate_vin(rng: &dyn Random) -> String {
    let mut vin = String::with_capacity(17);
    vin.push_str(&draw(rng, ALPHANUMERIC, 3));
    vin.push_str(&draw(rng, ALPHANUMERIC, 5));
    vin.push(rng.char_from(DIGITS));
    vin.push(rng.char_from(UPPERCASE));
    vin.push(rng.char_from(UPPERCASE));
    vin.push_str(&draw(rng, DIGITS, 6));
    vin
}

/// A masked driver license label
pub fn generate_license(rng: &dyn Random) -> String {
    format!("License: XXXXX-{}-XXXXX", draw(rng, UPPERCASE, 4))
}

/// Summary of a driver's claim history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastClaims {
    pub incidents: u8,
    /// e.g. `"Last 3 years"`
    pub period: String,
}

/// Random claim history: 0-5 incidents over the last 1-5 years
pub fn past_claims(rng: &dyn Random) -> PastClaims {
    let incidents = rng.int_in(0, 5) as u8;
    let years = rng.int_in(1, 5);
    PastClaims {
        incidents,
        period: format!("Last {} years", years),
    }
}

/// Review status shown in the application list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Declined,
    #[serde(rename = "Further Review Required")]
    FurtherReviewRequired,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Declined,
        ApplicationStatus::FurtherReviewRequired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Declined => "Declined",
            ApplicationStatus::FurtherReviewRequired => "Further Review Required",
        }
    }
}

/// Picks one of the four review statuses uniformly
pub fn mock_status(rng: &dyn Random) -> ApplicationStatus {
    let index = rng.int_in(0, ApplicationStatus::ALL.len() as i64 - 1);
    ApplicationStatus::ALL[index as usize]
}

/// Vehicle age in years
///
/// A missing construction year draws from 0-15. A year in the future gives
/// a negative age.
pub fn construction_year_diff(
    construction_year: Option<i32>,
    current_year: i32,
    rng: &dyn Random,
) -> i64 {
    match construction_year {
        Some(year) => i64::from(current_year) - i64::from(year),
        None => rng.int_in(0, 15),
    }
}
