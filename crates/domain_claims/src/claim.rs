//! Claim record and claim types

use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, ClaimId, InsuranceId};

/// Description used for claim types without a dedicated entry
pub const GENERIC_ACCIDENT_DESCRIPTION: &str =
    "Claim requires investigation and assessment of damages.";

/// A row of the `claims` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Primary key
    pub id: ClaimId,
    /// Insurance the claim is filed against
    pub insurance_id: Option<InsuranceId>,
    /// Application of the claimant
    pub application_id: Option<ApplicationId>,
    /// Raw claim type code, e.g. `collision`
    pub claim_type: Option<String>,
    pub approval_status: Option<String>,
}

impl Claim {
    /// Parsed claim type, `None` when absent or unrecognized
    pub fn kind(&self) -> Option<ClaimType> {
        self.claim_type.as_deref().and_then(ClaimType::from_code)
    }

    /// Human-readable description of the accident behind this claim
    pub fn accident_description(&self) -> &'static str {
        self.kind()
            .map(|kind| kind.description())
            .unwrap_or(GENERIC_ACCIDENT_DESCRIPTION)
    }
}

/// Claim types with a dedicated accident description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Collision,
    Theft,
    NaturalDisaster,
    Vandalism,
    Mechanical,
}

impl ClaimType {
    pub const ALL: [ClaimType; 5] = [
        ClaimType::Collision,
        ClaimType::Theft,
        ClaimType::NaturalDisaster,
        ClaimType::Vandalism,
        ClaimType::Mechanical,
    ];

    /// Parses a stored claim type code; matching is exact
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// The code stored in the `claim_type` column
    pub fn code(&self) -> &'static str {
        match self {
            ClaimType::Collision => "collision",
            ClaimType::Theft => "theft",
            ClaimType::NaturalDisaster => "natural_disaster",
            ClaimType::Vandalism => "vandalism",
            ClaimType::Mechanical => "mechanical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClaimType::Collision => "Vehicle collision occurred resulting in damage to the insured vehicle. Incident requires assessment of damage and liability.",
            ClaimType::Theft => "Vehicle was reported stolen. Case requires police report and investigation of circumstances.",
            ClaimType::NaturalDisaster => "Vehicle damaged due to natural events such as flood, hail, or storm. Assessment needed for extent of damage.",
            ClaimType::Vandalism => "Vehicle was subject to intentional damage by unknown parties. Police report and damage assessment required.",
            ClaimType::Mechanical => "Mechanical failure led to vehicle damage. Technical inspection and repair assessment needed.",
        }
    }
}

/// Looks up the accident description for a claim type code
///
/// Unknown or missing codes get [`GENERIC_ACCIDENT_DESCRIPTION`].
pub fn accident_description(claim_type: Option<&str>) -> &'static str {
    claim_type
        .and_then(ClaimType::from_code)
        .map(|kind| kind.description())
        .unwrap_or(GENERIC_ACCIDENT_DESCRIPTION)
}
