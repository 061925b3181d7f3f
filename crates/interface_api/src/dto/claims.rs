//! Claims DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, InsuranceId};

/// Placeholder for fields whose source row is missing
pub const UNKNOWN: &str = "Unknown";

/// Body of `GET /claims/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDetailResponse {
    pub id: ClaimId,
    pub insurance_id: Option<InsuranceId>,
    pub claim_type: Option<String>,
    pub accident_description: String,
    pub insurance_type: String,
    pub insurance_end_date: String,
    pub claimant_name: String,
}

/// Item of `GET /claims`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSummaryResponse {
    pub claim_id: ClaimId,
    pub applicant_name: String,
    pub claim_type: Option<String>,
    pub insurance_type: String,
    pub approval_status: Option<String>,
}
