//! Application DTOs

use serde::{Deserialize, Serialize};

use core_kernel::ApplicationId;
use domain_risk::{ApplicationStatus, DriverRiskAssessment, VehicleRiskAssessment};

/// Item of `GET /applications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummaryResponse {
    pub id: ApplicationId,
    pub name: String,
    /// Request type of the application
    pub category: Option<String>,
    pub insurance_type: Option<String>,
    /// Placeholder review status, drawn per request
    pub status: ApplicationStatus,
}

/// Body of `GET /applications/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDetailResponse {
    pub id: ApplicationId,
    pub vehicle_risk_assessment: VehicleRiskAssessment,
    pub driver_risk_assessment: DriverRiskAssessment,
}
