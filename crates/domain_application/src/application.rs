//! Insurance application record

use serde::{Deserialize, Serialize};

use core_kernel::ApplicationId;

use crate::join_name;

/// A row of the `applications` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Primary key
    pub application_id: ApplicationId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Individual or fleet request
    pub request_type: Option<String>,
    pub insurance_type: Option<String>,
    pub age: Option<i64>,
    /// Precomputed vehicle risk in `[0, 1]`
    pub vehicle_risk: Option<f64>,
    /// Precomputed driver risk in `[0, 1]`
    pub driver_risk: Option<f64>,
}

impl Application {
    /// First and last name joined by a space; empty when both are missing
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}
