//! Insurance record

use serde::{Deserialize, Serialize};

use core_kernel::InsuranceId;

/// A row of the `insurances` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    /// Primary key
    pub insurance_id: InsuranceId,
    pub insurance_type: Option<String>,
    /// End of coverage, kept as the store renders it
    pub date_end: Option<String>,
}
