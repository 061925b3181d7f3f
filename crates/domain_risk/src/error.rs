//! Risk domain errors

use thiserror::Error;

/// Errors that can occur in the risk domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("Degenerate range: {0}")]
    DegenerateRange(String),
}
