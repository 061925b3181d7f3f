//! Response bodies

pub mod claims;
pub mod applications;
