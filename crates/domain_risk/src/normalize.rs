//! Risk score normalization
//!
//! Maps a stored risk value from its source interval onto the display scale.
//! Results are rounded half to even, so `0.5` on the default scale
//! (`1 + 0.5 * 9 = 5.5`) becomes `6` and `2.5` would become `2`.
//! Values outside the source interval are not clamped.

use core_kernel::Random;

use crate::error::RiskError;

/// Linear mapping from a source interval onto an integer display interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScale {
    from_min: f64,
    from_max: f64,
    to_min: i64,
    to_max: i64,
}

impl RiskScale {
    /// `[0, 1]` onto `[1, 10]`
    pub const DEFAULT: RiskScale = RiskScale {
        from_min: 0.0,
        from_max: 1.0,
        to_min: 1,
        to_max: 10,
    };

    /// Creates a scale from `from` onto `to`
    ///
    /// # Errors
    ///
    /// Returns `RiskError::DegenerateRange` if the source interval is empty or
    /// not finite, or the target interval is inverted.
    pub fn new(from: (f64, f64), to: (i64, i64)) -> Result<Self, RiskError> {
        let (from_min, from_max) = from;
        let (to_min, to_max) = to;

        if !from_min.is_finite() || !from_max.is_finite() || from_min >= from_max {
            return Err(RiskError::DegenerateRange(format!(
                "source interval [{}, {}] is empty",
                from_min, from_max
            )));
        }
        if to_min > to_max {
            return Err(RiskError::DegenerateRange(format!(
                "target interval [{}, {}] is inverted",
                to_min, to_max
            )));
        }

        Ok(Self { from_min, from_max, to_min, to_max })
    }

    /// Rescales a present score
    pub fn rescale(&self, score: f64) -> i64 {
        let ratio = (score - self.from_min) / (self.from_max - self.from_min);
        let scaled = self.to_min as f64 + ratio * (self.to_max - self.to_min) as f64;
        scaled.round_ties_even() as i64
    }

    /// Rescales `score`, or draws a uniform value from the target interval
    /// when the score is missing
    pub fn normalize(&self, score: Option<f64>, rng: &dyn Random) -> i64 {
        match score {
            Some(score) => self.rescale(score),
            None => rng.int_in(self.to_min, self.to_max),
        }
    }
}

impl Default for RiskScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalizes a stored risk value onto the 1-10 display scale
pub fn normalize_risk_score(score: Option<f64>, rng: &dyn Random) -> i64 {
    RiskScale::DEFAULT.normalize(score, rng)
}
