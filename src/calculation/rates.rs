//! Fixed pay rates and the night window.
//!
//! Rates are whole currency units per hour. The night window is
//! `[22:00, 06:00)` on the local clock.

use serde::{Deserialize, Serialize};

/// Pay per hour outside the night window.
pub const REGULAR_RATE: i64 = 1000;

/// Pay per hour inside the night window.
pub const NIGHT_RATE: i64 = 1250;

/// First hour-of-day inside the night window.
pub const NIGHT_START_HOUR: u32 = 22;

/// First hour-of-day after the night window.
pub const NIGHT_END_HOUR: u32 = 6;

/// Which rate an hour of work is paid at.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::{RateBand, rate_band_for};
///
/// assert_eq!(rate_band_for(21), RateBand::Regular);
/// assert_eq!(rate_band_for(22), RateBand::Night);
/// assert_eq!(rate_band_for(5), RateBand::Night);
/// assert_eq!(rate_band_for(6), RateBand::Regular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// 06:00 to 21:59:59.
    Regular,
    /// 22:00 to 05:59:59.
    Night,
}

impl RateBand {
    /// Pay per hour for this band.
    pub fn hourly_rate(self) -> i64 {
        match self {
            RateBand::Regular => REGULAR_RATE,
            RateBand::Night => NIGHT_RATE,
        }
    }
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateBand::Regular => write!(f, "Regular"),
            RateBand::Night => write!(f, "Night"),
        }
    }
}

/// Classifies an hour-of-day (0-23) into its rate band.
pub fn rate_band_for(hour: u32) -> RateBand {
    if hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR {
        RateBand::Night
    } else {
        RateBand::Regular
    }
}
