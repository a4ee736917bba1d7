// src/strength/time.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::utils::format_duration;

/// Attacker models, as guesses per second.
pub const ONLINE_THROTTLING: f64 = 100.0 / 3600.0;
pub const ONLINE_NO_THROTTLING: f64 = 10.0;
pub const OFFLINE_SLOW_HASHING: f64 = 1e4;
pub const OFFLINE_FAST_HASHING: f64 = 1e10;

/// Human-readable time to crack under each attacker model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrackTimes {
    /// Rate-limited online attack, 100 guesses per hour
    pub online_throttling_100_per_hour: String,
    /// Unthrottled online attack, 10 guesses per second
    pub online_no_throttling_10_per_second: String,
    /// Offline attack on a slow hash, 1e4 guesses per second
    pub offline_slow_hashing_1e4_per_second: String,
    /// Offline attack on a fast hash, 1e10 guesses per second
    pub offline_fast_hashing_1e10_per_second: String,
}

impl CrackTimes {
    pub fn from_log2_guesses(log2_guesses: f64) -> Self {
        let display = |rate: f64| format_duration(seconds_to_crack(log2_guesses, rate));
        Self {
            online_throttling_100_per_hour: display(ONLINE_THROTTLING),
            online_no_throttling_10_per_second: display(ONLINE_NO_THROTTLING),
            offline_slow_hashing_1e4_per_second: display(OFFLINE_SLOW_HASHING),
            offline_fast_hashing_1e10_per_second: display(OFFLINE_FAST_HASHING),
        }
    }

    /// The headline figure: an offline attacker with a fast hash.
    pub fn dominant(&self) -> &str {
        &self.offline_fast_hashing_1e10_per_second
    }
}

pub fn seconds_to_crack(log2_guesses: f64, guesses_per_second: f64) -> f64 {
    2f64.powf(log2_guesses - guesses_per_second.log2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_guess_is_instant_offline() {
        let times = CrackTimes::from_log2_guesses(0.0);
        assert_eq!(times.dominant(), "less than a second");
        assert_eq!(times.online_throttling_100_per_hour, "36 seconds");
    }

    #[test]
    fn huge_guess_counts_are_centuries() {
        let times = CrackTimes::from_log2_guesses(128.0);
        assert_eq!(times.dominant(), "centuries");
        assert_eq!(times.online_throttling_100_per_hour, "centuries");
    }

    #[test]
    fn seconds_scale_with_rate() {
        let s = seconds_to_crack(10f64.log2() * 12.0, OFFLINE_FAST_HASHING);
        assert!((s - 100.0).abs() < 1e-6);
    }
}
