use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlugId = Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub ui_refresh_hz: u16,
    pub company_name: String,
    pub rates: RateSchedule,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            ui_refresh_hz: 1,
            company_name: String::new(),
            rates: RateSchedule::default(),
        }
    }
}

/// Per-day rental rates. The discounted rate applies to every billable day
/// past the tier boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub regular_per_day: f64,
    pub discounted_per_day: f64,
    pub discount_after_days: u32,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            regular_per_day: 55.0,
            discounted_per_day: 27.5,
            discount_after_days: 60,
        }
    }
}

impl RateSchedule {
    /// Schedule with the discounted rate at exactly half the regular rate.
    pub fn half_after(regular_per_day: f64, discount_after_days: u32) -> Self {
        Self {
            regular_per_day,
            discounted_per_day: regular_per_day / 2.0,
            discount_after_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_match_schedule() {
        let rates = RateSchedule::default();
        assert_eq!(rates.regular_per_day, 55.0);
        assert_eq!(rates.discounted_per_day, 27.5);
        assert_eq!(rates.discount_after_days, 60);
    }

    #[test]
    fn half_after_halves_regular_rate() {
        let rates = RateSchedule::half_after(80.0, 30);
        assert_eq!(rates.discounted_per_day, 40.0);
        assert_eq!(rates.discount_after_days, 30);
    }

    #[test]
    fn default_global_config_refreshes_once_per_second() {
        assert_eq!(GlobalConfig::default().ui_refresh_hz, 1);
    }
}
