use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub refresh_hz: u16,
    pub company: Option<String>,
    pub regular_rate: Option<f64>,
    pub discounted_rate: Option<f64>,
    pub discount_after_days: Option<u32>,
}
