use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One observation as returned by a provider. Numeric fields are in whatever
/// unit system the request asked for; the view layer attaches the labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    /// Observation time shifted into the city's own UTC offset.
    pub observed_at: DateTime<FixedOffset>,
    pub description: String,
    /// Provider icon code, e.g. "04d".
    pub icon: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub pressure_hpa: u32,
    pub visibility_m: u32,
}
