use std::fmt;

use crate::{Units, WeatherReport};

/// Host of the provider's fixed icon convention. The URL is rendered as text,
/// never fetched.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Display-ready projection of one report under one unit system.
///
/// Every field is a finished string: the terminal layer prints them verbatim
/// and never interpolates raw provider data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    /// "City, CC", e.g. "Paris, FR".
    pub header: String,
    /// Long-form observation date in the city's own offset,
    /// e.g. "Monday, January 15, 2024".
    pub date_line: String,
    pub icon_url: String,
    /// Rounded to the nearest integer with the unit suffix, e.g. "22°C".
    pub temperature: String,
    pub feels_like: String,
    pub description: String,
    pub metrics: [Metric; 4],
}

/// One labelled cell of the details grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl ReportView {
    pub fn build(report: &WeatherReport, units: Units) -> Self {
        let metrics = [
            Metric { label: "Humidity", value: format!("{}%", report.humidity_pct) },
            Metric {
                label: "Wind Speed",
                value: format!("{} {}", report.wind_speed, units.wind_label()),
            },
            Metric { label: "Pressure", value: format!("{} hPa", report.pressure_hpa) },
            Metric { label: "Visibility", value: format_visibility(report.visibility_m) },
        ];

        Self {
            header: format!("{}, {}", sanitize(&report.city), sanitize(&report.country)),
            date_line: report.observed_at.format("%A, %B %-d, %Y").to_string(),
            icon_url: icon_url(&report.icon),
            temperature: format_temperature(report.temperature, units),
            feels_like: format_temperature(report.feels_like, units),
            description: sanitize(&report.description),
            metrics,
        }
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", self.date_line)?;
        writeln!(f)?;
        writeln!(f, "  {}  {}", self.temperature, self.description)?;
        writeln!(f, "  Feels like: {}", self.feels_like)?;
        writeln!(f, "  Icon: {}", self.icon_url)?;
        writeln!(f)?;
        for metric in &self.metrics {
            writeln!(f, "  {:<11} {}", metric.label, metric.value)?;
        }
        Ok(())
    }
}

/// Nearest-integer temperature with the unit suffix, e.g. "22°C".
pub fn format_temperature(value: f64, units: Units) -> String {
    format!("{}{}", value.round() as i64, units.temp_suffix())
}

/// Meters to kilometers with exactly one decimal place.
pub fn format_visibility(meters: u32) -> String {
    format!("{:.1} km", f64::from(meters) / 1000.0)
}

/// Icon codes are a closed alphanumeric set ("01d".."50n"); anything else is
/// dropped before the code lands in a URL.
pub fn icon_url(icon: &str) -> String {
    let code: String = icon.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    format!("{ICON_BASE_URL}/{code}@2x.png")
}

/// Strip control characters so provider text cannot smuggle terminal escape
/// sequences into a display region.
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
