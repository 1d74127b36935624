use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{Config, Error, Units, WeatherReport};

use super::Provider;

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            // Transport defaults: no explicit timeout, no retries.
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Provider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str, units: Units) -> Result<WeatherReport, Error> {
        debug!(%city, %units, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("units", units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::CityNotFound);
        }
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()));
        }

        let body = res.text().await?;
        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    dt: i64,
    /// Location's shift from UTC, in seconds.
    timezone: i32,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    visibility: u32,
}

fn parse_current(body: &str) -> Result<WeatherReport, Error> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| Error::UnexpectedBody(e.to_string()))?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| Error::UnexpectedBody("missing weather entry".to_string()))?;

    Ok(WeatherReport {
        city: parsed.name,
        country: parsed.sys.country,
        observed_at: unix_to_local(parsed.dt, parsed.timezone),
        description: weather.description,
        icon: weather.icon,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        pressure_hpa: parsed.main.pressure,
        visibility_m: parsed.visibility,
    })
}

/// Shift the unix observation timestamp into the location's own offset.
/// Out-of-range values fall back to the current instant / plain UTC.
fn unix_to_local(ts: i64, timezone_secs: i32) -> DateTime<FixedOffset> {
    let utc = DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_else(Utc::now);
    let offset = FixedOffset::east_opt(timezone_secs).unwrap_or_else(|| Utc.fix());
    utc.with_timezone(&offset)
}
