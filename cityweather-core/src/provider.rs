use crate::{Config, Error, Units, WeatherReport, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the weather backend, so the widget loop and its tests can
/// swap the HTTP client out.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str, units: Units) -> Result<WeatherReport, Error>;
}

/// Construct the provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn Provider>> {
    if !config.has_api_key() {
        return Err(anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityweather configure` and enter your OpenWeatherMap API key,\n\
             or set the {} environment variable.",
            crate::config::API_KEY_ENV
        ));
    }

    Ok(Box::new(OpenWeatherProvider::new(config)))
}
