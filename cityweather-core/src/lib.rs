//! Core library for the `cityweather` terminal widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client behind the [`Provider`] abstraction
//! - The widget state machine and its display-ready view model
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod units;
pub mod widget;

pub use config::Config;
pub use error::Error;
pub use model::WeatherReport;
pub use provider::{Provider, provider_from_config};
pub use render::{Metric, ReportView};
pub use units::Units;
pub use widget::{DEFAULT_CITY, FetchRequest, Resolution, WeatherWidget};
