//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The table of supported places and their region codes
//! - The forecast provider abstraction and its LWWS-compatible HTTP client
//! - The normalized forecast record and its text rendering
//! - On-disk configuration
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod region;

pub use config::Config;
pub use error::WeatherError;
pub use format::create_message;
pub use model::{DayForecast, ForecastRecord};
pub use provider::{WeatherProvider, fetch, livedoor::parse_forecast, provider_from_config};
