//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The HTTP transport seam and its reqwest implementation
//! - Resolution of coordinates to an api.weather.gov forecast
//! - Decoding of forecast periods into one entry per day
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod daily;
pub mod error;
pub mod model;
pub mod points;
pub mod service;
pub mod transport;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Coordinate, DailyForecast, ForecastPeriod, Temperature};
pub use service::ForecastService;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
