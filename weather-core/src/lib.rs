//! Core library for the weather forecast gateway.
//!
//! This crate defines:
//! - Configuration handling
//! - The upstream client performing the two-step forecast lookup
//! - Forecast resolution and temperature classification
//! - Shared domain models (reports, errors)
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod resolver;

pub use client::NwsClient;
pub use config::GatewayConfig;
pub use error::{ForecastError, UpstreamCall};
pub use model::{Coordinate, ForecastPeriod, ForecastReport, TempCategory};
pub use resolver::ForecastResolver;
