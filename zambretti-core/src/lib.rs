//! Deterministic marine weather inference from local sensors
//!
//! Turns pressure, wind, temperature and humidity histories into a
//! Zambretti-style forecast: trend classification, storm-alert level,
//! wind estimates, fog chance and a named regional wind system.
//!
//! Key constraints:
//! - Pure functions of the supplied samples, no I/O and no clock access
//! - `no_std` capable, fixed-capacity buffers only
//! - Degrades per channel instead of failing when history is short
//!
//! ```no_run
//! use zambretti_core::{ForecastConfig, ForecastEngine, ForecastInput};
//!
//! let engine = ForecastEngine::new(ForecastConfig::default());
//! let input = ForecastInput {
//!     pressure: &[],
//!     pressure_6h: &[],
//!     pressure_12h: &[],
//!     wind_speed: &[],
//!     wind_direction: &[],
//!     temperature: &[],
//!     humidity_pct: 78.0,
//!     latitude: 43.0,
//!     longitude: 5.0,
//!     now: 0,
//!     solar: None,
//! };
//!
//! let forecast = engine.compute(&input);
//! // forecast.fully_started is false until every channel has history
//! let _ = forecast.summary;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzers;
pub mod catalog;
pub mod compass;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod outlook;
pub mod resolver;
pub mod samples;
pub mod time;

// Public API
pub use analyzers::{
    DirectionShift, FogAreaType, FogResult, SolarTimes, TemperatureResult, TrendCategory,
    TrendMethod, TrendResult, WindResult,
};
pub use compass::CompassSector;
pub use errors::{AnalysisError, AnalysisResult};
pub use forecast::{AlertLevel, ForecastConfig, ForecastEngine, ForecastInput, ForecastResult};
pub use outlook::PressureOutlook;
pub use resolver::Resolution;
pub use samples::Sample;
pub use time::Timestamp;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
