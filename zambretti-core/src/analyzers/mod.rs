//! Per-Channel Analyzers
//!
//! One module per sensor channel, each a pure function of its sample slice
//! (plus a scalar or two). Analyzers never fail: a channel with too few
//! finite samples produces the analyzer's documented degraded default and
//! flags it through `history_count`/`degraded`, so the forecast engine can
//! always assemble a complete result.
//!
//! - [`trend`] - pressure trend: least-squares slope with a U-curve
//!   fallback for non-monotonic windows.
//! - [`wind`] - smoothed speed, circular-mean direction, forecast range
//!   and the veering/backing estimate.
//! - [`temperature`] - 2-hour rate of change with diurnal suppression.
//! - [`fog`] - dew-point based fog probability, a right-now indicator.

pub mod fog;
pub mod temperature;
pub mod trend;
pub mod wind;

pub use fog::{FogAreaType, FogResult};
pub use temperature::{SolarTimes, TemperatureResult};
pub use trend::{TrendCategory, TrendMethod, TrendResult};
pub use wind::{DirectionShift, WindResult};
