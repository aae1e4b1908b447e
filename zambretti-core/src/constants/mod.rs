//! Calibration constants for the forecast engine
//!
//! Every numeric threshold in the engine lives here, grouped by domain.
//! Most of these are heuristic calibration parameters rather than derivable
//! physics: they were tuned against the scenario suite in the integration
//! tests, and changing one changes forecasts, not correctness of the code.
//! Each constant documents its role and, where one exists, its source.

/// Pressure-trend estimation thresholds.
pub mod trend;

/// Wind smoothing, range margins and alert thresholds.
pub mod wind;

/// Fog probability model parameters.
pub mod fog;

/// Temperature rate-of-change thresholds and diurnal windows.
pub mod temperature;

/// Forecast table bands and regional pressure normals.
pub mod forecast;

// Re-export commonly used constants for convenience
pub use trend::{
    MAX_DEVIATION_HPA, RISING_FAST_HPA_PER_H, RISING_HPA_PER_H, FALLING_HPA_PER_H,
    FALLING_FAST_HPA_PER_H,
};

pub use wind::{CALM_WIND_MAX_KN, WIND_RANGE_MARGIN};

pub use forecast::{STANDARD_NORMAL_PRESSURE_HPA, PRESSURE_BAND_HPA};
