//! Pressure-Trend Calibration
//!
//! The six trend categories are a total function of slope (hPa/hour). The
//! boundaries below are calibration values, not physics: they are two-sided
//! and symmetric through the rising/falling pairs, with `Plummeting`
//! reserved for the most extreme falling magnitude only - there is
//! deliberately no "sky-rocketing" counterpart, because a rise that fast
//! carries no comparable hazard.

/// Mean absolute residual (hPa) above which the straight-line fit is
/// rejected and the U-curve fallback runs.
///
/// If the estimator picks U-curves too eagerly, raise this (e.g. 2.0); if
/// it clings to straight lines through obviously non-monotonic windows,
/// lower it slightly (e.g. 1.0).
pub const MAX_DEVIATION_HPA: f32 = 1.5;

/// Slope at or above which the trend is `RisingFast` (hPa/hour)
pub const RISING_FAST_HPA_PER_H: f32 = 2.0;

/// Slope at or above which the trend is `Rising` (hPa/hour)
pub const RISING_HPA_PER_H: f32 = 0.5;

/// Slope at or below which the trend leaves `Steady` for `Falling` (hPa/hour)
pub const FALLING_HPA_PER_H: f32 = -0.5;

/// Slope at or below which the trend is `FallingFast` (hPa/hour)
pub const FALLING_FAST_HPA_PER_H: f32 = -2.0;

/// Slope below which the trend is `Plummeting` (hPa/hour)
///
/// 4 hPa/hour sustained is squall-line territory; the WMO flags >3 hPa in
/// 3 hours as a gale indicator, so this is already an extreme reading.
pub const PLUMMETING_HPA_PER_H: f32 = -4.0;

/// Minimum finite samples for any trend estimate
pub const MIN_TREND_SAMPLES: usize = 2;
