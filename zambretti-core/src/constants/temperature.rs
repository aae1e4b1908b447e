//! Temperature Calibration
//!
//! Thresholds are in °C of change across the analyzer's 2-hour window,
//! after any diurnal suppression has been applied.

use crate::time::MS_PER_HOUR;

/// Lookback the temperature channel is expected to cover (informational;
/// the caller pre-filters the slice)
pub const WINDOW_MS: u64 = 2 * MS_PER_HOUR;

/// Change at or above which rapid warming raises an alert
pub const RAPID_WARMING_C: f32 = 10.0;

/// Change at or above which warming is noted without an alert
pub const WARMING_C: f32 = 5.0;

/// Change at or below which rapid cooling raises the strongest alert
///
/// A 10 °C drop inside two hours is a cold-front signature and the single
/// most reliable precursor of violent wind shifts in the source material.
pub const RAPID_COOLING_C: f32 = -10.0;

/// Change at or below which cooling raises a moderate alert
pub const COOLING_C: f32 = -5.0;

/// Alert level for rapid warming
pub const RAPID_WARMING_ALERT: u8 = 3;

/// Alert level for rapid cooling
pub const RAPID_COOLING_ALERT: u8 = 5;

/// Alert level for moderate cooling
pub const COOLING_ALERT: u8 = 3;

/// Sunrise suppression window: starts this long before sunrise
pub const SUNRISE_BEFORE_MS: u64 = MS_PER_HOUR;

/// Sunrise suppression window: ends this long after sunrise
///
/// Morning warm-up drags on well past dawn, hence the long tail.
pub const SUNRISE_AFTER_MS: u64 = 5 * MS_PER_HOUR;

/// Sunset suppression window: starts this long before sunset
pub const SUNSET_BEFORE_MS: u64 = MS_PER_HOUR;

/// Sunset suppression window: ends this long after sunset
pub const SUNSET_AFTER_MS: u64 = 3 * MS_PER_HOUR;

/// Factor applied to a change that coincides with its diurnal window
pub const DIURNAL_DAMPING: f32 = 0.5;

/// Current temperature above which storms strengthen (alert modifier +1)
pub const HOT_AIR_C: f32 = 25.0;

/// Current temperature below which high pressure stabilizes (modifier -1)
pub const COLD_AIR_C: f32 = 5.0;
