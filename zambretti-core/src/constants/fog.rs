//! Fog Model Calibration
//!
//! The fog probability model starts from the temperature-to-dew-point
//! spread and decays with heat and wind. Magnus-Tetens coefficients are
//! physics; everything else is calibration.

/// Magnus-Tetens coefficient a (dimensionless)
///
/// Source: Magnus (1844) as parameterized by Tetens (1930); valid for
/// ordinary atmospheric temperatures over water.
pub const MAGNUS_A: f32 = 17.27;

/// Magnus-Tetens coefficient b (°C)
pub const MAGNUS_B: f32 = 237.7;

/// Below this relative humidity fog is physically implausible and the
/// analyzer reports zero without computing a dew point.
pub const MIN_HUMIDITY_PCT: f32 = 20.0;

/// Spread (°C) beyond which fog probability is zero
pub const SPREAD_IMPOSSIBLE_C: f32 = 6.0;

/// Spread (°C) above which the steeper probability falloff applies
pub const SPREAD_STEEP_C: f32 = 3.0;

/// Probability lost per °C of spread in the steep regime
pub const SPREAD_STEEP_SLOPE: f32 = 15.0;

/// Probability lost per °C of spread in the normal regime
pub const SPREAD_SLOPE: f32 = 8.0;

/// Temperature scaling steps: `(min_temp_c, factor)`, checked top down.
///
/// Warm air keeps surface fog from forming even at small spreads; above
/// 35 °C it is effectively impossible.
pub const TEMP_DECAY: [(f32, f32); 4] = [
    (35.0, 0.0),
    (30.0, 0.1),
    (25.0, 0.3),
    (20.0, 0.7),
];

/// Wind scaling steps: `(min_speed_kn, factor)`, checked top down.
///
/// Wind mixes the surface layer and disperses fog; below the last step
/// calm air leaves the probability untouched.
pub const WIND_DECAY: [(f32, f32); 4] = [
    (20.0, 0.1),
    (15.0, 0.2),
    (10.0, 0.4),
    (5.0, 0.7),
];

/// Probability band above which fog is reported as very likely
pub const BAND_VERY_LIKELY: u8 = 90;

/// Probability band above which fog is reported as possible
pub const BAND_POSSIBLE: u8 = 70;

/// Probability band above which fog is reported as unlikely
pub const BAND_UNLIKELY: u8 = 40;

/// Probability band above which fog is reported as very unlikely
pub const BAND_VERY_UNLIKELY: u8 = 10;

/// Probability above which the report gains a persistence/wind note
pub const WIND_NOTE_PCT: u8 = 60;

/// Wind speed (kn) above which near-certain fog is expected to clear soon
pub const CLEARING_WIND_KN: f32 = 15.0;

/// Wind speed (kn) above which likely fog is reported as wind-reduced
pub const REDUCING_WIND_KN: f32 = 10.0;

/// Alert level assigned when fog is very likely right now
pub const DENSE_FOG_ALERT: u8 = 3;
