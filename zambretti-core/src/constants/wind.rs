//! Wind Calibration
//!
//! Margins, biases and alert thresholds for the wind analyzer and the
//! wind-suffix stage of the alert level. All speeds are knots.

/// Below this smoothed speed the wind-system resolver reports calm
/// conditions and skips the catalog lookup entirely.
pub const CALM_WIND_MAX_KN: f32 = 5.0;

/// Symmetric margin applied around the estimated wind speed to produce the
/// forecast (low, high) range: low = (1 - m)·v, high = (1 + m)·v.
pub const WIND_RANGE_MARGIN: f32 = 0.2;

/// Additional multiplicative bias on the range's upper bound per trend
/// category, ordered `[RisingFast, Rising, Steady, Falling, FallingFast,
/// Plummeting]` to match the `TrendCategory` discriminants.
///
/// Falling pressure means wind is more likely to build than to ease, so
/// the falling family stretches the upper bound; the rising family trims
/// it. Calibration values, validated against the scenario suite.
pub const UPPER_BOUND_TREND_BIAS: [f32; 6] = [-0.05, -0.025, 0.0, 0.05, 0.10, 0.15];

/// Wind-warning thresholds: `(min_speed_kn, alert_base, suffix)`
///
/// When the estimated maximum wind speed exceeds `min_speed_kn` and the
/// current alert base does not already exceed `alert_base`, the level gains
/// the decimal `suffix` (displayed as e.g. "3.1"). Checked from the top
/// down; first hit wins. Suffixes are drawn from {1, 2} only.
pub const WIND_ALERT_THRESHOLDS: [(f32, u8, u8); 5] = [
    (50.0, 5, 1),
    (40.0, 4, 1),
    (30.0, 3, 1),
    (25.0, 2, 2),
    (20.0, 2, 1),
];
