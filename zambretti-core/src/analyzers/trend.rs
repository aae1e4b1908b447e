//! Pressure Trend Analyzer
//!
//! ## Two estimators
//!
//! A least-squares line through the pressure window gives a robust slope
//! when the window is roughly monotonic. It fails badly on a frontal
//! passage: a fall-then-rise window fits a near-flat line and reads
//! "steady" while the barometer is actually climbing hard out of a trough.
//!
//! The analyzer therefore checks the fit quality (mean absolute residual in
//! hPa) and, above [`MAX_DEVIATION_HPA`], switches to a U-curve estimator:
//! take the slope from the window's minimum to the latest reading and from
//! the maximum to the latest reading, and keep whichever is steeper. The
//! most recent leg of the curve is the one that predicts the next hours.
//!
//! The slope maps to one of six categories. The mapping is total and
//! deliberately asymmetric: `Plummeting` has no rising counterpart because
//! a fast rise carries no comparable hazard.

use core::fmt::Write;

use crate::constants::trend::{
    FALLING_FAST_HPA_PER_H, FALLING_HPA_PER_H, MAX_DEVIATION_HPA, MIN_TREND_SAMPLES,
    PLUMMETING_HPA_PER_H, RISING_FAST_HPA_PER_H, RISING_HPA_PER_H,
};
use crate::samples::{self, Sample};
use crate::time::hours_between;

/// Pressure trend category, ordered from strongest rise to strongest fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrendCategory {
    /// Slope at or above +2.0 hPa/h
    RisingFast = 0,
    /// Slope at or above +0.5 hPa/h
    Rising = 1,
    /// Slope within (-0.5, +0.5) hPa/h
    Steady = 2,
    /// Slope at or below -0.5 hPa/h
    Falling = 3,
    /// Slope at or below -2.0 hPa/h
    FallingFast = 4,
    /// Slope at or below -4.0 hPa/h
    Plummeting = 5,
}

impl TrendCategory {
    /// Map a slope (hPa/hour) to its category; total over all finite slopes
    pub fn from_slope(slope_hpa_per_hour: f32) -> Self {
        if slope_hpa_per_hour >= RISING_FAST_HPA_PER_H {
            Self::RisingFast
        } else if slope_hpa_per_hour >= RISING_HPA_PER_H {
            Self::Rising
        } else if slope_hpa_per_hour > FALLING_HPA_PER_H {
            Self::Steady
        } else if slope_hpa_per_hour > FALLING_FAST_HPA_PER_H {
            Self::Falling
        } else if slope_hpa_per_hour > PLUMMETING_HPA_PER_H {
            Self::FallingFast
        } else {
            Self::Plummeting
        }
    }

    /// Human-readable label, e.g. `"Falling Fast"`
    pub const fn label(self) -> &'static str {
        match self {
            Self::RisingFast => "Rising Fast",
            Self::Rising => "Rising",
            Self::Steady => "Steady",
            Self::Falling => "Falling",
            Self::FallingFast => "Falling Fast",
            Self::Plummeting => "Plummeting",
        }
    }

    /// Whether this is one of the falling categories
    pub const fn is_falling(self) -> bool {
        matches!(self, Self::Falling | Self::FallingFast | Self::Plummeting)
    }

    /// Whether this is one of the rising categories
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Rising | Self::RisingFast)
    }
}

/// Which estimator produced the reported slope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrendMethod {
    /// Least-squares fit over the whole window
    StraightLine,
    /// Steeper of the min-to-latest / max-to-latest legs
    UCurve,
}

impl TrendMethod {
    /// Label for the passthrough attribute
    pub const fn label(self) -> &'static str {
        match self {
            Self::StraightLine => "Straight-line",
            Self::UCurve => "U-curve",
        }
    }
}

/// Outcome of one trend analysis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendResult {
    /// Pressure change rate, hPa per hour
    pub slope_hpa_per_hour: f32,
    /// Category derived from the slope
    pub category: TrendCategory,
    /// Estimator that produced the slope
    pub method: TrendMethod,
    /// Mean absolute residual of the straight-line fit, hPa
    pub deviation: f32,
    /// Finite samples the estimate is based on
    pub history_count: usize,
    /// True when the window had too few samples for a real estimate
    pub degraded: bool,
}

impl TrendResult {
    /// The degraded default: steady, zero slope
    pub const fn degraded(history_count: usize) -> Self {
        Self {
            slope_hpa_per_hour: 0.0,
            category: TrendCategory::Steady,
            method: TrendMethod::StraightLine,
            deviation: 0.0,
            history_count,
            degraded: true,
        }
    }

    /// One-line summary, e.g. `"Falling pressure, -1.2/hr"`
    pub fn analysis_text(&self) -> heapless::String<40> {
        let mut text = heapless::String::new();
        let rounded = libm::roundf(self.slope_hpa_per_hour * 10.0) / 10.0;
        let sign = if rounded > 0.0 {
            "+"
        } else if rounded < 0.0 {
            "-"
        } else {
            "\u{b1}"
        };
        // Capacity is sized for the longest label plus a 4-digit slope;
        // a write failure would mean truncation, which we accept silently.
        let _ = write!(
            text,
            "{} pressure, {}{:.1}/hr",
            self.category.label(),
            sign,
            if rounded < 0.0 { -rounded } else { rounded }
        );
        text
    }
}

/// Estimate the pressure trend over a chronological sample window
///
/// Needs at least [`MIN_TREND_SAMPLES`] finite samples spanning a nonzero
/// time; anything less yields the degraded steady default.
pub fn analyze(pressure: &[Sample]) -> TrendResult {
    let count = samples::valid_count(pressure);
    if count < MIN_TREND_SAMPLES {
        return TrendResult::degraded(count);
    }

    let first = match samples::first_valid(pressure) {
        Some(s) => *s,
        None => return TrendResult::degraded(count),
    };

    // Least-squares fit of pressure against elapsed hours
    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    let mut sum_xx = 0.0f32;
    let mut sum_xy = 0.0f32;
    for s in samples::valid(pressure) {
        let x = hours_between(first.timestamp, s.timestamp);
        sum_x += x;
        sum_y += s.value;
        sum_xx += x * x;
        sum_xy += x * s.value;
    }
    let n = count as f32;
    let denom = n * sum_xx - sum_x * sum_x;
    if denom.abs() < f32::EPSILON {
        // All samples at the same instant; no slope to speak of
        return TrendResult::degraded(count);
    }
    let fit_slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - fit_slope * sum_x) / n;

    let mut abs_residual_sum = 0.0f32;
    for s in samples::valid(pressure) {
        let x = hours_between(first.timestamp, s.timestamp);
        let fitted = fit_slope * x + intercept;
        let r = s.value - fitted;
        abs_residual_sum += if r < 0.0 { -r } else { r };
    }
    let deviation = abs_residual_sum / n;

    let (slope, method) = if deviation > MAX_DEVIATION_HPA {
        (u_curve_slope(pressure), TrendMethod::UCurve)
    } else {
        (fit_slope, TrendMethod::StraightLine)
    };

    TrendResult {
        slope_hpa_per_hour: slope,
        category: TrendCategory::from_slope(slope),
        method,
        deviation,
        history_count: count,
        degraded: false,
    }
}

/// Steeper of the min-to-latest and max-to-latest slopes (hPa/hour)
///
/// When the extremum coincides with the latest sample, that candidate's
/// numerator and elapsed time are both zero; the candidate counts as zero
/// and the other leg wins.
fn u_curve_slope(pressure: &[Sample]) -> f32 {
    let mut min: Option<Sample> = None;
    let mut max: Option<Sample> = None;
    let mut last: Option<Sample> = None;

    for s in samples::valid(pressure) {
        if min.map_or(true, |m| s.value < m.value) {
            min = Some(*s);
        }
        if max.map_or(true, |m| s.value > m.value) {
            max = Some(*s);
        }
        last = Some(*s);
    }

    let (min, max, last) = match (min, max, last) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return 0.0,
    };

    let hours_since_min = hours_between(min.timestamp, last.timestamp);
    let hours_since_max = hours_between(max.timestamp, last.timestamp);
    let slope_from_min = if hours_since_min > 0.0 {
        (last.value - min.value) / hours_since_min
    } else {
        0.0
    };
    let slope_from_max = if hours_since_max > 0.0 {
        (last.value - max.value) / hours_since_max
    } else {
        0.0
    };

    if slope_from_min.abs() > slope_from_max.abs() {
        slope_from_min
    } else {
        slope_from_max
    }
}
