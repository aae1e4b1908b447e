//! Wind Analyzer
//!
//! Smooths the last ~10 minutes of wind samples into a current speed and
//! direction, and derives two forecasts from the pressure trend:
//!
//! - a veering/backing estimate (Buys Ballot reasoning: pressure falling
//!   ahead of a low backs the wind, rising behind it veers), and
//! - a (low, high) speed range around the engine's wind estimate, with the
//!   upper bound stretched when pressure is falling.
//!
//! Direction smoothing uses the circular mean from [`crate::compass`]; a
//! plain average is wrong near north.

use core::fmt::Write;

use crate::compass::{self, CompassSector};
use crate::constants::wind::{UPPER_BOUND_TREND_BIAS, WIND_RANGE_MARGIN};
use crate::samples::{self, Sample};

use super::trend::TrendCategory;

/// Expected direction change over the forecast period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionShift {
    /// Clockwise shift toward the given cardinal
    Veering {
        /// Cardinal the wind settles toward
        target: CompassSector,
        /// Rapid shift expected
        fast: bool,
    },
    /// Counter-clockwise shift toward the given cardinal
    Backing {
        /// Cardinal the wind settles toward
        target: CompassSector,
        /// Rapid shift expected
        fast: bool,
    },
    /// No systematic change expected
    Steady,
}

impl DirectionShift {
    /// Derive the expected shift from the pressure trend
    pub fn from_trend(current: CompassSector, trend: TrendCategory) -> Self {
        match trend {
            TrendCategory::Plummeting | TrendCategory::FallingFast => Self::Backing {
                target: current.backing_target(),
                fast: true,
            },
            TrendCategory::Falling => Self::Backing {
                target: current.backing_target(),
                fast: false,
            },
            TrendCategory::RisingFast => Self::Veering {
                target: current.veering_target(),
                fast: true,
            },
            TrendCategory::Rising => Self::Veering {
                target: current.veering_target(),
                fast: false,
            },
            TrendCategory::Steady => Self::Steady,
        }
    }

    /// Readable estimate, e.g. `"SW backing towards S fast"`
    pub fn describe(&self, current: CompassSector) -> heapless::String<32> {
        let mut text = heapless::String::new();
        let _ = match self {
            Self::Veering { target, fast } => write!(
                text,
                "{} veering towards {}{}",
                current.label(),
                target.label(),
                if *fast { " fast" } else { "" }
            ),
            Self::Backing { target, fast } => write!(
                text,
                "{} backing towards {}{}",
                current.label(),
                target.label(),
                if *fast { " fast" } else { "" }
            ),
            Self::Steady => write!(text, "{} steady", current.label()),
        };
        text
    }
}

/// Smoothed current wind state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindResult {
    /// Mean speed over the window, knots; zero when no samples
    pub speed_kn: f32,
    /// Circular-mean direction quantized to a sector, `None` when the
    /// window is empty or the bearings cancel out
    pub sector: Option<CompassSector>,
    /// Finite speed samples used
    pub speed_history: usize,
    /// Finite direction samples used
    pub direction_history: usize,
}

/// Smooth the wind channels into a current speed and direction
pub fn analyze(speed: &[Sample], direction: &[Sample]) -> WindResult {
    let sector = compass::circular_mean(samples::valid(direction).map(|s| s.value))
        .map(CompassSector::from_degrees);

    WindResult {
        speed_kn: samples::mean(speed).unwrap_or(0.0),
        sector,
        speed_history: samples::valid_count(speed),
        direction_history: samples::valid_count(direction),
    }
}

/// Forecast speed range (low, high) in knots around an estimated speed
///
/// A symmetric ±20% band, with the upper bound additionally biased by the
/// pressure trend: the falling family stretches it (wind likely to build),
/// the rising family trims it. Clipped at zero.
pub fn forecast_range(estimated_kn: f32, trend: TrendCategory) -> (f32, f32) {
    let bias = UPPER_BOUND_TREND_BIAS[trend as usize];
    let low = (estimated_kn * (1.0 - WIND_RANGE_MARGIN)).max(0.0);
    let high = (estimated_kn * (1.0 + WIND_RANGE_MARGIN + bias)).max(low);
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(values: &[f32]) -> heapless::Vec<Sample, 8> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(i as u64 * 60_000, v))
            .collect()
    }

    #[test]
    fn smooths_speed_and_direction() {
        let speed = at(&[10.0, 12.0, 14.0]);
        let direction = at(&[350.0, 10.0, 0.0]);
        let wind = analyze(&speed, &direction);
        assert_eq!(wind.speed_kn, 12.0);
        assert_eq!(wind.sector, Some(CompassSector::N));
        assert_eq!(wind.speed_history, 3);
    }

    #[test]
    fn empty_channels_degrade_cleanly() {
        let wind = analyze(&[], &[]);
        assert_eq!(wind.speed_kn, 0.0);
        assert_eq!(wind.sector, None);
        assert_eq!(wind.direction_history, 0);
    }

    #[test]
    fn falling_pressure_backs_the_wind() {
        let shift = DirectionShift::from_trend(CompassSector::Sw, TrendCategory::Falling);
        assert_eq!(
            shift,
            DirectionShift::Backing {
                target: CompassSector::S,
                fast: false
            }
        );
        assert_eq!(shift.describe(CompassSector::Sw).as_str(), "SW backing towards S");
    }

    #[test]
    fn plummeting_pressure_backs_fast() {
        let shift = DirectionShift::from_trend(CompassSector::W, TrendCategory::Plummeting);
        assert_eq!(
            shift.describe(CompassSector::W).as_str(),
            "W backing towards S fast"
        );
    }

    #[test]
    fn rising_pressure_veers() {
        let shift = DirectionShift::from_trend(CompassSector::N, TrendCategory::Rising);
        assert_eq!(shift.describe(CompassSector::N).as_str(), "N veering towards E");
    }

    #[test]
    fn range_biased_by_trend() {
        let (low_steady, high_steady) = forecast_range(20.0, TrendCategory::Steady);
        let (_, high_falling) = forecast_range(20.0, TrendCategory::FallingFast);
        let (_, high_rising) = forecast_range(20.0, TrendCategory::RisingFast);
        assert_eq!(low_steady, 16.0);
        assert_eq!(high_steady, 24.0);
        assert!(high_falling > high_steady);
        assert!(high_rising < high_steady);
    }

    #[test]
    fn range_never_negative() {
        let (low, high) = forecast_range(0.0, TrendCategory::Plummeting);
        assert_eq!(low, 0.0);
        assert_eq!(high, 0.0);
    }
}
