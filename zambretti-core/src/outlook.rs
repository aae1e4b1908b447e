//! Multi-Window Pressure Outlook
//!
//! The trend analyzer sees one configurable window; the outlook compares
//! three (3, 6 and 12 hours) plus the anomaly against the regional normal,
//! and reads the combination. Agreement across windows means a persistent
//! system; a sign flip between the short and long windows usually means a
//! front just passed or a dip is filling in. The consensus rules below are
//! ordered most-severe-first.

use crate::analyzers::trend;
use crate::catalog::RegionKey;
use crate::constants::forecast::normal_pressure_hpa;
use crate::samples::Sample;

/// Slope (hPa/h) above which the 3 h window alone forces the storm summary
const STORM_FALL_HPA_PER_H: f32 = -1.0;

/// Slope magnitude counting as a "strong" move in the consensus rules
const STRONG_HPA_PER_H: f32 = 0.5;

/// Slope magnitude below which a window reads as steady
const STEADY_BAND_HPA_PER_H: f32 = 0.1;

/// Anomaly (hPa below normal) that bumps the steady/mixed warning level
const LOW_ANOMALY_HPA: f32 = -2.0;

/// Outcome of the multi-window assessment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureOutlook {
    /// Slope over the last 3 hours, hPa/h
    pub trend_3h: f32,
    /// Slope over the last 6 hours, hPa/h
    pub trend_6h: f32,
    /// Slope over the last 12 hours, hPa/h
    pub trend_12h: f32,
    /// Current pressure minus the regional normal, hPa
    pub anomaly_hpa: f32,
    /// Reading of the anomaly alone
    pub context: &'static str,
    /// Consensus reading of the three windows
    pub summary: &'static str,
    /// Outlook warning level, 1-5
    pub warning_level: u8,
}

/// Display label for a single window's slope
pub fn classify(slope_hpa_per_h: f32) -> &'static str {
    if slope_hpa_per_h > 1.0 {
        "rising rapidly"
    } else if slope_hpa_per_h > 0.5 {
        "rising fast"
    } else if slope_hpa_per_h > 0.1 {
        "rising"
    } else if slope_hpa_per_h > -0.1 {
        "steady"
    } else if slope_hpa_per_h > -0.5 {
        "falling"
    } else if slope_hpa_per_h > -1.0 {
        "falling fast"
    } else {
        "plummeting"
    }
}

fn anomaly_context(anomaly: f32) -> &'static str {
    if anomaly > 5.0 {
        "Unusually high, very stable"
    } else if anomaly > 2.0 {
        "Slightly above average, settled"
    } else if anomaly > -2.0 {
        "Near seasonal average, normal variability"
    } else if anomaly > -5.0 {
        "Below average, increasing instability"
    } else {
        "Unusually low, stormy pattern likely"
    }
}

impl PressureOutlook {
    /// Assess the outlook from three pre-filtered pressure windows
    ///
    /// Each slice covers its own lookback (the 3 h slice is a suffix of
    /// the 6 h slice and so on); windows with too few samples contribute a
    /// zero slope, which reads as steady.
    pub fn assess(
        window_3h: &[Sample],
        window_6h: &[Sample],
        window_12h: &[Sample],
        current_pressure_hpa: f32,
        region: Option<RegionKey>,
    ) -> Self {
        let t3 = trend::analyze(window_3h).slope_hpa_per_hour;
        let t6 = trend::analyze(window_6h).slope_hpa_per_hour;
        let t12 = trend::analyze(window_12h).slope_hpa_per_hour;
        let anomaly = current_pressure_hpa - normal_pressure_hpa(region);

        let steady = |t: f32| t > -STEADY_BAND_HPA_PER_H && t < STEADY_BAND_HPA_PER_H;

        let (summary, warning_level) = if t3 < STORM_FALL_HPA_PER_H {
            (
                "Pressure is plummeting, a storm or squall is very likely incoming.",
                5,
            )
        } else if t3 < -STRONG_HPA_PER_H && t6 < -STRONG_HPA_PER_H && t12 < -STRONG_HPA_PER_H {
            (
                "Consistent strong fall, stormy or worsening weather is very likely.",
                4,
            )
        } else if t3 > STRONG_HPA_PER_H && t6 > STRONG_HPA_PER_H && t12 > STRONG_HPA_PER_H {
            ("Strong and consistent rise, improving and settled weather.", 1)
        } else if t3 < 0.0 && t6 > 0.0 && t12 > 0.0 {
            (
                "Short-term drop in a rising trend, weather likely stabilizing after a dip.",
                2,
            )
        } else if t3 > 0.0 && t6 < 0.0 && t12 < 0.0 {
            (
                "Short-term rise in a falling pattern, possible temporary improvement.",
                3,
            )
        } else if steady(t3) && steady(t6) && steady(t12) {
            (
                "Pressure is steady across all windows, stable conditions.",
                if anomaly < LOW_ANOMALY_HPA { 2 } else { 1 },
            )
        } else {
            (
                "Mixed pressure trends, potential instability or transition.",
                if anomaly < LOW_ANOMALY_HPA { 3 } else { 2 },
            )
        };

        Self {
            trend_3h: t3,
            trend_6h: t6,
            trend_12h: t12,
            anomaly_hpa: anomaly,
            context: anomaly_context(anomaly),
            summary,
            warning_level,
        }
    }
}
