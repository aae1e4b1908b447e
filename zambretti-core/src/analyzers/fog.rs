//! Fog Analyzer
//!
//! A right-now indicator, not a forecast: fog chance from the current
//! temperature, humidity and wind.
//!
//! The physics part is the Magnus-Tetens dew point; the closer the air
//! temperature sits to it (the "spread"), the likelier saturation at the
//! surface. Everything after that is calibration: warm air and wind both
//! suppress fog in stepped decay factors, and a per-site area type scales
//! the result because some anchorages fog up at spreads that leave others
//! clear.

use core::fmt::Write;

use crate::constants::fog::{
    BAND_POSSIBLE, BAND_UNLIKELY, BAND_VERY_LIKELY, BAND_VERY_UNLIKELY, CLEARING_WIND_KN,
    DENSE_FOG_ALERT, MAGNUS_A, MAGNUS_B, MIN_HUMIDITY_PCT, REDUCING_WIND_KN, SPREAD_IMPOSSIBLE_C,
    SPREAD_SLOPE, SPREAD_STEEP_C, SPREAD_STEEP_SLOPE, TEMP_DECAY, WIND_DECAY, WIND_NOTE_PCT,
};

/// How fog-prone the configured location is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FogAreaType {
    /// River valleys, cold upwelling coasts: dense fog is routine
    FrequentDenseFog,
    /// Noticeably foggier than average
    FogProne,
    /// No particular local bias
    #[default]
    Normal,
    /// Fog is uncommon here
    RareFog,
    /// Fog is almost unheard of
    HardlyEverFog,
}

impl FogAreaType {
    /// Probability multiplier for this area type
    pub const fn factor(self) -> f32 {
        match self {
            Self::FrequentDenseFog => 1.5,
            Self::FogProne => 1.2,
            Self::Normal => 1.0,
            Self::RareFog => 0.7,
            Self::HardlyEverFog => 0.4,
        }
    }
}

/// Outcome of the fog analysis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FogResult {
    /// Fog probability, 0-100
    pub probability_pct: u8,
    /// Probability rounded to the nearest 10, for display
    pub decile_pct: u8,
    /// Magnus-Tetens dew point, °C (0 when inputs were unusable)
    pub dew_point_c: f32,
    /// Temperature minus dew point, °C, rounded to 0.1
    pub spread_c: f32,
    /// Likelihood text, including the persistence note where relevant
    pub text: heapless::String<64>,
    /// Alert contribution (dense fog only)
    pub alert_level: u8,
}

impl FogResult {
    fn flat(text: &str) -> Self {
        let mut t = heapless::String::new();
        let _ = t.push_str(text);
        Self {
            probability_pct: 0,
            decile_pct: 0,
            dew_point_c: 0.0,
            spread_c: 0.0,
            text: t,
            alert_level: 0,
        }
    }
}

/// Estimate the current fog chance
///
/// Unusable inputs (non-finite or non-positive humidity, non-finite
/// temperature) yield the degraded zero result rather than an error.
pub fn analyze(
    humidity_pct: f32,
    temperature_c: f32,
    wind_speed_kn: f32,
    area: FogAreaType,
) -> FogResult {
    if !humidity_pct.is_finite() || humidity_pct <= 0.0 || !temperature_c.is_finite() {
        return FogResult::flat("No valid sensor data.");
    }
    if humidity_pct < MIN_HUMIDITY_PCT {
        return FogResult::flat("No chance of fog. Air is too dry.");
    }

    // Magnus-Tetens
    let alpha = (MAGNUS_A * temperature_c) / (MAGNUS_B + temperature_c)
        + libm::logf(humidity_pct / 100.0);
    let dew_point = (MAGNUS_B * alpha) / (MAGNUS_A - alpha);
    let spread = libm::roundf((temperature_c - dew_point) * 10.0) / 10.0;

    let mut probability = if spread > SPREAD_IMPOSSIBLE_C {
        0.0
    } else if spread > SPREAD_STEEP_C {
        (100.0 - SPREAD_STEEP_SLOPE * spread).max(0.0)
    } else {
        (100.0 - SPREAD_SLOPE * spread).max(0.0)
    };

    for &(min_temp, factor) in TEMP_DECAY.iter() {
        if temperature_c > min_temp {
            probability *= factor;
            break;
        }
    }
    let wind = if wind_speed_kn.is_finite() { wind_speed_kn } else { 0.0 };
    for &(min_wind, factor) in WIND_DECAY.iter() {
        if wind > min_wind {
            probability *= factor;
            break;
        }
    }

    probability *= area.factor();
    let probability = probability.clamp(0.0, 100.0) as u8;

    let band = if probability > BAND_VERY_LIKELY {
        "Fog is very likely"
    } else if probability > BAND_POSSIBLE {
        "Fog is possible"
    } else if probability > BAND_UNLIKELY {
        "Fog is unlikely"
    } else if probability > BAND_VERY_UNLIKELY {
        "Fog is very unlikely"
    } else {
        "No fog expected"
    };

    let mut text: heapless::String<64> = heapless::String::new();
    let _ = text.push_str(band);
    let mut alert_level = 0;
    if probability > BAND_VERY_LIKELY {
        let _ = write!(
            text,
            "{}",
            if wind > CLEARING_WIND_KN {
                ", strong winds will soon clear it"
            } else {
                ", it may persist"
            }
        );
        alert_level = DENSE_FOG_ALERT;
    } else if probability > WIND_NOTE_PCT {
        let _ = write!(
            text,
            "{}",
            if wind > REDUCING_WIND_KN {
                ", wind reduces it"
            } else {
                ", it may persist"
            }
        );
    }

    FogResult {
        probability_pct: probability,
        decile_pct: (libm::roundf(probability as f32 / 10.0) * 10.0) as u8,
        dew_point_c: dew_point,
        spread_c: spread,
        text,
        alert_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturated_calm_air_is_near_certain_fog() {
        let result = analyze(100.0, 10.0, 0.0, FogAreaType::Normal);
        assert!(result.probability_pct > 90, "got {}", result.probability_pct);
        assert_eq!(result.alert_level, DENSE_FOG_ALERT);
        assert!(result.text.starts_with("Fog is very likely"));
        assert!(result.spread_c.abs() < 0.2);
    }

    #[test]
    fn dry_air_short_circuits() {
        let result = analyze(15.0, 10.0, 0.0, FogAreaType::FrequentDenseFog);
        assert_eq!(result.probability_pct, 0);
        assert_eq!(result.text.as_str(), "No chance of fog. Air is too dry.");
    }

    #[test]
    fn wide_spread_means_no_fog() {
        // 40% humidity at 20 degrees leaves a spread well past 6 degrees
        let result = analyze(40.0, 20.0, 0.0, FogAreaType::Normal);
        assert!(result.spread_c > SPREAD_IMPOSSIBLE_C);
        assert_eq!(result.probability_pct, 0);
        assert_eq!(result.text.as_str(), "No fog expected");
    }

    #[test]
    fn wind_monotonically_suppresses_fog() {
        let mut last = 101;
        for wind in [0.0, 6.0, 11.0, 16.0, 25.0] {
            let p = analyze(100.0, 10.0, wind, FogAreaType::Normal).probability_pct;
            assert!(p <= last, "wind {wind} raised probability");
            last = p;
        }
    }

    #[test]
    fn hot_air_suppresses_fog() {
        let cool = analyze(95.0, 15.0, 0.0, FogAreaType::Normal);
        let hot = analyze(95.0, 31.0, 0.0, FogAreaType::Normal);
        assert!(hot.probability_pct < cool.probability_pct);
    }

    #[test]
    fn area_type_scales_probability() {
        let normal = analyze(92.0, 12.0, 6.0, FogAreaType::Normal);
        let prone = analyze(92.0, 12.0, 6.0, FogAreaType::FogProne);
        let rare = analyze(92.0, 12.0, 6.0, FogAreaType::RareFog);
        assert!(prone.probability_pct >= normal.probability_pct);
        assert!(rare.probability_pct < normal.probability_pct);
    }

    #[test]
    fn strong_wind_caps_even_saturated_air() {
        // Saturated air in a fog hollow, but 16 kn of wind: the decay
        // factor alone keeps this out of the likely bands.
        let result = analyze(100.0, 10.0, 16.0, FogAreaType::FrequentDenseFog);
        assert!(result.probability_pct <= BAND_UNLIKELY);
        assert_eq!(result.alert_level, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn result_round_trips_through_serde() {
        // Compile-time check that the derives hold for the heapless
        // string field as well.
        fn assert_impls<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_impls::<FogResult>();
        assert_impls::<FogAreaType>();
    }

    #[test]
    fn invalid_inputs_degrade() {
        assert_eq!(
            analyze(f32::NAN, 10.0, 0.0, FogAreaType::Normal).text.as_str(),
            "No valid sensor data."
        );
        assert_eq!(
            analyze(80.0, f32::NAN, 0.0, FogAreaType::Normal).probability_pct,
            0
        );
    }
}
