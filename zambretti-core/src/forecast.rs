//! Forecast Engine
//!
//! The orchestrator: runs the per-channel analyzers, resolves the wind
//! system, assesses the pressure outlook and combines everything into one
//! [`ForecastResult`].
//!
//! The forecast text itself comes from a Zambretti-style table keyed by
//! trend category and refined by where the current pressure sits relative
//! to the regional normal: "falling" through 1020 hPa is a passing trough,
//! "falling" through 995 hPa is a storm. Each row carries text, an icon,
//! a floor for the alert level and a wind estimate.
//!
//! ## Alert level
//!
//! An integer 0-5. Each table row enforces its floor after a temperature
//! modifier (warm air feeds storms, +1; cold air stabilizes highs, -1);
//! the temperature and fog analyzers can then raise the combined level but
//! never lower it. Finally the estimated maximum wind may stamp a decimal
//! suffix: crossing 20/25/30/40/50 kn yields 2.1/2.2/3.1/4.1/5.1
//! respectively, replacing any base at or below the suffix's integer.
//!
//! The engine never fails: missing channels degrade per analyzer, and
//! `fully_started` stays false until every channel has produced at least
//! one usable sample.

use core::fmt::{self, Write};

use crate::analyzers::{fog, temperature, trend, wind};
use crate::analyzers::{
    DirectionShift, FogAreaType, FogResult, SolarTimes, TemperatureResult, TrendCategory,
    TrendResult, WindResult,
};
use crate::catalog::WindSystem;
use crate::constants::forecast::{
    normal_pressure_hpa, DEEP_LOW_OFFSET_HPA, EXTREME_LOW_OFFSET_HPA, PRESSURE_BAND_HPA,
};
use crate::constants::temperature::{COLD_AIR_C, HOT_AIR_C};
use crate::constants::wind::WIND_ALERT_THRESHOLDS;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::outlook::PressureOutlook;
use crate::resolver::{self, MAX_APPLICABLE, NO_DESCRIPTION};
use crate::samples::{self, Sample};
use crate::time::Timestamp;

const ICON_SUNNY: &str = "mdi:weather-sunny";
const ICON_PARTLY_CLOUDY: &str = "mdi:weather-partly-cloudy";
const ICON_PARTLY_RAINY: &str = "mdi:weather-partly-rainy";
const ICON_CLOUDY: &str = "mdi:weather-cloudy";
const ICON_RAINY: &str = "mdi:weather-rainy";
const ICON_POURING: &str = "mdi:weather-pouring";
const ICON_LIGHTNING: &str = "mdi:weather-lightning-rainy";
const ICON_WINDY: &str = "mdi:weather-windy";

/// Storm-alert level: integer base 0-5 plus an optional wind suffix
///
/// Displays as `"3"` or `"3.1"`. Suffix digits are drawn from {1, 2} and
/// only ever attached by the wind-threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertLevel {
    /// Integer severity, 0 (fine) to 5 (alarm)
    pub base: u8,
    /// Wind-warning suffix digit, 0 when absent
    pub wind_suffix: u8,
}

impl AlertLevel {
    /// Level with no wind suffix
    pub const fn new(base: u8) -> Self {
        Self {
            base,
            wind_suffix: 0,
        }
    }

    /// Canned description matching the level
    pub const fn description(self) -> &'static str {
        match (self.base, self.wind_suffix) {
            (0, _) => "Fine day.",
            (1, _) => "No worries.",
            (2, 1) => "Mild day. Wind picking up a bit, possibly up to 25kn.",
            (2, 2) => "Mild day. Wind picking up, possibly up to 30kn.",
            (2, _) => "Mild day.",
            (3, 1) => "Caution. Wind picking up, possibly up to 40kn, squalls possible.",
            (3, _) => "Caution. Unstable conditions, moderate winds, squalls possible.",
            (4, 1) => "Alert! Rough seas, storm risk, strong winds possibly up to 50kn.",
            (4, _) => "Alert! Strong winds, rough seas, storm risk increasing.",
            (5, 1) => "Alarm! Heavy storm, gale-force winds possibly more than 50kn.",
            _ => "Alarm! Heavy storm, gale-force winds, dangerous sailing conditions.",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wind_suffix == 0 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}.{}", self.base, self.wind_suffix)
        }
    }
}

/// Validated engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastConfig {
    /// Pressure lookback the caller filters to, hours (1-12)
    pub pressure_history_hours: u8,
    /// Fog-proneness of the configured location
    pub fog_area_type: FogAreaType,
}

impl ForecastConfig {
    /// Smallest accepted pressure lookback, hours
    pub const MIN_PRESSURE_HOURS: u8 = 1;
    /// Largest accepted pressure lookback, hours
    pub const MAX_PRESSURE_HOURS: u8 = 12;
    /// Default pressure lookback, hours
    pub const DEFAULT_PRESSURE_HOURS: u8 = 3;

    /// Validate and build a configuration
    pub fn new(pressure_history_hours: u8, fog_area_type: FogAreaType) -> AnalysisResult<Self> {
        if !(Self::MIN_PRESSURE_HOURS..=Self::MAX_PRESSURE_HOURS).contains(&pressure_history_hours)
        {
            return Err(AnalysisError::InvalidConfiguration {
                value: pressure_history_hours as f32,
                min: Self::MIN_PRESSURE_HOURS as f32,
                max: Self::MAX_PRESSURE_HOURS as f32,
            });
        }
        Ok(Self {
            pressure_history_hours,
            fog_area_type,
        })
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            pressure_history_hours: Self::DEFAULT_PRESSURE_HOURS,
            fog_area_type: FogAreaType::Normal,
        }
    }
}

/// One computation's worth of borrowed sensor history
///
/// Every slice is chronological and pre-filtered to its lookback window by
/// the caller; the engine never retains them. Empty slices are legal and
/// degrade per channel. The 6 h / 12 h pressure windows feed the outlook
/// only and may be left empty when the host keeps no long history.
#[derive(Debug, Clone, Copy)]
pub struct ForecastInput<'a> {
    /// Pressure over the configured lookback, hPa
    pub pressure: &'a [Sample],
    /// Pressure over the last 6 hours (outlook), hPa
    pub pressure_6h: &'a [Sample],
    /// Pressure over the last 12 hours (outlook), hPa
    pub pressure_12h: &'a [Sample],
    /// Wind speed over the last 10 minutes, knots
    pub wind_speed: &'a [Sample],
    /// Wind direction over the last 10 minutes, degrees
    pub wind_direction: &'a [Sample],
    /// Temperature over the last 2 hours, °C
    pub temperature: &'a [Sample],
    /// Current relative humidity, percent
    pub humidity_pct: f32,
    /// Station latitude, degrees
    pub latitude: f32,
    /// Station longitude, degrees
    pub longitude: f32,
    /// Time of the computation, same epoch as the samples
    pub now: Timestamp,
    /// Sunrise/sunset for the diurnal correction, if the host knows them
    pub solar: Option<SolarTimes>,
}

/// The complete forecast, produced fresh on every call
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Full one-line forecast sentence
    pub summary: heapless::String<512>,
    /// Table forecast text (with any snow note appended)
    pub forecast_text: heapless::String<96>,
    /// Icon id for the table row, `mdi:weather-*`
    pub icon: &'static str,
    /// Combined alert level
    pub alert: AlertLevel,
    /// Description matching the alert level
    pub alert_text: &'static str,
    /// Pressure-trend analysis passthrough
    pub trend: TrendResult,
    /// Latest pressure reading, hPa (0 when the channel is empty)
    pub pressure_hpa: f32,
    /// Normal pressure for the resolved region, hPa
    pub normal_pressure_hpa: f32,
    /// Smoothed wind passthrough
    pub wind: WindResult,
    /// Expected direction change
    pub shift: DirectionShift,
    /// Readable direction-change estimate
    pub shift_text: heapless::String<32>,
    /// Wind-speed estimate from the forecast table, knots
    pub estimated_wind_kn: f32,
    /// Upper wind estimate (1.2x), knots
    pub estimated_max_wind_kn: f32,
    /// Forecast wind range (low, high), knots
    pub wind_range_kn: (f32, f32),
    /// Fog analysis passthrough
    pub fog: FogResult,
    /// Temperature analysis passthrough
    pub temperature: TemperatureResult,
    /// Multi-window pressure outlook
    pub outlook: PressureOutlook,
    /// Resolved region label, `"Unknown"` when unresolved
    pub region_name: &'static str,
    /// Reference URL for the region, possibly empty
    pub region_url: &'static str,
    /// Wind-system description or fallback text
    pub wind_system_text: heapless::String<512>,
    /// Applicable wind systems, possibly empty
    pub wind_systems: heapless::Vec<&'static WindSystem, MAX_APPLICABLE>,
    /// True once every channel has produced at least one usable sample
    pub fully_started: bool,
}

/// One row of the forecast table
struct TableRow {
    text: &'static str,
    snow_note: Option<&'static str>,
    icon: &'static str,
    alert_floor: u8,
    wind_floor_kn: f32,
    wind_delta_kn: f32,
}

impl TableRow {
    const fn new(
        text: &'static str,
        icon: &'static str,
        alert_floor: u8,
        wind_floor_kn: f32,
        wind_delta_kn: f32,
    ) -> Self {
        Self {
            text,
            snow_note: None,
            icon,
            alert_floor,
            wind_floor_kn,
            wind_delta_kn,
        }
    }

    const fn with_snow(mut self, note: &'static str) -> Self {
        self.snow_note = Some(note);
        self
    }
}

/// Select the table row for (category, pressure band)
///
/// `RisingFast` shares the `Rising` rows: a fast rise is the same
/// improving story, only quicker, and the wind analyzer already reflects
/// the speed through its veering-fast estimate.
fn table_row(category: TrendCategory, pressure: f32, normal: f32) -> TableRow {
    let high = pressure > normal + PRESSURE_BAND_HPA;
    let mid = pressure > normal - PRESSURE_BAND_HPA;
    let above_deep = pressure > normal - DEEP_LOW_OFFSET_HPA;
    let above_extreme = pressure > normal - EXTREME_LOW_OFFSET_HPA;

    match category {
        TrendCategory::Rising | TrendCategory::RisingFast => {
            if high {
                TableRow::new(
                    "Clear(ish) skies, little to no rain, mild temperatures",
                    ICON_SUNNY,
                    0,
                    5.0,
                    -3.0,
                )
            } else if mid {
                TableRow::new(
                    "Stable, calm, and pleasant weather, possible light clouds",
                    ICON_PARTLY_CLOUDY,
                    0,
                    5.0,
                    -2.0,
                )
            } else {
                TableRow::new(
                    "Improving conditions, clearing skies",
                    ICON_PARTLY_RAINY,
                    0,
                    10.0,
                    0.0,
                )
            }
        }
        TrendCategory::Steady => {
            if high {
                TableRow::new(
                    "Continued fair, calm and predictable weather",
                    ICON_SUNNY,
                    0,
                    5.0,
                    0.0,
                )
            } else if mid {
                TableRow::new(
                    "Fair weather with occasional clouds",
                    ICON_PARTLY_CLOUDY,
                    0,
                    8.0,
                    0.0,
                )
            } else {
                TableRow::new(
                    "Changeable weather, gusty winds, possible rain later",
                    ICON_CLOUDY,
                    1,
                    12.0,
                    3.0,
                )
            }
        }
        TrendCategory::Falling => {
            if high {
                TableRow::new(
                    "Possible deterioration, watch for winds",
                    ICON_PARTLY_RAINY,
                    1,
                    15.0,
                    5.0,
                )
            } else if mid {
                TableRow::new(
                    "Changeable weather, gusty winds, increasing cloud cover",
                    ICON_RAINY,
                    2,
                    20.0,
                    8.0,
                )
            } else {
                TableRow::new(
                    "Stormy conditions likely, heavy rain expected",
                    ICON_POURING,
                    3,
                    25.0,
                    12.0,
                )
                .with_snow("Possible snow instead of rain")
            }
        }
        TrendCategory::FallingFast => {
            if above_deep {
                TableRow::new("Windy, rain likely", ICON_RAINY, 3, 25.0, 12.0)
            } else if above_extreme {
                TableRow::new(
                    "Strong winds, rain, possible squalls",
                    ICON_RAINY,
                    4,
                    30.0,
                    15.0,
                )
                .with_snow("Snowstorm possible")
            } else {
                TableRow::new(
                    "Very low pressure. Dangerous weather, high winds, big waves",
                    ICON_LIGHTNING,
                    5,
                    40.0,
                    25.0,
                )
            }
        }
        TrendCategory::Plummeting => {
            if above_deep {
                TableRow::new(
                    "Strong winds, thunderstorms, possible storm system",
                    ICON_LIGHTNING,
                    4,
                    30.0,
                    20.0,
                )
                .with_snow("Blizzard conditions possible")
            } else if above_extreme {
                TableRow::new(
                    "Low pressure. Major storm system, possible gale-force winds",
                    ICON_WINDY,
                    5,
                    40.0,
                    25.0,
                )
            } else {
                TableRow::new(
                    "Very low pressure. Severe weather, hurricane/cyclone possible",
                    ICON_WINDY,
                    5,
                    50.0,
                    30.0,
                )
            }
        }
    }
}

/// Replace the base with a suffixed level when the wind estimate crosses a
/// threshold bound at or above it; first crossing wins
fn apply_wind_suffix(base: u8, estimated_max_kn: f32) -> AlertLevel {
    for &(speed_kn, level, suffix) in WIND_ALERT_THRESHOLDS.iter() {
        if estimated_max_kn > speed_kn {
            if base <= level {
                return AlertLevel {
                    base: level,
                    wind_suffix: suffix,
                };
            }
            break;
        }
    }
    AlertLevel::new(base)
}

/// The forecast engine; cheap to construct, holds only configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    /// Build an engine from a validated configuration
    pub const fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub const fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Compute a complete forecast from one set of inputs
    ///
    /// Pure: identical inputs give an identical result. Never fails;
    /// degraded channels show through `fully_started`, the history counts
    /// and each analyzer's documented defaults.
    pub fn compute(&self, input: &ForecastInput<'_>) -> ForecastResult {
        let trend = trend::analyze(input.pressure);
        let wind = wind::analyze(input.wind_speed, input.wind_direction);
        let temperature = temperature::analyze(input.temperature, input.now, input.solar);

        let current_temp = samples::last_valid(input.temperature).map(|s| s.value);
        let fog = fog::analyze(
            input.humidity_pct,
            current_temp.unwrap_or(f32::NAN),
            wind.speed_kn,
            self.config.fog_area_type,
        );

        let pressure_hpa = samples::last_valid(input.pressure).map_or(0.0, |s| s.value);

        // Region + wind system; unresolved degrades to a generic label
        let resolution = match wind.sector {
            Some(sector) => {
                resolver::resolve(input.latitude, input.longitude, sector, wind.speed_kn).ok()
            }
            None => None,
        };
        let region_key = resolution.as_ref().map(|r| r.region.key);
        let (region_name, region_url) = match resolution.as_ref() {
            Some(r) => (r.region.key.label(), r.region.url),
            None => ("Unknown", ""),
        };
        let (wind_system_text, wind_systems) = match resolution {
            Some(r) => (r.text, r.systems),
            None => {
                let mut text = heapless::String::new();
                let _ = text.push_str(NO_DESCRIPTION);
                (text, heapless::Vec::new())
            }
        };

        let normal = normal_pressure_hpa(region_key);
        let row = table_row(trend.category, pressure_hpa, normal);

        // Warm air feeds storms, cold air stabilizes highs
        let temp_modifier: i8 = match current_temp {
            Some(t) if t > HOT_AIR_C => 1,
            Some(t) if t < COLD_AIR_C => -1,
            _ => 0,
        };
        // Each row enforces its floor after the modifier
        let table_alert = (row.alert_floor as i8).max(temp_modifier) as u8;

        let mut forecast_text: heapless::String<96> = heapless::String::new();
        let _ = forecast_text.push_str(row.text);
        if let Some(note) = row.snow_note {
            if current_temp.map_or(false, |t| t < 0.0) {
                let _ = write!(forecast_text, ". {note}");
            }
        }

        let estimated_wind_kn = (wind.speed_kn + row.wind_delta_kn).max(row.wind_floor_kn);
        let estimated_max_wind_kn = libm::roundf(estimated_wind_kn * 1.2);
        let wind_range_kn = wind::forecast_range(estimated_wind_kn, trend.category);

        let base = table_alert
            .max(temperature.alert_level)
            .max(fog.alert_level)
            .min(5);
        let alert = apply_wind_suffix(base, estimated_max_wind_kn);

        let shift = match wind.sector {
            Some(sector) => DirectionShift::from_trend(sector, trend.category),
            None => DirectionShift::Steady,
        };
        let shift_text = match wind.sector {
            Some(sector) => shift.describe(sector),
            None => {
                let mut t = heapless::String::new();
                let _ = t.push_str("direction unknown");
                t
            }
        };

        let outlook = PressureOutlook::assess(
            input.pressure,
            input.pressure_6h,
            input.pressure_12h,
            pressure_hpa,
            region_key,
        );

        let fully_started = samples::valid_count(input.pressure) > 0
            && wind.speed_history > 0
            && wind.direction_history > 0
            && samples::valid_count(input.temperature) > 0
            && input.humidity_pct.is_finite();

        let mut summary: heapless::String<512> = heapless::String::new();
        let _ = write!(
            summary,
            "{}. {}. Wind estimate {}-{}kn, {}. {} right now. {}.",
            trend.analysis_text(),
            forecast_text,
            wind_range_kn.0 as i32,
            wind_range_kn.1 as i32,
            shift_text,
            fog.text,
            temperature.effect,
        );

        ForecastResult {
            summary,
            forecast_text,
            icon: row.icon,
            alert,
            alert_text: alert.description(),
            trend,
            pressure_hpa,
            normal_pressure_hpa: normal,
            wind,
            shift,
            shift_text,
            estimated_wind_kn,
            estimated_max_wind_kn,
            wind_range_kn,
            fog,
            temperature,
            outlook,
            region_name,
            region_url,
            wind_system_text,
            wind_systems,
            fully_started,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{MS_PER_HOUR, MS_PER_MINUTE};

    fn pressure_ramp(start: f32, per_hour: f32, hours: usize) -> heapless::Vec<Sample, 16> {
        (0..=hours)
            .map(|h| Sample::new(h as u64 * MS_PER_HOUR, start + per_hour * h as f32))
            .collect()
    }

    fn flat_channel(value: f32, n: usize) -> heapless::Vec<Sample, 16> {
        (0..n)
            .map(|i| Sample::new(i as u64 * MS_PER_MINUTE, value))
            .collect()
    }

    fn input_from<'a>(
        pressure: &'a [Sample],
        wind_speed: &'a [Sample],
        wind_direction: &'a [Sample],
        temperature: &'a [Sample],
    ) -> ForecastInput<'a> {
        ForecastInput {
            pressure,
            pressure_6h: pressure,
            pressure_12h: pressure,
            wind_speed,
            wind_direction,
            temperature,
            humidity_pct: 60.0,
            latitude: 43.0,
            longitude: 6.0,
            now: 12 * MS_PER_HOUR,
            solar: None,
        }
    }

    #[test]
    fn settled_high_reads_fine() {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let pressure = pressure_ramp(1024.0, 0.0, 3);
        let speed = flat_channel(8.0, 5);
        let dir = flat_channel(315.0, 5);
        let temp = flat_channel(18.0, 5);
        let result = engine.compute(&input_from(&pressure, &speed, &dir, &temp));

        assert_eq!(result.alert, AlertLevel::new(0));
        assert_eq!(result.icon, ICON_SUNNY);
        assert!(result.forecast_text.contains("Continued fair"));
        assert!(result.fully_started);
        assert_eq!(result.region_name, "Mediterranean Northwest");
        // NW at the Gulf of Lion with 8 kn: the Mistral applies
        assert!(result.wind_system_text.starts_with("Mistral:"));
    }

    #[test]
    fn deep_plummeting_low_is_alarm() {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let pressure = pressure_ramp(1008.0, -5.0, 3); // ends at 993
        let speed = flat_channel(25.0, 5);
        let dir = flat_channel(200.0, 5);
        let temp = flat_channel(15.0, 5);
        let result = engine.compute(&input_from(&pressure, &speed, &dir, &temp));

        assert_eq!(result.trend.category, TrendCategory::Plummeting);
        assert_eq!(result.alert.base, 5);
        assert_eq!(result.alert.wind_suffix, 1);
        assert_eq!(result.alert_text, AlertLevel { base: 5, wind_suffix: 1 }.description());
        assert!(result.estimated_max_wind_kn > 50.0);
        assert!(result.forecast_text.contains("hurricane/cyclone"));
    }

    #[test]
    fn snow_note_only_below_freezing() {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let pressure = pressure_ramp(1004.0, -1.0, 3); // falling, low band
        let speed = flat_channel(12.0, 5);
        let dir = flat_channel(90.0, 5);

        let cold = flat_channel(-2.0, 5);
        let result = engine.compute(&input_from(&pressure, &speed, &dir, &cold));
        assert!(result.forecast_text.contains("snow instead of rain"));

        let mild = flat_channel(8.0, 5);
        let result = engine.compute(&input_from(&pressure, &speed, &dir, &mild));
        assert!(!result.forecast_text.contains("snow"));
    }

    #[test]
    fn hot_air_raises_a_quiet_forecast() {
        let engine = ForecastEngine::new(ForecastConfig::default());
        // Steady pressure in the high band: floor 0
        let pressure = pressure_ramp(1024.0, 0.0, 3);
        let speed = flat_channel(8.0, 5);
        let dir = flat_channel(45.0, 5);

        let mild = flat_channel(15.0, 5);
        let result = engine.compute(&input_from(&pressure, &speed, &dir, &mild));
        assert_eq!(result.alert.base, 0);

        let hot = flat_channel(28.0, 5);
        let result = engine.compute(&input_from(&pressure, &speed, &dir, &hot));
        assert_eq!(result.alert.base, 1);

        // The modifier never digs below a row's floor: a steady low band
        // stays at 1 even in cold air.
        let low = pressure_ramp(1004.0, 0.0, 3);
        let cold = flat_channel(2.0, 5);
        let result = engine.compute(&input_from(&low, &speed, &dir, &cold));
        assert_eq!(result.alert.base, 1);
    }

    #[test]
    fn empty_inputs_still_produce_a_result() {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let input = ForecastInput {
            pressure: &[],
            pressure_6h: &[],
            pressure_12h: &[],
            wind_speed: &[],
            wind_direction: &[],
            temperature: &[],
            humidity_pct: f32::NAN,
            latitude: 0.0,
            longitude: 0.0,
            now: 0,
            solar: None,
        };
        let result = engine.compute(&input);
        assert!(!result.fully_started);
        assert!(result.trend.degraded);
        assert_eq!(result.region_name, "Unknown");
        assert_eq!(result.wind_system_text.as_str(), NO_DESCRIPTION);
        assert!(!result.summary.is_empty());
    }

    #[test]
    fn identical_inputs_identical_results() {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let pressure = pressure_ramp(1012.0, -0.8, 3);
        let speed = flat_channel(14.0, 5);
        let dir = flat_channel(250.0, 5);
        let temp = flat_channel(12.0, 5);
        let input = input_from(&pressure, &speed, &dir, &temp);
        assert_eq!(engine.compute(&input), engine.compute(&input));
    }

    #[test]
    fn config_rejects_out_of_range_lookback() {
        assert!(ForecastConfig::new(0, FogAreaType::Normal).is_err());
        assert!(ForecastConfig::new(13, FogAreaType::Normal).is_err());
        assert!(ForecastConfig::new(12, FogAreaType::Normal).is_ok());
    }

    #[test]
    fn alert_display_forms() {
        let mut s: heapless::String<8> = heapless::String::new();
        let _ = write!(s, "{}", AlertLevel::new(3));
        assert_eq!(s.as_str(), "3");
        s.clear();
        let _ = write!(s, "{}", AlertLevel { base: 2, wind_suffix: 2 });
        assert_eq!(s.as_str(), "2.2");
    }

    #[test]
    fn wind_suffix_replaces_lower_bases() {
        assert_eq!(
            apply_wind_suffix(2, 55.0),
            AlertLevel { base: 5, wind_suffix: 1 }
        );
        assert_eq!(
            apply_wind_suffix(5, 45.0),
            AlertLevel::new(5) // 40 kn bound is level 4, base 5 wins
        );
        assert_eq!(
            apply_wind_suffix(1, 22.0),
            AlertLevel { base: 2, wind_suffix: 1 }
        );
        assert_eq!(apply_wind_suffix(3, 10.0), AlertLevel::new(3));
    }
}
