//! Temperature Analyzer
//!
//! A sharp temperature change inside two hours is a frontal signature: a
//! 10 °C drop usually means a cold front with gusty wind shifts right
//! behind it. The catch is the daily cycle - mornings warm and evenings
//! cool without any front involved - so changes that coincide with a
//! window around sunrise (warming) or sunset (cooling) are halved before
//! classification rather than suppressed outright: a front passing at dusk
//! still shows, just with a higher effective threshold.
//!
//! Solar times come from the caller; without them the analyzer classifies
//! the raw change.

use crate::constants::temperature::{
    COOLING_ALERT, COOLING_C, DIURNAL_DAMPING, RAPID_COOLING_ALERT, RAPID_COOLING_C,
    RAPID_WARMING_ALERT, RAPID_WARMING_C, SUNRISE_AFTER_MS, SUNRISE_BEFORE_MS, SUNSET_AFTER_MS,
    SUNSET_BEFORE_MS, WARMING_C,
};
use crate::samples::{self, Sample};
use crate::time::{within_window, Timestamp};

/// Sunrise and sunset for the current location, caller-supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTimes {
    /// Nearest sunrise, same epoch as the samples
    pub sunrise: Timestamp,
    /// Nearest sunset, same epoch as the samples
    pub sunset: Timestamp,
}

/// Outcome of the temperature-change analysis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureResult {
    /// Change across the window after diurnal damping, °C
    pub change_c: f32,
    /// Classification text, a fixed sentinel when nothing is notable
    pub effect: &'static str,
    /// Alert contribution (0 when no alert)
    pub alert_level: u8,
    /// Finite samples in the window
    pub history_count: usize,
    /// True when there were too few samples to classify
    pub degraded: bool,
}

/// Sentinel text while the channel has too little history
pub const LEARNING: &str = "Learning temperature trends";

/// Sentinel text when the change is unremarkable
pub const NO_ALERT: &str = "No temperature alerts";

/// Classify the temperature change over the (2-hour) sample window
pub fn analyze(
    temperature: &[Sample],
    now: Timestamp,
    solar: Option<SolarTimes>,
) -> TemperatureResult {
    let count = samples::valid_count(temperature);
    let (first, last) = match (samples::first_valid(temperature), samples::last_valid(temperature))
    {
        (Some(f), Some(l)) if count >= 2 => (f, l),
        _ => {
            return TemperatureResult {
                change_c: 0.0,
                effect: LEARNING,
                alert_level: 0,
                history_count: count,
                degraded: true,
            }
        }
    };

    let mut change = last.value - first.value;

    if let Some(solar) = solar {
        let in_sunrise = within_window(now, solar.sunrise, SUNRISE_BEFORE_MS, SUNRISE_AFTER_MS);
        let in_sunset = within_window(now, solar.sunset, SUNSET_BEFORE_MS, SUNSET_AFTER_MS);
        // Warming around sunrise and cooling around sunset are expected
        // diurnal effects, not weather signals
        if (in_sunrise && change > 0.0) || (in_sunset && change < 0.0) {
            change *= DIURNAL_DAMPING;
        }
    }

    let (effect, alert_level) = if change >= RAPID_WARMING_C {
        (
            "Rapid significant warming; potential heatwave, strong thermal winds",
            RAPID_WARMING_ALERT,
        )
    } else if change >= WARMING_C {
        (
            "Noticeable temperature rise; warm air front moving in, wind increase",
            0,
        )
    } else if change <= RAPID_COOLING_C {
        (
            "Sharp temperature drop; cold front, strong gusty winds and storms",
            RAPID_COOLING_ALERT,
        )
    } else if change <= COOLING_C {
        (
            "Rapid significant cooling; unstable weather, wind increase",
            COOLING_ALERT,
        )
    } else {
        (NO_ALERT, 0)
    };

    TemperatureResult {
        change_c: change,
        effect,
        alert_level,
        history_count: count,
        degraded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MS_PER_HOUR;

    const NOON: Timestamp = 12 * MS_PER_HOUR;

    fn window(start_c: f32, end_c: f32) -> [Sample; 2] {
        [
            Sample::new(NOON - 2 * MS_PER_HOUR, start_c),
            Sample::new(NOON, end_c),
        ]
    }

    #[test]
    fn sharp_drop_is_strongest_alert() {
        let result = analyze(&window(18.0, 6.0), NOON, None);
        assert_eq!(result.alert_level, 5);
        assert_eq!(result.change_c, -12.0);
        assert!(result.effect.contains("cold front"));
    }

    #[test]
    fn moderate_cooling_alerts_at_three() {
        let result = analyze(&window(18.0, 12.0), NOON, None);
        assert_eq!(result.alert_level, 3);
    }

    #[test]
    fn warming_note_carries_no_alert() {
        let result = analyze(&window(10.0, 16.0), NOON, None);
        assert_eq!(result.alert_level, 0);
        assert!(result.effect.contains("warm air front"));
    }

    #[test]
    fn sunset_cooling_is_damped() {
        let solar = SolarTimes {
            sunrise: 6 * MS_PER_HOUR,
            sunset: NOON + MS_PER_HOUR,
        };
        // -12 degrees raw would be alert 5, but we are an hour before
        // sunset, so it halves to -6: moderate cooling only.
        let result = analyze(&window(18.0, 6.0), NOON, Some(solar));
        assert_eq!(result.change_c, -6.0);
        assert_eq!(result.alert_level, 3);
    }

    #[test]
    fn sunrise_damping_ignores_cooling() {
        let solar = SolarTimes {
            sunrise: NOON,
            sunset: 20 * MS_PER_HOUR,
        };
        let result = analyze(&window(18.0, 6.0), NOON, Some(solar));
        // Cooling near sunrise is not diurnal, keep it undamped
        assert_eq!(result.change_c, -12.0);
        assert_eq!(result.alert_level, 5);
    }

    #[test]
    fn single_sample_is_learning() {
        let result = analyze(&[Sample::new(NOON, 15.0)], NOON, None);
        assert!(result.degraded);
        assert_eq!(result.effect, LEARNING);
        assert_eq!(result.alert_level, 0);
    }
}
