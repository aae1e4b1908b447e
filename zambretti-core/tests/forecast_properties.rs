//! Property tests over the forecast pipeline
//!
//! Random-but-plausible sensor histories; the properties pin the engine's
//! hard guarantees rather than specific outputs.

use proptest::prelude::*;

use zambretti_core::analyzers::{fog, trend};
use zambretti_core::{
    compass, FogAreaType, ForecastConfig, ForecastEngine, ForecastInput, Sample,
};

const MS_PER_HOUR: u64 = 3_600_000;

fn pressure_series() -> impl Strategy<Value = Vec<Sample>> {
    (
        980.0f32..1045.0,
        prop::collection::vec(-3.0f32..3.0, 0..12),
    )
        .prop_map(|(start, deltas)| {
            let mut value = start;
            let mut out = vec![Sample::new(0, value)];
            for (i, d) in deltas.iter().enumerate() {
                value += d;
                out.push(Sample::new((i as u64 + 1) * MS_PER_HOUR, value));
            }
            out
        })
}

fn minute_series(range: core::ops::Range<f32>, len: usize) -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec(range, 0..len).prop_map(|values| {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(i as u64 * 60_000, v))
            .collect()
    })
}

proptest! {
    #[test]
    fn alert_base_and_suffix_stay_in_range(
        pressure in pressure_series(),
        speed in minute_series(0.0..60.0, 10),
        direction in minute_series(0.0..360.0, 10),
        temperature in minute_series(-15.0..40.0, 8),
        humidity in 0.0f32..100.0,
        lat in -60.0f32..65.0,
        lon in -100.0f32..40.0,
    ) {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let input = ForecastInput {
            pressure: &pressure,
            pressure_6h: &pressure,
            pressure_12h: &pressure,
            wind_speed: &speed,
            wind_direction: &direction,
            temperature: &temperature,
            humidity_pct: humidity,
            latitude: lat,
            longitude: lon,
            now: 12 * MS_PER_HOUR,
            solar: None,
        };
        let result = engine.compute(&input);

        prop_assert!(result.alert.base <= 5);
        prop_assert!(matches!(result.alert.wind_suffix, 0 | 1 | 2));
        prop_assert!((1..=5).contains(&result.outlook.warning_level));
        prop_assert!(result.wind_range_kn.0 <= result.wind_range_kn.1);
        prop_assert!(result.wind_range_kn.0 >= 0.0);
        prop_assert!(!result.summary.is_empty());
    }

    #[test]
    fn identical_inputs_are_deterministic(
        pressure in pressure_series(),
        humidity in 20.0f32..100.0,
    ) {
        let engine = ForecastEngine::new(ForecastConfig::default());
        let input = ForecastInput {
            pressure: &pressure,
            pressure_6h: &pressure,
            pressure_12h: &pressure,
            wind_speed: &[],
            wind_direction: &[],
            temperature: &[],
            humidity_pct: humidity,
            latitude: 43.0,
            longitude: 5.0,
            now: 12 * MS_PER_HOUR,
            solar: None,
        };
        prop_assert_eq!(engine.compute(&input), engine.compute(&input));
    }

    #[test]
    fn fog_probability_never_rises_with_wind(
        humidity in 20.0f32..100.0,
        temp in -5.0f32..35.0,
        wind_a in 0.0f32..40.0,
        wind_b in 0.0f32..40.0,
    ) {
        let (calm, windy) = if wind_a <= wind_b { (wind_a, wind_b) } else { (wind_b, wind_a) };
        let p_calm = fog::analyze(humidity, temp, calm, FogAreaType::Normal).probability_pct;
        let p_windy = fog::analyze(humidity, temp, windy, FogAreaType::Normal).probability_pct;
        prop_assert!(p_windy <= p_calm);
    }

    #[test]
    fn fog_probability_never_drops_as_air_saturates(
        temp in 0.0f32..20.0,
        hum_a in 30.0f32..100.0,
        hum_b in 30.0f32..100.0,
    ) {
        // More humidity means a smaller dew-point spread, which must never
        // lower the fog chance (temperature and wind held fixed).
        let (drier, damper) = if hum_a <= hum_b { (hum_a, hum_b) } else { (hum_b, hum_a) };
        let p_drier = fog::analyze(drier, temp, 0.0, FogAreaType::Normal).probability_pct;
        let p_damper = fog::analyze(damper, temp, 0.0, FogAreaType::Normal).probability_pct;
        prop_assert!(p_damper >= p_drier);
    }

    #[test]
    fn fog_probability_is_bounded(
        humidity in 0.0f32..100.0,
        temp in -20.0f32..45.0,
        wind in 0.0f32..60.0,
    ) {
        for area in [
            FogAreaType::FrequentDenseFog,
            FogAreaType::FogProne,
            FogAreaType::Normal,
            FogAreaType::RareFog,
            FogAreaType::HardlyEverFog,
        ] {
            let result = fog::analyze(humidity, temp, wind, area);
            prop_assert!(result.probability_pct <= 100);
            prop_assert!(result.alert_level == 0 || result.alert_level == 3);
        }
    }

    #[test]
    fn slope_category_agrees_with_slope_sign(pressure in pressure_series()) {
        let result = trend::analyze(&pressure);
        if result.category.is_rising() {
            prop_assert!(result.slope_hpa_per_hour > 0.0);
        }
        if result.category.is_falling() {
            prop_assert!(result.slope_hpa_per_hour < 0.0);
        }
    }

    #[test]
    fn circular_mean_stays_on_the_compass(
        bearings in prop::collection::vec(0.0f32..360.0, 1..16),
    ) {
        if let Some(mean) = compass::circular_mean(bearings.iter().copied()) {
            prop_assert!((0.0..360.0).contains(&mean));
        }
    }
}
