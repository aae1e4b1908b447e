//! Wind-System Resolver
//!
//! Answers "what named wind is this?" for a location and direction through
//! a four-stage lookup chain over the static catalogs:
//!
//! 1. Region: first catalog bounding box containing (lat, lon); no match
//!    is an [`UnresolvedRegion`](crate::errors::AnalysisError) the caller
//!    degrades to a generic label.
//! 2. Possible: the (region, sector) row of the wind index.
//! 3. Applicable: possible systems whose own box contains the location,
//!    in index order.
//! 4. Fallback: the (region, sector) fallback description when nothing
//!    applies, or the generic default when the region has no row.
//!
//! Smoothed wind below 5 kn short-circuits the chain: naming a regional
//! wind system for drifting air would be noise, so the result is the
//! fallback text prefixed "No wind, so ...".

use core::fmt::Write;

use crate::catalog::{self, Region, WindSystem};
use crate::compass::CompassSector;
use crate::constants::wind::CALM_WIND_MAX_KN;
use crate::errors::{AnalysisError, AnalysisResult};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Generic description when no catalog text applies
pub const NO_DESCRIPTION: &str = "No wind description available.";

/// Longest possible-system list in the wind index
pub const MAX_APPLICABLE: usize = 4;

/// Outcome of one resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The resolved region
    pub region: &'static Region,
    /// Applicable wind systems, in index order; empty when the fallback
    /// text was used
    pub systems: heapless::Vec<&'static WindSystem, MAX_APPLICABLE>,
    /// Composed description: either the applicable systems ("Mistral:
    /// ...") or the fallback text, possibly with a calm/no-system prefix
    pub text: heapless::String<512>,
    /// True when wind was below the calm threshold
    pub calm: bool,
}

fn fallback_text(region: &'static Region, sector: CompassSector) -> &'static str {
    catalog::fallback_description(region.key, sector).unwrap_or(NO_DESCRIPTION)
}

/// Resolve the prevailing wind system for a location and direction
pub fn resolve(
    latitude: f32,
    longitude: f32,
    sector: CompassSector,
    wind_speed_kn: f32,
) -> AnalysisResult<Resolution> {
    let region = catalog::region_for(latitude, longitude).ok_or(
        AnalysisError::UnresolvedRegion {
            latitude,
            longitude,
        },
    )?;

    if wind_speed_kn < CALM_WIND_MAX_KN {
        let mut text = heapless::String::new();
        let _ = write!(text, "No wind, so {}", fallback_text(region, sector));
        return Ok(Resolution {
            region,
            systems: heapless::Vec::new(),
            text,
            calm: true,
        });
    }

    let possible = catalog::possible_systems(region.key, sector);
    if possible.is_empty() {
        log_debug!(
            "no wind systems indexed for {} from {}",
            region.key.label(),
            sector.label()
        );
        let mut text = heapless::String::new();
        let _ = write!(
            text,
            "No systems in region, so {}",
            fallback_text(region, sector)
        );
        return Ok(Resolution {
            region,
            systems: heapless::Vec::new(),
            text,
            calm: false,
        });
    }

    let mut systems: heapless::Vec<&'static WindSystem, MAX_APPLICABLE> = heapless::Vec::new();
    for name in possible {
        if let Some(system) = catalog::wind_system(name) {
            if system.bounds.contains(latitude, longitude) {
                // Capacity matches the longest index row, pushes cannot fail
                let _ = systems.push(system);
            }
        }
    }

    let mut text = heapless::String::new();
    if systems.is_empty() {
        let _ = text.push_str(fallback_text(region, sector));
    } else {
        for (i, system) in systems.iter().enumerate() {
            if i > 0 {
                let _ = text.push('\n');
            }
            let _ = write!(text, "{}: {}", system.name, system.description);
        }
    }

    Ok(Resolution {
        region,
        systems,
        text,
        calm: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionKey;

    // Off Toulon, the Mistral's home water (east of the Western Europe
    // Coast box, which ends at 5 degrees east)
    const LION_LAT: f32 = 42.9;
    const LION_LON: f32 = 5.8;

    #[test]
    fn mistral_resolves_on_nw_wind() {
        let res = resolve(LION_LAT, LION_LON, CompassSector::Nw, 25.0).unwrap();
        assert_eq!(res.region.key, RegionKey::MediterraneanNorthwest);
        assert_eq!(res.systems.len(), 1);
        assert_eq!(res.systems[0].name, "Mistral");
        assert!(res.text.starts_with("Mistral:"));
    }

    #[test]
    fn calm_wind_short_circuits() {
        let res = resolve(LION_LAT, LION_LON, CompassSector::Nw, 3.0).unwrap();
        assert!(res.calm);
        assert!(res.systems.is_empty());
        assert!(res.text.starts_with("No wind, so "));
    }

    #[test]
    fn out_of_bounds_systems_fall_back() {
        // Ligurian coast on a southerly: Khamsin and Datoo are indexed but
        // their boxes sit further east/south; Ostro covers it though.
        let res = resolve(44.0, 8.5, CompassSector::S, 15.0).unwrap();
        assert!(res.systems.iter().all(|s| s.bounds.contains(44.0, 8.5)));

        // A sector whose possible systems all miss the location must use
        // the regional fallback, never return empty text.
        let res = resolve(47.5, -9.0, CompassSector::Se, 15.0).unwrap();
        assert!(!res.text.is_empty());
    }

    #[test]
    fn empty_index_row_uses_region_fallback() {
        // Caribbean N-NE has no indexed systems
        let res = resolve(20.0, -75.0, CompassSector::Nne, 12.0).unwrap();
        assert_eq!(res.region.key, RegionKey::Caribbean);
        assert!(res.systems.is_empty());
        assert!(res.text.starts_with("No systems in region, so "));
    }

    #[test]
    fn unresolved_region_is_an_error() {
        let err = resolve(-35.0, 150.0, CompassSector::N, 10.0).unwrap_err();
        assert!(matches!(err, AnalysisError::UnresolvedRegion { .. }));
    }

    #[test]
    fn broad_features_without_catalog_entries_fall_back() {
        // Mid-ocean on a SW wind: "Storm Track" has no catalog entry on
        // purpose, and neither Westerlies nor Gulf Stream Influence
        // reaches 35N 40W, so this exercises the fallback path.
        let res = resolve(35.0, -40.0, CompassSector::Sw, 20.0).unwrap();
        assert_eq!(res.region.key, RegionKey::NorthAtlantic);
        assert!(res.systems.is_empty());
        assert!(!res.text.is_empty());
    }
}
