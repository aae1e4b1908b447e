//! Forecast Table Calibration
//!
//! Band offsets are relative to the regional normal pressure, so the same
//! table reads correctly in the Mediterranean (normals near 1015 hPa) and
//! in the North Atlantic storm track (normals a few hPa lower).

use crate::catalog::RegionKey;

/// Fallback normal pressure when no region resolves (hPa)
pub const STANDARD_NORMAL_PRESSURE_HPA: f32 = 1015.0;

/// Half-width of the "near normal" pressure band (hPa)
pub const PRESSURE_BAND_HPA: f32 = 5.0;

/// Offset below normal separating "low" from "very low" in the fast-falling
/// and plummeting rows (hPa)
pub const DEEP_LOW_OFFSET_HPA: f32 = 10.0;

/// Offset below normal separating "very low" from "extreme" (hPa)
pub const EXTREME_LOW_OFFSET_HPA: f32 = 15.0;

/// Annual-mean sea-level pressure normal for a region (hPa)
///
/// Coarse climatology: the storm-track regions sit a little below the
/// subtropical ones. Monthly resolution would be better but the engine
/// only uses the normal to center its bands, so ±2 hPa is immaterial.
pub const fn normal_pressure_hpa(region: Option<RegionKey>) -> f32 {
    match region {
        Some(RegionKey::MediterraneanNorthwest)
        | Some(RegionKey::MediterraneanSouthwest)
        | Some(RegionKey::MediterraneanNortheast)
        | Some(RegionKey::MediterraneanSoutheast) => 1015.0,
        Some(RegionKey::Caribbean) => 1016.0,
        Some(RegionKey::BritishIsles) | Some(RegionKey::NorthSeaBaltic) => 1013.0,
        Some(RegionKey::WesternEuropeCoast) => 1016.0,
        Some(RegionKey::AmericanEastCoast) => 1016.0,
        Some(RegionKey::NorthAtlantic) => 1012.0,
        None => STANDARD_NORMAL_PRESSURE_HPA,
    }
}
