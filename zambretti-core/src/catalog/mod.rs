//! Static Geographic and Wind-System Catalogs
//!
//! Four read-only tables drive the wind-system resolver:
//!
//! 1. [`REGIONS`] - ordered bounding boxes; the first box containing a
//!    point wins. Ordering is a contract, not an accident: a sub-region
//!    must be listed before any larger region it nests inside (the British
//!    Isles sit inside the North Atlantic box, so they come first). A test
//!    below pins this invariant.
//! 2. [`WIND_SYSTEMS`] - named wind systems with their own bounding boxes
//!    and descriptions.
//! 3. [`WIND_INDEX`] - per (region, sector) the ordered list of wind-system
//!    names that can occur there ("possible" set).
//! 4. [`REGIONAL_FALLBACK`] - per (region, sector) a plain description used
//!    when no possible system's box contains the current location.
//!
//! All tables are `'static` and immutable, so concurrently running forecast
//! instances share them by reference with no locking.

mod fallback;
mod regions;
mod wind_index;
mod wind_systems;

pub use fallback::REGIONAL_FALLBACK;
pub use regions::REGIONS;
pub use wind_index::WIND_INDEX;
pub use wind_systems::WIND_SYSTEMS;

use crate::compass::CompassSector;

/// Axis-aligned latitude/longitude box, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern edge (degrees)
    pub lat_min: f32,
    /// Northern edge (degrees)
    pub lat_max: f32,
    /// Western edge (degrees)
    pub lon_min: f32,
    /// Eastern edge (degrees)
    pub lon_max: f32,
}

impl BoundingBox {
    /// Construct a box from (lat_min, lat_max, lon_min, lon_max)
    pub const fn new(lat_min: f32, lat_max: f32, lon_min: f32, lon_max: f32) -> Self {
        Self { lat_min, lat_max, lon_min, lon_max }
    }

    /// Whether the point lies inside the box (edges count as inside)
    pub fn contains(&self, lat: f32, lon: f32) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }
}

/// Identifier of a configured region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionKey {
    /// UK and Ireland
    BritishIsles,
    /// Atlantic coast of Iberia and France
    WesternEuropeCoast,
    /// North Sea and the Baltic
    NorthSeaBaltic,
    /// Spain, France and the Ligurian coast
    MediterraneanNorthwest,
    /// Balearics, Algeria, Tunisia and western Italy
    MediterraneanSouthwest,
    /// Adriatic, Greece, Balkans and Turkey
    MediterraneanNortheast,
    /// Levant, Cyprus, Egypt and Crete
    MediterraneanSoutheast,
    /// Caribbean basin
    Caribbean,
    /// US and Canadian eastern seaboard
    AmericanEastCoast,
    /// Open North Atlantic
    NorthAtlantic,
}

impl RegionKey {
    /// Human-readable region name
    pub const fn label(self) -> &'static str {
        match self {
            Self::BritishIsles => "British Isles",
            Self::WesternEuropeCoast => "Western Europe Coast",
            Self::NorthSeaBaltic => "North Sea and Baltic",
            Self::MediterraneanNorthwest => "Mediterranean Northwest",
            Self::MediterraneanSouthwest => "Mediterranean Southwest",
            Self::MediterraneanNortheast => "Mediterranean Northeast",
            Self::MediterraneanSoutheast => "Mediterranean Southeast",
            Self::Caribbean => "Caribbean",
            Self::AmericanEastCoast => "American East Coast",
            Self::NorthAtlantic => "North Atlantic",
        }
    }
}

/// A configured region: key, bounds and a reference link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Region identifier
    pub key: RegionKey,
    /// Geographic extent
    pub bounds: BoundingBox,
    /// Reference URL for the region's local winds
    pub url: &'static str,
}

/// A named wind system with its geographic extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSystem {
    /// Conventional name, e.g. "Mistral"
    pub name: &'static str,
    /// Where the system occurs
    pub bounds: BoundingBox,
    /// One-line characterization
    pub description: &'static str,
    /// Reference URL, possibly empty
    pub url: &'static str,
}

/// Per-region wind index row: possible system names for each of the 16
/// sectors, indexed by `CompassSector as usize`
#[derive(Debug, Clone, Copy)]
pub struct WindIndexEntry {
    /// Region the row belongs to
    pub region: RegionKey,
    /// Ordered "possible" name lists, one per sector
    pub by_sector: [&'static [&'static str]; 16],
}

/// Per-region fallback row: one description per sector
#[derive(Debug, Clone, Copy)]
pub struct RegionalFallbackEntry {
    /// Region the row belongs to
    pub region: RegionKey,
    /// Fallback description per sector
    pub by_sector: [&'static str; 16],
}

/// First region whose bounding box contains the point, per catalog order
pub fn region_for(lat: f32, lon: f32) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.bounds.contains(lat, lon))
}

/// Wind-system catalog entry by name, `None` for unknown names
///
/// Some index rows name broad circulation features (jet streams, storm
/// tracks) that have no catalog entry on purpose; those never match a
/// location and resolution falls through to the regional fallback.
pub fn wind_system(name: &str) -> Option<&'static WindSystem> {
    WIND_SYSTEMS.iter().find(|w| w.name == name)
}

/// Ordered possible wind-system names for (region, sector)
pub fn possible_systems(region: RegionKey, sector: CompassSector) -> &'static [&'static str] {
    WIND_INDEX
        .iter()
        .find(|e| e.region == region)
        .map(|e| e.by_sector[sector as usize])
        .unwrap_or(&[])
}

/// Fallback description for (region, sector), if one is configured
pub fn fallback_description(region: RegionKey, sector: CompassSector) -> Option<&'static str> {
    REGIONAL_FALLBACK
        .iter()
        .find(|e| e.region == region)
        .map(|e| e.by_sector[sector as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_edges_are_inside() {
        let b = BoundingBox::new(49.0, 61.0, -12.0, 2.0);
        assert!(b.contains(49.0, -12.0));
        assert!(b.contains(61.0, 2.0));
        assert!(!b.contains(48.9, 0.0));
    }

    #[test]
    fn nested_regions_are_listed_before_their_parent() {
        // Specific-before-general is the contract the resolver depends on:
        // every pair of nested boxes must have the smaller one first.
        for (i, inner) in REGIONS.iter().enumerate() {
            for outer in REGIONS.iter().take(i) {
                let o = &outer.bounds;
                let n = &inner.bounds;
                let outer_covers_inner = o.lat_min <= n.lat_min
                    && o.lat_max >= n.lat_max
                    && o.lon_min <= n.lon_min
                    && o.lon_max >= n.lon_max;
                assert!(
                    !outer_covers_inner || outer.key == inner.key,
                    "{:?} fully covers {:?} but is listed earlier",
                    outer.key,
                    inner.key
                );
            }
        }
    }

    #[test]
    fn british_isles_beat_north_atlantic() {
        // London-ish: inside both the British Isles and the North Atlantic
        // boxes; the more specific region must win.
        let region = region_for(51.5, -0.1).unwrap();
        assert_eq!(region.key, RegionKey::BritishIsles);
    }

    #[test]
    fn open_ocean_is_unresolved() {
        assert!(region_for(-40.0, 160.0).is_none());
    }

    #[test]
    fn every_index_row_has_a_fallback_or_known_gap() {
        // western_europe_coast deliberately has no fallback row; everything
        // else in the index must have one.
        for entry in WIND_INDEX.iter() {
            let has_fallback = REGIONAL_FALLBACK.iter().any(|f| f.region == entry.region);
            if entry.region != RegionKey::WesternEuropeCoast {
                assert!(has_fallback, "missing fallback for {:?}", entry.region);
            }
        }
    }

    #[test]
    fn index_names_resolve_or_are_broad_features() {
        // Index rows may reference broad features without catalog entries,
        // but the Mediterranean rows must all resolve.
        for entry in WIND_INDEX.iter() {
            if !matches!(
                entry.region,
                RegionKey::MediterraneanNorthwest
                    | RegionKey::MediterraneanSoutheast
                    | RegionKey::MediterraneanSouthwest
            ) {
                continue;
            }
            for names in entry.by_sector.iter() {
                for name in names.iter() {
                    assert!(
                        wind_system(name).is_some(),
                        "{name} missing from WIND_SYSTEMS"
                    );
                }
            }
        }
    }

    #[test]
    fn noreasters_has_one_entry_with_east_coast_bounds() {
        // Deliberately a single catalog entry: the source material listed
        // the same storm system twice under apostrophe variants, once for
        // the open North Atlantic ending at 50W and once for the American
        // east coast ending at 60W. The east-coast bounds win here, so
        // north-east sector lookups between 60W and 50W use the regional
        // fallback text instead.
        assert_eq!(
            WIND_SYSTEMS.iter().filter(|w| w.name == "Nor'easters").count(),
            1
        );
        let system = wind_system("Nor'easters").unwrap();
        assert_eq!(system.bounds, BoundingBox::new(35.0, 50.0, -85.0, -60.0));
        assert!(!system.bounds.contains(42.0, -55.0));
    }

    #[test]
    fn mistral_is_in_the_catalog() {
        let mistral = wind_system("Mistral").unwrap();
        assert!(mistral.bounds.contains(43.0, 5.0));
        assert!(!mistral.description.is_empty());
    }
}
