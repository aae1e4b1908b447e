//! Region bounding boxes, most specific first
//!
//! Order is load-bearing: the resolver takes the first containing box, so
//! small regions precede the large ones that nest them. The British Isles
//! and the Western Europe coast both sit inside larger boxes further down;
//! the open North Atlantic is last as the catch-all.

use super::{BoundingBox, Region, RegionKey};

const EU_WINDS: &str = "https://en.wikipedia.org/wiki/List_of_local_winds#Europe";
const CARIB_WINDS: &str = "https://en.wikipedia.org/wiki/List_of_local_winds#Caribbean";
const NA_WINDS: &str = "https://en.wikipedia.org/wiki/List_of_local_winds#North_America";

/// Ordered region list; first containing box wins
pub static REGIONS: [Region; 10] = [
    // Small regions first so they are not shadowed by an enclosing one
    Region {
        key: RegionKey::BritishIsles,
        bounds: BoundingBox::new(49.0, 61.0, -12.0, 2.0),
        url: EU_WINDS,
    },
    Region {
        key: RegionKey::WesternEuropeCoast,
        bounds: BoundingBox::new(35.0, 50.0, -10.0, 5.0),
        url: EU_WINDS,
    },
    // Large regions
    Region {
        key: RegionKey::NorthSeaBaltic,
        bounds: BoundingBox::new(50.0, 65.0, -5.0, 30.0),
        url: EU_WINDS,
    },
    Region {
        key: RegionKey::MediterraneanNorthwest,
        bounds: BoundingBox::new(38.0, 48.0, -10.0, 15.0),
        url: EU_WINDS,
    },
    Region {
        key: RegionKey::MediterraneanSouthwest,
        bounds: BoundingBox::new(30.0, 38.0, -10.0, 15.0),
        url: EU_WINDS,
    },
    Region {
        key: RegionKey::MediterraneanNortheast,
        bounds: BoundingBox::new(38.0, 48.0, 15.0, 40.0),
        url: EU_WINDS,
    },
    Region {
        key: RegionKey::MediterraneanSoutheast,
        bounds: BoundingBox::new(30.0, 38.0, 15.0, 40.0),
        url: EU_WINDS,
    },
    Region {
        key: RegionKey::Caribbean,
        bounds: BoundingBox::new(5.0, 30.0, -100.0, -50.0),
        url: CARIB_WINDS,
    },
    Region {
        key: RegionKey::AmericanEastCoast,
        bounds: BoundingBox::new(25.0, 50.0, -85.0, -60.0),
        url: NA_WINDS,
    },
    // Catch-all, placed last
    Region {
        key: RegionKey::NorthAtlantic,
        bounds: BoundingBox::new(30.0, 60.0, -80.0, 0.0),
        url: "",
    },
];
