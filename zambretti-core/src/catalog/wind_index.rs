//! Per-region, per-sector lists of possible wind systems
//!
//! Rows follow the [`CompassSector`](crate::compass::CompassSector)
//! discriminant order: N, N-NE, NE, E-NE, E, E-SE, SE, S-SE, S, S-SW, SW,
//! W-SW, W, W-NW, NW, N-NW. Lists are ordered by relevance; empty lists
//! mean no named system blows from that sector and the regional fallback
//! text applies. Some North Atlantic rows name broad circulation features
//! ("Storm Track", "Mid-Latitude Cyclones") that have no catalog entry;
//! they exist to keep the row meaningful and always fall through to the
//! fallback.

use super::{RegionKey, WindIndexEntry};

/// The wind index, one row per region
pub static WIND_INDEX: [WindIndexEntry; 10] = [
    WindIndexEntry {
        region: RegionKey::MediterraneanNorthwest,
        by_sector: [
            &["Tramontane", "Mistral"],           // N
            &["Tramontane"],                      // N-NE
            &["Gregale"],                         // NE
            &["Gregale"],                         // E-NE
            &["Levante"],                         // E
            &["Levante", "Sirocco"],              // E-SE
            &["Levante", "Sirocco"],              // SE
            &["Ghibli", "Sirocco"],               // S-SE
            &["Ostro", "Khamsin", "Datoo"],       // S
            &["Ostro", "Ghibli"],                 // S-SW
            &["Libeccio"],                        // SW
            &["Libeccio", "Marin"],               // W-SW
            &["Ponente", "Zephyr"],               // W
            &["Maestro", "Zephyr"],               // W-NW
            &["Mistral"],                         // NW
            &["Tramontane"],                      // N-NW
        ],
    },
    WindIndexEntry {
        region: RegionKey::MediterraneanSouthwest,
        by_sector: [
            &["Mistral"],
            &["Tramontane"],
            &["Gregale"],
            &["Gregale"],
            &["Sirocco", "Levantadis"],
            &["Sirocco", "Levantadis"],
            &["Sirocco", "Levantadis"],
            &["Ghibli", "Sirocco"],
            &["Ostro", "Ghibli", "Jugo"],
            &["Ostro", "Khamsin"],
            &["Libeccio"],
            &["Libeccio", "Marin"],
            &["Ponente"],
            &[], // no named W-NW system in this basin
            &["Mistral"],
            &["Tramontane"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::MediterraneanNortheast,
        by_sector: [
            &["Bora", "Meltemi"],
            &["Bora", "Meltemi"],
            &["Bora", "Meltemi"],
            &["Gregale", "Meltemi", "Bora"],
            &["Levante", "Gregale", "Meltemi", "Levantadis"],
            &["Levante", "Gregale", "Sirocco"],
            &["Levante", "Gregale", "Sirocco", "Levantadis"],
            &["Ghibli", "Jugo", "Sirocco"],
            &["Ostro", "Khamsin", "Jugo"],
            &["Ostro", "Ghibli", "Jugo"],
            &["Libeccio"],
            &["Libeccio"],
            &["Ponente"],
            &["Maestro"],
            &["Meltemi"],
            &["Bora", "Meltemi"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::MediterraneanSoutheast,
        by_sector: [
            &["Meltemi"],
            &["Meltemi"],
            &["Gregale"],
            &["Gregale"],
            &["Gregale", "Levantadis"],
            &["Sirocco", "Levantadis"],
            &["Sirocco", "Levantadis"],
            &["Ghibli", "Sirocco"],
            &["Ostro", "Ghibli", "Jugo"],
            &["Ostro", "Khamsin"],
            &["Libeccio"],
            &["Libeccio"],
            &["Ponente"],
            &["Maestro"],
            &["Meltemi"],
            &["Meltemi"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::Caribbean,
        by_sector: [
            &["El Norte", "Tehuantepecer"],
            &[],
            &["Trade Winds"],
            &[],
            &["Trade Winds", "Hurricane Alley"],
            &[],
            &["Trade Winds"],
            &["Brisas"],
            &["Brisas"],
            &["Brisas"],
            &[],
            &["Chubasco"],
            &["Chubasco"],
            &[],
            &["El Norte"],
            &["El Norte"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::NorthAtlantic,
        by_sector: [
            &["Icelandic Low", "Greenland High", "Arctic Outflow"],
            &["Nor'easters", "Icelandic Low", "Polar Jet Stream"],
            &["Nor'easters", "Westerlies", "Mid-Latitude Cyclones"],
            &["Azores High", "Trade Winds Influence", "Westerlies"],
            &["Azores High", "Subtropical Westerlies", "Bermuda High Influence"],
            &["Azores High", "Bermuda High", "Trade Winds"],
            &["Bermuda High", "Trade Winds", "Hurricane Alley"],
            &["Bermuda High", "Azores High", "Tropical Convergence Zone"],
            &["Bermuda High", "Tropical Air Mass", "Hurricane Alley"],
            &["Bermuda High", "Hurricane Influence", "Gulf Stream Influence"],
            &["Westerlies", "Gulf Stream Influence", "Storm Track"],
            &["Westerlies", "Bermuda High Influence", "Gulf Stream Influence"],
            &["Westerlies", "North Atlantic Drift", "Mid-Latitude Storms"],
            &["Westerlies", "Cold Fronts", "Icelandic Low Influence"],
            &["Icelandic Low", "Polar Jet Stream", "Greenland High"],
            &["Icelandic Low", "Greenland High", "Arctic Outflow"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::BritishIsles,
        by_sector: [
            &["Icelandic Low Influence", "North Sea Storms"],
            &["North Sea Storms", "Easterly Continental Winds"],
            &["Easterly Continental Winds", "North Sea Storms"],
            &["Easterly Continental Winds", "North Sea Storms"],
            &["Easterly Continental Winds", "Beaufort's Westerlies"],
            &["Beaufort's Westerlies", "Southeast Trades"],
            &["Southeast Trades", "Channel Winds"],
            &["Southeast Trades", "Azores High Influence"],
            &["Azores High Influence", "Channel Winds"],
            &["Channel Winds", "Beaufort's Westerlies"],
            &["Beaufort's Westerlies", "North Atlantic Drift"],
            &["North Atlantic Drift", "Westerlies"],
            &["Westerlies", "North Atlantic Drift"],
            &["Westerlies", "Icelandic Low Influence"],
            &["Icelandic Low Influence", "North Atlantic Drift"],
            &["Icelandic Low Influence", "North Sea Storms"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::WesternEuropeCoast,
        by_sector: [
            &["Portuguese Northerlies"],
            &["Portuguese Northerlies", "Galician Trade Winds"],
            &["Galician Trade Winds", "Bay of Biscay Gales"],
            &["Levanter"],
            &["Levanter"],
            &["Levanter", "Iberian Low Pressure Winds"],
            &["Iberian Low Pressure Winds"],
            &["Iberian Low Pressure Winds"],
            &["Iberian Low Pressure Winds"],
            &["Iberian Low Pressure Winds"],
            &["Bay of Biscay Gales", "Cantabrian Gusts"],
            &["Brittany Westerlies", "Bay of Biscay Gales"],
            &["Brittany Westerlies", "Bay of Biscay Gales"],
            &["Bay of Biscay Gales", "Cantabrian Gusts"],
            &["Bay of Biscay Gales", "Portuguese Northerlies"],
            &["Portuguese Northerlies"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::NorthSeaBaltic,
        by_sector: [
            &["Scandinavian High", "Katabatic Winds"],
            &["Scandinavian High", "Baltic Easterlies"],
            &["Baltic Easterlies", "Gulf of Finland Wind"],
            &["Baltic Easterlies", "Gulf of Finland Wind", "Danish Straits Winds"],
            &["Baltic Easterlies", "Danish Straits Winds"],
            &["Baltic Easterlies", "Danish Straits Winds"],
            &["Danish Straits Winds", "Baltic Easterlies", "Skagerrak Gales"],
            &["Danish Straits Winds", "North Sea Westerlies", "Skagerrak Gales"],
            &["North Sea Westerlies", "Skagerrak Gales", "North Atlantic Lows"],
            &["North Sea Westerlies", "North Atlantic Lows"],
            &["North Sea Westerlies", "North Atlantic Lows"],
            &["North Sea Westerlies", "Skagerrak Gales"],
            &["North Sea Westerlies", "Skagerrak Gales", "North Atlantic Lows"],
            &["North Atlantic Lows", "North Sea Westerlies"],
            &["North Atlantic Lows", "Scandinavian High"],
            &["Scandinavian High", "Katabatic Winds"],
        ],
    },
    WindIndexEntry {
        region: RegionKey::AmericanEastCoast,
        by_sector: [
            &["Nor'easters", "Polar Jet Stream", "Great Lakes Outflow"],
            &["Nor'easters", "Great Lakes Outflow"],
            &["Nor'easters", "Cape Hatteras Cyclones"],
            &["Bermuda High", "Trade Winds"],
            &["Bermuda High", "Trade Winds", "Gulf Stream Winds"],
            &["Bermuda High", "Trade Winds", "Gulf Stream Winds"],
            &["Bermuda High", "Trade Winds", "Hurricane Alley"],
            &["Bermuda High", "Hurricane Alley", "Coastal Sea Breezes"],
            &["Bermuda High", "Hurricane Alley", "Coastal Sea Breezes"],
            &["Gulf Stream Winds", "Hurricane Alley", "Coastal Sea Breezes"],
            &["Gulf Stream Winds", "Coastal Sea Breezes"],
            &["Coastal Sea Breezes", "Appalachian Downslope Winds"],
            &["Appalachian Downslope Winds", "Polar Jet Stream"],
            &["Appalachian Downslope Winds", "Great Lakes Outflow"],
            &["Great Lakes Outflow", "Polar Jet Stream"],
            &["Great Lakes Outflow", "Polar Jet Stream"],
        ],
    },
];
