//! Named wind systems and their geographic extents
//!
//! Bounds are deliberately generous: the catalog answers "could this system
//! plausibly reach the current position", not "is it blowing right now" -
//! the wind index and the live direction do the narrowing.
//!
//! A few entries (Imbat, Mbatis, Papagayo Winds, Föhn Effect) are not
//! referenced by any index row today; they are kept as reference data for
//! future index rows.

use super::{BoundingBox, WindSystem};

macro_rules! system {
    ($name:literal, ($a:expr, $b:expr, $c:expr, $d:expr), $desc:literal, $url:literal) => {
        WindSystem {
            name: $name,
            bounds: BoundingBox::new($a, $b, $c, $d),
            description: $desc,
            url: $url,
        }
    };
}

/// Wind-system catalog, looked up by name from the wind index
pub static WIND_SYSTEMS: [WindSystem; 65] = [
    // Mediterranean
    system!("Tramontane", (40.0, 48.0, -10.0, 6.0), "Dry, strong N wind over Southern France and Spain.", "https://en.wikipedia.org/wiki/Tramontane"),
    system!("Mistral", (38.0, 44.0, -6.0, 10.0), "Cold, dry NW wind, clearing skies in the Western Med.", "https://en.wikipedia.org/wiki/Mistral_(wind)"),
    system!("Libeccio", (30.0, 45.0, -18.0, 10.0), "SW wind, stormy in autumn and winter, high waves.", "https://en.wikipedia.org/wiki/Libeccio"),
    system!("Sirocco", (30.0, 45.0, -10.0, 25.0), "Hot, dusty SE wind, humid near coasts.", "https://en.wikipedia.org/wiki/Sirocco"),
    system!("Bora", (38.0, 48.0, 12.0, 20.0), "Cold NE wind in the Adriatic, sudden strong gusts.", "https://en.wikipedia.org/wiki/Bora_(wind)"),
    system!("Meltemi", (34.0, 48.0, 20.0, 30.0), "Strong summer winds, rough seas, strongest in afternoons.", "https://en.wikipedia.org/wiki/Etesian"),
    system!("Khamsin", (25.0, 38.0, 20.0, 35.0), "Hot, dusty wind from the Sahara, lasts for days.", "https://en.wikipedia.org/wiki/Khamsin"),
    system!("Gregale", (30.0, 42.0, 12.0, 25.0), "Strong NE wind from the Balkans, causes rough seas.", "https://en.wikipedia.org/wiki/Gregale"),
    system!("Ponente", (36.0, 44.0, -6.0, 15.0), "Mild W wind, freshens air and clears skies.", "https://en.wikipedia.org/wiki/West_wind"),
    system!("Jugo", (38.0, 45.0, 12.0, 20.0), "Warm, humid SE wind, bringing storms and rough seas.", "https://en.wikipedia.org/wiki/Sirocco"),
    system!("Ghibli", (25.0, 40.0, 10.0, 20.0), "Intense, hot desert wind, causes sandstorms.", "https://en.wikipedia.org/wiki/Sirocco"),
    system!("Ostro", (30.0, 45.0, 5.0, 20.0), "Warm, humid S wind from Africa, linked to Sirocco.", "https://en.wikipedia.org/wiki/Ostro"),
    system!("Levantadis", (35.0, 42.0, 18.0, 28.0), "Local Levante wind in Ionian and Aegean Seas.", "https://en.wikipedia.org/wiki/Llevantades"),
    system!("Imbat", (36.0, 42.0, 26.0, 30.0), "Cool sea breeze along the Aegean coast.", ""),
    system!("Maestro", (38.0, 45.0, 12.0, 24.0), "Gentle NW breeze, pleasant summer weather.", "https://en.wikipedia.org/wiki/Mistral_(wind)"),
    system!("Zephyr", (35.0, 45.0, -10.0, 20.0), "Gentle summer westerly, brings pleasant weather.", ""),
    system!("Marin", (36.0, 44.0, -6.0, 4.0), "Moist SE wind, heavy rain and storms in Gulf of Lion.", "https://en.wikipedia.org/wiki/Marin_(wind)"),
    system!("Mbatis", (35.0, 42.0, 20.0, 30.0), "Light, refreshing sea breeze common in Greece.", ""),
    system!("Datoo", (30.0, 40.0, -5.0, 15.0), "Hot, dry wind from North Africa, like the Khamsin.", "https://en.wikipedia.org/wiki/Khamsin"),
    system!("Levante", (34.0, 40.0, -10.0, 10.0), "Warm, moist E wind, often brings fog and rain.", "https://en.wikipedia.org/wiki/Levant_(wind)"),
    // Caribbean
    system!("Trade Winds", (20.0, 30.0, -85.0, -60.0), "Steady easterly winds steering storms and tropical systems.", ""),
    system!("Brisas", (10.0, 25.0, -90.0, -55.0), "Coastal sea breezes, onshore by day, offshore at night.", ""),
    system!("El Norte", (15.0, 30.0, -95.0, -70.0), "Strong winter N-NW winds after cold fronts.", ""),
    system!("Chubasco", (5.0, 20.0, -90.0, -55.0), "Sudden tropical squalls with gusty winds.", ""),
    system!("Papagayo Winds", (8.0, 15.0, -92.0, -83.0), "Strong gap winds blasting from Central America.", ""),
    system!("Tehuantepecer", (10.0, 20.0, -98.0, -90.0), "Violent N winds from Mexico, big waves.", ""),
    system!("Hurricane Alley", (20.0, 40.0, -85.0, -60.0), "A major track for hurricanes forming in the Atlantic.", ""),
    // North Atlantic
    system!("Westerlies", (48.0, 61.0, -15.0, 5.0), "Changeable winds across the UK and Ireland.", ""),
    system!("Nor'easters", (35.0, 50.0, -85.0, -60.0), "Intense coastal storms with strong winds and heavy rain or snow.", ""),
    system!("Bermuda High", (20.0, 40.0, -80.0, -50.0), "Subtropical high-pressure system steering storms and summer heat.", ""),
    system!("Azores High", (30.0, 45.0, -40.0, 10.0), "Affects Europe and North Atlantic weather.", ""),
    system!("Icelandic Low", (50.0, 65.0, -50.0, -10.0), "Strong low-pressure system, frequent storms.", ""),
    system!("Greenland High", (60.0, 75.0, -50.0, -10.0), "Arctic high pressure, very cold air masses.", ""),
    system!("Gulf Stream Influence", (25.0, 40.0, -80.0, -50.0), "Warm ocean current, affects storms.", ""),
    system!("Polar Jet Stream", (35.0, 50.0, -90.0, -60.0), "Fast-moving air current steering storms and cold outbreaks.", ""),
    system!("Arctic Outflow", (60.0, 75.0, -80.0, -10.0), "Cold air from the Arctic, strong winds.", ""),
    // British Isles
    system!("Icelandic Low Influence", (50.0, 65.0, -50.0, -10.0), "Drives storms and strong winds in the North Atlantic.", ""),
    system!("Azores High Influence", (30.0, 45.0, -40.0, 10.0), "Brings settled weather but can also cause heatwaves.", ""),
    system!("North Atlantic Drift", (45.0, 60.0, -20.0, 5.0), "Warm ocean current moderating UK climate.", ""),
    system!("Föhn Effect", (50.0, 58.0, -10.0, 2.0), "Warm, dry wind descending in Scotland and NW England.", ""),
    system!("North Sea Storms", (50.0, 62.0, -5.0, 10.0), "Sudden squalls, common in autumn and winter.", ""),
    system!("Easterly Continental Winds", (50.0, 60.0, 0.0, 10.0), "Cold, dry air from Europe, brings winter snow.", ""),
    system!("Beaufort's Westerlies", (48.0, 60.0, -15.0, 5.0), "Moderate to strong westerlies over the UK.", ""),
    system!("Channel Winds", (49.0, 52.0, -5.0, 2.0), "Strong funneling winds in the English Channel.", ""),
    system!("Southeast Trades", (50.0, 55.0, -5.0, 5.0), "Warm, humid winds from France, bring mild weather.", ""),
    // Western Europe coast
    system!("Portuguese Northerlies", (35.0, 44.0, -10.0, -5.0), "Strong summer winds from the north, cooling Portuguese coastal waters.", ""),
    system!("Bay of Biscay Gales", (43.0, 50.0, -10.0, 0.0), "Intense storms and strong winds, common in autumn and winter.", ""),
    system!("Galician Trade Winds", (41.0, 45.0, -10.0, -6.0), "Persistent NW winds along Galicia, strengthening in summer.", ""),
    system!("Brittany Westerlies", (47.0, 50.0, -8.0, 2.0), "Strong westerlies hitting the Breton coast, especially in winter.", ""),
    system!("Iberian Low Pressure Winds", (35.0, 45.0, -10.0, 0.0), "Unstable, humid winds driven by low pressure over Spain and Portugal.", ""),
    system!("Levanter", (35.0, 37.0, -7.0, -5.0), "Easterly wind in the Strait of Gibraltar, bringing fog and humidity.", ""),
    system!("Cantabrian Gusts", (42.0, 45.0, -10.0, -2.0), "Strong local winds on Spain's N coast, driven by Atlantic storms.", ""),
    // North Sea and Baltic
    system!("North Sea Westerlies", (50.0, 65.0, -5.0, 10.0), "Frequent westerly storms and strong gales over the North Sea.", ""),
    system!("Baltic Easterlies", (53.0, 65.0, 10.0, 30.0), "Cold and dry in winter, humid and unstable in summer.", ""),
    system!("Katabatic Winds", (55.0, 65.0, 5.0, 30.0), "Cold descending winds along Scandinavian coasts.", ""),
    system!("Gulf of Finland Wind", (58.0, 61.0, 20.0, 30.0), "Variable winds funneled through narrow Baltic straits.", ""),
    system!("Scandinavian High", (55.0, 65.0, 10.0, 30.0), "Cold, dry high-pressure winds from Scandinavia.", ""),
    system!("Skagerrak Gales", (55.0, 60.0, 5.0, 15.0), "Strong westerly gales in the Skagerrak Strait.", ""),
    system!("North Atlantic Lows", (50.0, 65.0, -10.0, 5.0), "Stormy conditions from low-pressure systems.", ""),
    system!("Danish Straits Winds", (53.0, 57.0, 10.0, 15.0), "Rapidly shifting winds through Danish straits.", ""),
    // American east coast (Nor'easters, Bermuda High, Hurricane Alley,
    // Trade Winds and Polar Jet Stream are shared with the lists above)
    system!("Gulf Stream Winds", (25.0, 45.0, -80.0, -60.0), "Warm ocean currents fueling storms and moderating temperatures.", ""),
    system!("Appalachian Downslope Winds", (30.0, 45.0, -85.0, -70.0), "Gusty, dry winds descending from the Appalachians.", ""),
    system!("Coastal Sea Breezes", (25.0, 40.0, -85.0, -65.0), "Daily shifts between land and sea breezes along the coast.", ""),
    system!("Cape Hatteras Cyclones", (30.0, 40.0, -85.0, -65.0), "Low-pressure systems intensifying off the Carolina coast.", ""),
    system!("Great Lakes Outflow", (40.0, 50.0, -85.0, -70.0), "Cold air from the Great Lakes fueling snow and strong winds.", ""),
];
