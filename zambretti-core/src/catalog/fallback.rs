//! Per-region, per-sector fallback descriptions
//!
//! Used when a sector's possible-system list is empty or none of the listed
//! systems covers the current location. Rows follow the
//! [`CompassSector`](crate::compass::CompassSector) discriminant order.
//! The Western Europe coast has no row; its resolutions that fall through
//! use the generic default instead.

use super::{RegionKey, RegionalFallbackEntry};

/// Fallback descriptions, one row per region that has them
pub static REGIONAL_FALLBACK: [RegionalFallbackEntry; 9] = [
    RegionalFallbackEntry {
        region: RegionKey::MediterraneanNorthwest,
        by_sector: [
            "Northern winds: Cold air from Europe, often strong, affecting France and Northern Spain.",
            "North-Northeast winds: Gusty and cold, weaker than in the eastern Mediterranean.",
            "Northeasterly winds: Can be strong, impacting the Western Italian coast.",
            "East-Northeast winds: Mild but occasionally gusty, affecting the Ligurian coast.",
            "Easterly winds: Brings moisture, less frequent in this region.",
            "East-Southeast winds: Moderate, can bring instability to Northern Italy.",
            "Southeasterly winds: Brings moisture, occasional storms near the Ligurian Sea.",
            "South-Southeast winds: Increasing humidity, often mild but unstable.",
            "Southern winds: Warmer, sometimes carrying Saharan dust into the region.",
            "South-Southwest winds: Warm and humid, occasionally stormy, affecting Western Italy.",
            "Southwest winds: Can bring storms and high humidity.",
            "West-Southwest winds: Warm, humid, often stormy, especially near the Gulf of Lion.",
            "West winds: Can bring moisture, sometimes leading to storms and rough seas.",
            "West-Northwest winds: Moderate, dry winds, influencing the Gulf of Lion.",
            "Northwest winds: Mistral-dominated, bringing cold, dry air and clear skies.",
            "North-Northwest winds: Strong and dry, influenced by Tramontane and Mistral.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::MediterraneanSouthwest,
        by_sector: [
            "Northern winds: Often mild but can bring cooler air into Algeria and Tunisia.",
            "North-Northeast winds: Occasionally strong, bringing cooler air inland.",
            "Northeasterly winds: Moderate winds affecting North Africa and Malta.",
            "East-Northeast winds: Sometimes gusty, can impact coastal Algeria and Tunisia.",
            "Easterly winds: Brings moisture, fog, and occasional rain to the region.",
            "East-Southeast winds: Can be strong, affecting the western Mediterranean coastline.",
            "Southeasterly winds: Humid and stormy, often linked to Sirocco.",
            "South-Southeast winds: Mild but can cause high humidity and unstable weather.",
            "Southern winds: Brings Saharan dust and extreme heat, affecting Malta and North Africa.",
            "South-Southwest winds: Warm and humid, can lead to heavy rain near Tunisia.",
            "Southwest winds: Can cause storms, particularly in autumn and winter.",
            "West-Southwest winds: Humid and warm, bringing instability to the region.",
            "West winds: Warm, can cause occasional rain and storms in North Africa.",
            "West-Northwest winds: Often moderate, can bring dry air and rough seas.",
            "Northwest winds: Dry, sometimes dusty, affecting the Balearic Islands.",
            "North-Northwest winds: Strong and dry, influenced by the Mistral and Tramontane.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::MediterraneanNortheast,
        by_sector: [
            "Northern winds: Cold, strong gusts, impacting Greece and the Balkans.",
            "North-Northeast winds: Strong and gusty, associated with Bora and Meltemi.",
            "Northeasterly winds: Associated with Gregale and Bora, bringing dry, cold air to the Adriatic.",
            "East-Northeast winds: Can be strong and gusty, bringing cold air, affecting the Aegean.",
            "Easterly winds: Moist and stormy, linked to Levante, Gregale, and Levantadis.",
            "East-Southeast winds: Can be strong and stormy, affecting Greece and Turkey.",
            "Southeasterly winds: Humid and unstable, common in the Ionian and Aegean Seas.",
            "South-Southeast winds: Can be mild, but heavy rain possible in the Levant and Aegean.",
            "Southern winds: Brings Saharan dust and extreme heat to Greece and Turkey.",
            "South-Southwest winds: Warm, humid, and sometimes stormy, especially near Greece.",
            "Southwest winds: Stormy conditions, bringing high humidity to coastal areas.",
            "West-Southwest winds: Warm, humid, and sometimes stormy.",
            "West winds: Often moist, bringing rain to the Adriatic and Aegean coasts.",
            "West-Northwest winds: Can bring dry air and occasional storms.",
            "Northwest winds: Cool air, often linked to Bora and Meltemi, impacting Greece and Turkey.",
            "North-Northwest winds: Strong and dry, affecting the Adriatic and Aegean Seas.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::MediterraneanSoutheast,
        by_sector: [
            "Northern winds: Often mild, but can bring cool air from Turkey.",
            "North-Northeast winds: Strong and gusty, occasionally bringing cooler air inland.",
            "Northeasterly winds: Occasionally strong, affecting Cyprus and the eastern Aegean.",
            "East-Northeast winds: Can bring cooler air, sometimes strong in coastal Turkey.",
            "Easterly winds: Moist and stormy, linked to Levante, Gregale, and Levantadis.",
            "East-Southeast winds: Can be strong and stormy, affecting Israel and Cyprus.",
            "Southeasterly winds: Unstable and stormy, common in the eastern Mediterranean.",
            "South-Southeast winds: Warm, humid, and can bring heavy rain to the Middle East.",
            "Southern winds: Brings Saharan dust and heat, affecting Cyprus and the Levant.",
            "South-Southwest winds: Warm, humid, and sometimes stormy, impacting Egypt and Crete.",
            "Southwest winds: Can bring dust storms and unstable weather to the Levant.",
            "West-Southwest winds: Warm and humid, occasionally stormy, affecting Israel and Lebanon.",
            "West winds: Moist and stormy, can bring significant rainfall to the Middle East.",
            "West-Northwest winds: Typically moderate, sometimes stormy near the Levant.",
            "Northwest winds: Dry air, occasionally stormy, impacting Cyprus and Crete.",
            "North-Northwest winds: Can be strong, affecting the Levant and Egypt.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::Caribbean,
        by_sector: [
            "Northern winds: Can bring cooler air from North America, often strong in winter.",
            "North-Northeast winds: Typically steady but can bring occasional storms.",
            "Northeasterly winds: Most common Caribbean wind, providing steady weather.",
            "East-Northeast winds: Often moderate, can be strong in hurricane season.",
            "Easterly winds: Trade Winds dominate, bringing steady conditions.",
            "East-Southeast winds: Often moderate, sometimes bringing showers.",
            "Southeasterly winds: Often warm, humid, sometimes stormy.",
            "South-Southeast winds: Can bring moisture and occasional rain.",
            "Southern winds: Warm and humid, linked to tropical weather.",
            "South-Southwest winds: Can bring warm tropical air, occasionally stormy.",
            "Southwest winds: Stormy and wet, often linked to tropical systems.",
            "West-Southwest winds: Warm, humid air, increased rain potential.",
            "West winds: Can be mild but also stormy, bringing rough seas.",
            "West-Northwest winds: Usually mild, sometimes stormy.",
            "Northwest winds: May be associated with winter storms.",
            "North-Northwest winds: Typically strong during cold fronts.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::NorthAtlantic,
        by_sector: [
            "Northern winds: Often cold, stormy, and associated with low pressure. Strong winds from Arctic air masses.",
            "North-Northeast winds: Cold, dry winds often bringing clear skies but low temperatures.",
            "Northeast winds: Can bring strong storms, heavy precipitation, and Nor'easters along the US East Coast.",
            "East-Northeast winds: Moist winds, often associated with developing storm systems.",
            "Easterly winds: Generally milder, bringing warm oceanic air, but can be humid and unstable.",
            "East-Southeast winds: Warm and humid, can lead to storm formation, particularly in hurricane season.",
            "Southeast winds: Often wet and stormy, bringing moisture-laden air from the tropics.",
            "South-Southeast winds: Increasing warmth and humidity, precursor to stormy conditions.",
            "Southerly winds: Warm, humid air masses bringing mild but sometimes unstable weather.",
            "South-Southwest winds: Can be stormy in low-pressure systems but often bring milder weather in mid-latitudes.",
            "Southwest winds: Typically bring mild, wet weather from the Atlantic, influencing Europe's western coasts.",
            "West-Southwest winds: Mild, damp, and commonly linked with the Westerlies dominating the region.",
            "Westerly winds: The dominant mid-latitude system, bringing frequent changes in weather patterns.",
            "West-Northwest winds: Often cool and dry, following passing storm systems.",
            "Northwest winds: Cold and dry, often bringing clear but colder weather conditions.",
            "North-Northwest winds: Affected by polar air masses, bringing freezing temperatures and strong gusts.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::BritishIsles,
        by_sector: [
            "Strong northern winds bring cold air from the Arctic. Often associated with winter storms, snow, and high winds in Scotland and Northern England.",
            "Chilly northeast winds originate from Scandinavia or Siberia, bringing bitterly cold air in winter, and often leading to snowfall, especially on the east coast.",
            "Northeasterly winds can bring prolonged damp and cloudy weather, particularly affecting the east of England. In winter, they contribute to freezing conditions and snow showers.",
            "Easterly winds from Europe often bring dry, cold weather in winter and warm, settled conditions in summer. Can cause severe winter snowfall in the east.",
            "Easterly winds carry air from continental Europe. Cold and dry in winter, but can bring heatwaves in summer, leading to uncomfortably warm conditions in the UK.",
            "Southeasterly winds are rare but bring warm, humid air from mainland Europe. In summer, they can lead to heatwaves, while in winter, they may bring freezing rain.",
            "Warm and moist southeasterly winds bring mild, wet conditions, particularly in autumn and winter, often leading to prolonged rain in the southeast of England.",
            "South-southeast winds originate from the Azores High and can bring extended warm spells in summer, as well as damp and overcast weather in winter.",
            "Southerly winds bring warm air from southern Europe or North Africa. Often lead to mild winters and hot, humid summers. Can increase thunderstorm activity.",
            "South-southwesterly winds are common in the UK and usually bring moist, mild air, resulting in prolonged rain, especially in western regions.",
            "Southwesterly winds are dominant in the UK, bringing wet and windy conditions, particularly in autumn and winter. They originate from the North Atlantic and contribute to the UK's changeable weather.",
            "Westerly winds bring moisture-laden air from the Atlantic, resulting in frequent rain showers. Strong storms can develop in winter, with powerful gusts along the west coast.",
            "Westerly winds are the prevailing winds in the British Isles, bringing mild, damp weather. The west of the UK experiences heavy rainfall due to these winds, while the east remains drier.",
            "West-northwesterly winds bring cool, fresh air from the Atlantic, often following storms. These winds can bring bright but showery conditions.",
            "Northwesterly winds bring cold Arctic air, especially in winter, leading to sharp temperature drops, hail showers, and occasional snowfall.",
            "Bitingly cold north-northwesterly winds sweep down from the Arctic, bringing wintry conditions, strong gales, and heavy snow showers to Scotland and Northern England.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::NorthSeaBaltic,
        by_sector: [
            "Northern winds: Cold Arctic air from Scandinavia brings freezing temperatures in winter and dry, stable air in summer. Can lead to strong gusts and katabatic winds over coastal areas.",
            "North-Northeast winds: A mix of cold Arctic air and Baltic winds, bringing strong gales and freezing spray in winter. Can cause extreme wind chills.",
            "Northeast winds: Common in winter, bringing frigid air and snowstorms from Russia. Can cause dangerous ice buildup on ships and coastal flooding.",
            "East-Northeast winds: Channeled through the Gulf of Finland and Danish Straits, bringing strong winter chills and heavy snowfall inland.",
            "Easterly winds: Dominated by Baltic high pressure in winter, bringing prolonged cold, dry air. In summer, warm but often foggy and humid.",
            "East-Southeast winds: Strong Baltic influence, bringing prolonged rain and cold conditions in winter. Can funnel storms into the Danish Straits.",
            "Southeast winds: Baltic influences bring cold air in winter and warm, humid conditions in summer. Can cause dense fog and poor visibility.",
            "South-Southeast winds: A mix of warm and unstable air, often leading to fog over the North Sea. In winter, can bring freezing rain or sleet.",
            "Southerly winds: Typically warm and moist, but can become unstable. May carry warm air from Europe in summer and stormy conditions in winter.",
            "South-Southwest winds: Warm and unstable, bringing stormy weather in winter but milder air in summer. Can be gusty near the Skagerrak Strait.",
            "Southwest winds: Mild and humid, bringing prolonged rain and stormy conditions. Frequent in winter, with strong gales affecting coastal regions.",
            "West-Southwest winds: Warmer but stormy, with persistent rain and strong gales. Can create dangerous swells and high waves in the North Sea.",
            "Westerly winds: The dominant wind direction, especially in winter. Strong Atlantic-driven storms bring powerful gusts, heavy rain, and rough seas.",
            "West-Northwest winds: A common direction in the North Sea, often associated with passing low-pressure systems, bringing frequent rain and rough seas.",
            "Northwest winds: Often stormy, particularly in winter, as North Atlantic lows push strong winds into the North Sea. Can bring snow and sleet in colder months.",
            "North-Northwest winds: Typically strong and dry, bringing cold conditions in winter. Can create hazardous crosswinds for maritime navigation.",
        ],
    },
    RegionalFallbackEntry {
        region: RegionKey::AmericanEastCoast,
        by_sector: [
            "Northern winds: Cold Arctic air descends from Canada, bringing frigid temperatures in winter and dry, stable air in summer. Can fuel Nor'easters in the Northeast.",
            "North-Northeast winds: Chilly, damp, and storm-prone, particularly along the Mid-Atlantic and New England coasts. Drives storm surges inland.",
            "Northeast winds: Major Nor'easter driver, bringing cold, wet, and stormy weather to the Northeast. Common with powerful winter storms.",
            "East-Northeast winds: Nor'easter winds bring strong gales, heavy rain, and coastal flooding, especially in winter.",
            "Easterly winds: Tropical trade winds influence, often leading to high humidity, summer storms, and hurricane activity.",
            "East-Southeast winds: Brings moisture-laden air from the Atlantic, creating overcast conditions, fog, and tropical cyclone activity.",
            "Southeast winds: Often associated with tropical disturbances and low-pressure systems developing offshore. Warm, humid, and stormy conditions.",
            "South-Southeast winds: Feeds warm, moist air into storm systems, increasing rainfall and storm potential. Key wind direction in hurricane formation.",
            "Southerly winds: Tropical moisture influence, can bring high humidity, strong summer storms, and contribute to hurricane strengthening.",
            "South-Southwest winds: Warm and humid, increasing the chance of storms in summer and leading to foggy, unstable conditions along the coast.",
            "Southwest winds: Brings warm, humid air from the Gulf and Atlantic. Often associated with tropical storm development and severe thunderstorms.",
            "West-Southwest winds: A mix of warm, humid air and storm potential. Often carries moisture from the Gulf of Mexico, fueling coastal storms.",
            "Westerly winds: Often mild but variable, associated with the jet stream. Can bring fast-moving storms in winter and clear, dry conditions in summer.",
            "West-Northwest winds: Cold, dry air from the interior U.S. moves toward the coast, reinforcing high pressure and clearing storms.",
            "Northwest winds: Common in winter, bringing dry, cold Arctic air from the Great Lakes region. Often follows the passage of strong low-pressure systems.",
            "North-Northwest winds: Strong cold fronts bring gusty, dry conditions, particularly in winter. Can cause rapid temperature drops and wind chills.",
        ],
    },
];
