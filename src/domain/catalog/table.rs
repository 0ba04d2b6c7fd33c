//! The static origin table and lookups over it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::country::{Coordinates, CountryReference, Rarity, Region};

const fn origin(
    code: &'static str,
    name: &'static str,
    region: Region,
    flavor_profile: &'static str,
    rarity: Rarity,
    lat: f64,
    lon: f64,
) -> CountryReference {
    CountryReference {
        code,
        name,
        region,
        flavor_profile,
        rarity,
        coordinates: Coordinates { lat, lon },
    }
}

use Rarity::{Common, Legendary, Rare};
use Region::*;

/// Number of origins in the catalog.
pub const TOTAL_COUNTRIES: usize = 48;

/// Every coffee origin the app knows about, ordered by display name.
pub static COUNTRIES: [CountryReference; TOTAL_COUNTRIES] = [
    origin("AO", "Angola", Africa, "Mild, earthy, chocolate, smooth", Common, -11.203, 17.873),
    origin("AU", "Australia", Oceania, "Smooth, syrupy, stone fruit, caramel", Legendary, -25.274, 133.775),
    origin("BO", "Bolivia", SouthAmerica, "Sweet, floral, citrus, clean", Common, -16.290, -63.588),
    origin("BR", "Brazil", SouthAmerica, "Chocolate, nuts, low acidity, creamy", Common, -14.235, -51.925),
    origin("BI", "Burundi", Africa, "Cherry, lime, honey, complex", Rare, -3.373, 29.919),
    origin("CM", "Cameroon", Africa, "Cocoa, earthy, mild, balanced", Common, 7.370, 12.354),
    origin("CN", "China", Asia, "Tea-like, herbal, mild, sweet", Common, 25.046, 101.506),
    origin("CO", "Colombia", SouthAmerica, "Caramel, nutty, red fruit, balanced", Common, 4.571, -74.297),
    origin("CR", "Costa Rica", CentralAmerica, "Honey, citrus, clean, balanced", Rare, 9.749, -83.754),
    origin("CU", "Cuba", Caribbean, "Tobacco, earthy, light, smooth", Common, 21.521, -77.781),
    origin("DO", "Dominican Republic", Caribbean, "Mild, chocolate, low acidity, smooth", Common, 18.736, -70.163),
    origin("CD", "DR Congo", Africa, "Fruity, winey, complex, earthy", Common, -4.039, 21.759),
    origin("EC", "Ecuador", SouthAmerica, "Floral, cocoa, balanced, mild", Common, -1.831, -78.183),
    origin("SV", "El Salvador", CentralAmerica, "Honey, orange, chocolate, smooth", Rare, 13.794, -88.897),
    origin("ET", "Ethiopia", Africa, "Blueberry, jasmine, citrus, wine-like", Rare, 9.145, 40.489),
    origin("GH", "Ghana", Africa, "Cocoa, mild, earthy, balanced", Common, 7.946, -1.023),
    origin("GT", "Guatemala", CentralAmerica, "Chocolate, apple, caramel, spicy", Rare, 15.783, -90.231),
    origin("HT", "Haiti", Caribbean, "Sweet, mild acidity, chocolate, citrus", Legendary, 18.971, -72.286),
    origin("HN", "Honduras", CentralAmerica, "Caramel, tropical fruit, mild, sweet", Common, 15.200, -86.242),
    origin("IN", "India", Asia, "Spicy, earthy, low acidity, heavy body", Common, 20.594, 78.963),
    origin("ID", "Indonesia", Asia, "Earthy, herbal, dark chocolate, full body", Common, -0.790, 113.921),
    origin("CI", "Ivory Coast", Africa, "Mild, earthy, nutty, smooth", Common, 7.540, -5.547),
    origin("JM", "Jamaica Blue Mountain", Caribbean, "Mild, smooth, balanced sweetness, floral", Legendary, 18.109, -77.298),
    origin("KE", "Kenya", Africa, "Blackcurrant, tomato, bright acidity, juicy", Rare, -0.024, 37.906),
    origin("LA", "Laos", Asia, "Earthy, nutty, mild, smooth", Common, 19.856, 102.495),
    origin("LR", "Liberia", Africa, "Bold, earthy, strong, unique", Common, 6.428, -9.429),
    origin("MG", "Madagascar", Africa, "Fruity, floral, citrus, unique", Common, -18.767, 46.869),
    origin("MW", "Malawi", Africa, "Citrus, floral, clean, bright", Rare, -13.254, 34.302),
    origin("MX", "Mexico", CentralAmerica, "Chocolate, nuts, light body, sweet", Common, 23.634, -102.553),
    origin("MM", "Myanmar", Asia, "Fruity, floral, tea-like, light", Common, 21.914, 95.956),
    origin("NP", "Nepal", Asia, "Floral, mild, sweet, tea-like", Rare, 28.394, 84.124),
    origin("NI", "Nicaragua", CentralAmerica, "Citrus, vanilla, balanced, smooth", Common, 12.866, -85.207),
    origin("PA", "Panama Geisha", CentralAmerica, "Jasmine, bergamot, tropical fruit, tea-like", Legendary, 8.538, -80.783),
    origin("PG", "Papua New Guinea", Oceania, "Earthy, fruity, herbal, sweet", Rare, -6.315, 143.956),
    origin("PE", "Peru", SouthAmerica, "Mild, nutty, floral, chocolate", Common, -9.190, -75.015),
    origin("PH", "Philippines", Asia, "Fruity, floral, chocolate, smooth", Common, 12.879, 121.774),
    origin("RW", "Rwanda", Africa, "Orange, floral, tea-like, silky", Rare, -1.940, 29.874),
    origin("SL", "Sierra Leone", Africa, "Fruity, mild, sweet, smooth", Common, 8.461, -11.779),
    origin("TZ", "Tanzania", Africa, "Bright, berry, black tea, winey", Rare, -6.369, 34.889),
    origin("TH", "Thailand", Asia, "Herbal, earthy, mild, clean", Common, 15.870, 100.993),
    origin("TG", "Togo", Africa, "Mild, cocoa, earthy, smooth", Common, 8.620, 0.825),
    origin("UG", "Uganda", Africa, "Chocolatey, winey, full body, earthy", Common, 1.373, 32.290),
    origin("US", "United States (Hawaii)", NorthAmerica, "Mild, sweet, floral, buttery", Common, 19.896, -155.582),
    origin("VE", "Venezuela", SouthAmerica, "Winey, fruity, delicate, sweet", Common, 6.424, -66.590),
    origin("VN", "Vietnam", Asia, "Bold, earthy, chocolate, robust", Common, 14.058, 108.277),
    origin("YE", "Yemen", MiddleEast, "Wild, wine-like, dried fruit, complex spice", Legendary, 15.552, 48.517),
    origin("ZM", "Zambia", Africa, "Citrus, floral, bright, clean", Common, -13.134, 27.849),
    origin("ZW", "Zimbabwe", Africa, "Fruity, wine-like, peppery, complex", Rare, -19.015, 29.154),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static CountryReference>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.code, c)).collect());

/// Looks up an origin by its upper-case code.
pub fn lookup(code: &str) -> Option<&'static CountryReference> {
    BY_CODE.get(code).copied()
}

/// Returns true if the code names a catalog origin.
pub fn is_known(code: &str) -> bool {
    BY_CODE.contains_key(code)
}
