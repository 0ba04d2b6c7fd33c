//! Catalog - static reference data.
//!
//! Coffee origins with rarity, region, flavor notes and map coordinates, plus
//! the roast levels and brew methods an entry can carry. Everything here is
//! constant and loaded once per process.

mod brewing;
mod country;
mod table;

pub use brewing::{BrewMethod, RoastLevel};
pub use country::{Coordinates, CountryCode, CountryReference, Rarity, Region};
pub use table::{is_known, lookup, COUNTRIES, TOTAL_COUNTRIES};
