//! Static reference data for selection inputs
//!
//! Countries, cities, and industries are compiled into the binary as
//! read-only lookup tables. The UI never mutates them; everything here
//! is a pure function over the tables.

mod cities;
mod countries;
mod industries;

pub use cities::CITIES;
pub use countries::{Country, COUNTRIES};
pub use industries::INDUSTRIES;

/// Look up a country by its display name.
pub fn find_country(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name == name)
}

/// All country display names, in table order.
pub fn country_names() -> Vec<&'static str> {
    COUNTRIES.iter().map(|c| c.name).collect()
}

/// City names for the given country, sorted ascending by name.
///
/// Returns an empty list for an unknown country or a country with no
/// cities in the table.
pub fn city_options(country_name: &str) -> Vec<&'static str> {
    let Some(country) = find_country(country_name) else {
        return Vec::new();
    };

    let mut names: Vec<&'static str> = CITIES
        .iter()
        .filter(|c| c.country == country.code)
        .map(|c| c.name)
        .collect();
    names.sort_unstable();
    names
}

/// All industry labels, in table order.
pub fn industry_options() -> Vec<&'static str> {
    INDUSTRIES.to_vec()
}

/// International dial code for the given country, used to seed the
/// phone field prefix.
pub fn dial_code(country_name: &str) -> Option<&'static str> {
    find_country(country_name).map(|c| c.dial_code)
}
