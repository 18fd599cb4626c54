//! Country lookup table

/// A country entry: display name, ISO 3166-1 alpha-2 code, and
/// international dial code. The code ties cities to their country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub dial_code: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { name: "Australia", code: "AU", dial_code: "61" },
    Country { name: "Austria", code: "AT", dial_code: "43" },
    Country { name: "Belgium", code: "BE", dial_code: "32" },
    Country { name: "Brazil", code: "BR", dial_code: "55" },
    Country { name: "Canada", code: "CA", dial_code: "1" },
    Country { name: "China", code: "CN", dial_code: "86" },
    Country { name: "Denmark", code: "DK", dial_code: "45" },
    Country { name: "Finland", code: "FI", dial_code: "358" },
    Country { name: "France", code: "FR", dial_code: "33" },
    Country { name: "Germany", code: "DE", dial_code: "49" },
    Country { name: "Greece", code: "GR", dial_code: "30" },
    Country { name: "India", code: "IN", dial_code: "91" },
    Country { name: "Ireland", code: "IE", dial_code: "353" },
    Country { name: "Italy", code: "IT", dial_code: "39" },
    Country { name: "Japan", code: "JP", dial_code: "81" },
    Country { name: "Netherlands", code: "NL", dial_code: "31" },
    Country { name: "Norway", code: "NO", dial_code: "47" },
    Country { name: "Poland", code: "PL", dial_code: "48" },
    Country { name: "Portugal", code: "PT", dial_code: "351" },
    Country { name: "San Marino", code: "SM", dial_code: "378" },
    Country { name: "Spain", code: "ES", dial_code: "34" },
    Country { name: "Sweden", code: "SE", dial_code: "46" },
    Country { name: "Switzerland", code: "CH", dial_code: "41" },
    Country { name: "Turkey", code: "TR", dial_code: "90" },
    Country { name: "United Kingdom", code: "GB", dial_code: "44" },
    Country { name: "United States", code: "US", dial_code: "1" },
];
