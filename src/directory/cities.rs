//! City lookup table
//!
//! Each entry carries the ISO code of its owning country. The list is
//! intentionally not sorted; callers sort when filtering.

pub struct City {
    pub name: &'static str,
    pub country: &'static str,
}

pub const CITIES: &[City] = &[
    City { name: "Sydney", country: "AU" },
    City { name: "Melbourne", country: "AU" },
    City { name: "Brisbane", country: "AU" },
    City { name: "Vienna", country: "AT" },
    City { name: "Graz", country: "AT" },
    City { name: "Brussels", country: "BE" },
    City { name: "Antwerp", country: "BE" },
    City { name: "Ghent", country: "BE" },
    City { name: "Sao Paulo", country: "BR" },
    City { name: "Rio de Janeiro", country: "BR" },
    City { name: "Brasilia", country: "BR" },
    City { name: "Toronto", country: "CA" },
    City { name: "Vancouver", country: "CA" },
    City { name: "Montreal", country: "CA" },
    City { name: "Beijing", country: "CN" },
    City { name: "Shanghai", country: "CN" },
    City { name: "Shenzhen", country: "CN" },
    City { name: "Copenhagen", country: "DK" },
    City { name: "Aarhus", country: "DK" },
    City { name: "Helsinki", country: "FI" },
    City { name: "Tampere", country: "FI" },
    City { name: "Paris", country: "FR" },
    City { name: "Marseille", country: "FR" },
    City { name: "Lyon", country: "FR" },
    City { name: "Toulouse", country: "FR" },
    City { name: "Nice", country: "FR" },
    City { name: "Bordeaux", country: "FR" },
    City { name: "Berlin", country: "DE" },
    City { name: "Munich", country: "DE" },
    City { name: "Hamburg", country: "DE" },
    City { name: "Frankfurt", country: "DE" },
    City { name: "Cologne", country: "DE" },
    City { name: "Athens", country: "GR" },
    City { name: "Thessaloniki", country: "GR" },
    City { name: "Mumbai", country: "IN" },
    City { name: "Delhi", country: "IN" },
    City { name: "Bangalore", country: "IN" },
    City { name: "Dublin", country: "IE" },
    City { name: "Cork", country: "IE" },
    City { name: "Rome", country: "IT" },
    City { name: "Milan", country: "IT" },
    City { name: "Naples", country: "IT" },
    City { name: "Turin", country: "IT" },
    City { name: "Tokyo", country: "JP" },
    City { name: "Osaka", country: "JP" },
    City { name: "Kyoto", country: "JP" },
    City { name: "Amsterdam", country: "NL" },
    City { name: "Rotterdam", country: "NL" },
    City { name: "The Hague", country: "NL" },
    City { name: "Oslo", country: "NO" },
    City { name: "Bergen", country: "NO" },
    City { name: "Warsaw", country: "PL" },
    City { name: "Krakow", country: "PL" },
    City { name: "Wroclaw", country: "PL" },
    City { name: "Lisbon", country: "PT" },
    City { name: "Porto", country: "PT" },
    City { name: "Madrid", country: "ES" },
    City { name: "Barcelona", country: "ES" },
    City { name: "Valencia", country: "ES" },
    City { name: "Seville", country: "ES" },
    City { name: "Stockholm", country: "SE" },
    City { name: "Gothenburg", country: "SE" },
    City { name: "Malmo", country: "SE" },
    City { name: "Zurich", country: "CH" },
    City { name: "Geneva", country: "CH" },
    City { name: "Bern", country: "CH" },
    City { name: "Istanbul", country: "TR" },
    City { name: "Ankara", country: "TR" },
    City { name: "Izmir", country: "TR" },
    City { name: "London", country: "GB" },
    City { name: "Manchester", country: "GB" },
    City { name: "Birmingham", country: "GB" },
    City { name: "Edinburgh", country: "GB" },
    City { name: "New York", country: "US" },
    City { name: "Los Angeles", country: "US" },
    City { name: "Chicago", country: "US" },
    City { name: "San Francisco", country: "US" },
    City { name: "Boston", country: "US" },
    City { name: "Seattle", country: "US" },
];
