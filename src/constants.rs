/// Default number of head entries taken from the countries ranking.
pub const COUNTRIES_LIMIT: usize = 60;

/// Default number of head entries taken from the locations ranking.
pub const LOCATIONS_LIMIT: usize = 150;

/// Countries drawn with the smaller circle multiplier.
pub const BOOSTED_COUNTRIES: [&str; 2] = ["USA", "UK"];

/// Circle weight multipliers for the countries layer.
pub const BOOSTED_COUNTRY_MULTIPLIER: u64 = 5;
pub const DEFAULT_COUNTRY_MULTIPLIER: u64 = 10;

/// Years a user may select; records themselves are not bounded.
pub const MIN_FILTER_YEAR: i32 = 1800;
pub const MAX_FILTER_YEAR: i32 = 2020;

/// Geocoder defaults, overridable via config.toml.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "shootmap";
pub const DEFAULT_GEOCODE_DELAY_MS: u64 = 100;
pub const DEFAULT_GEOCODE_TIMEOUT_SECONDS: u64 = 3;
