//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Default base URL of the countries data source
pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the data source (it accepts at most ten)
pub const COUNTRY_FIELDS: &str =
    "name,flags,population,region,subregion,capital,borders,tld,currencies,languages";

/// Timeout applied to every HTTP request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Regions offered by the region selector, in cycling order
pub const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Shown wherever a field is missing
pub const PLACEHOLDER: &str = "N/A";

/// Directory under the home directory holding settings and logs
pub const CONFIG_DIR_NAME: &str = ".atlas";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Log file name inside the config directory
pub const LOG_FILE: &str = "atlas.log";

/// Application name
pub const APP_NAME: &str = "Where in the world?";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
