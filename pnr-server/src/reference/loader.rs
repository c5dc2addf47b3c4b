//! Loading reference tables from a data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ReferenceError;
use super::tables::{AirportRecord, ReferenceData};

/// File holding `carrier code -> airline name`.
pub const AIRLINES_FILE: &str = "airlines.json";

/// File holding `aircraft type code -> aircraft name`.
pub const AIRCRAFT_TYPES_FILE: &str = "aircraftTypes.json";

/// File holding `airport code -> { city, name, timezone }`.
pub const AIRPORT_DATABASE_FILE: &str = "airportDatabase.json";

/// Default refresh interval: 24 hours.
const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Where reference tables live and how often to reload them.
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    /// Directory containing the three JSON files.
    pub data_dir: PathBuf,
    /// How often the running service reloads the tables.
    pub refresh_interval: Duration,
}

impl ReferenceConfig {
    /// Create a config for the given directory with the default refresh interval (24 hours).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Set a custom refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

/// Load all three tables from `config.data_dir`.
///
/// A missing file yields an empty table. A file that exists but cannot be
/// read or decoded is an error.
pub fn load_reference_data(config: &ReferenceConfig) -> Result<ReferenceData, ReferenceError> {
    let dir = &config.data_dir;

    let airlines: HashMap<String, String> = load_table(&dir.join(AIRLINES_FILE))?;
    let aircraft_types: HashMap<String, String> = load_table(&dir.join(AIRCRAFT_TYPES_FILE))?;
    let airports: HashMap<String, AirportRecord> = load_table(&dir.join(AIRPORT_DATABASE_FILE))?;

    let data = ReferenceData::from_maps(airlines, aircraft_types, airports);

    let invalid = data.invalid_timezones();
    if !invalid.is_empty() {
        warn!(
            airports = ?invalid,
            "airports with unknown timezone names will be treated as UTC"
        );
    }

    Ok(data)
}

fn load_table<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ReferenceError> {
    if !path.exists() {
        debug!(path = %path.display(), "reference file not found, using empty table");
        return Ok(T::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|e| ReferenceError::Json {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, CarrierCode};
    use tempfile::tempdir;

    #[test]
    fn loads_all_tables() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(AIRLINES_FILE), r#"{"KQ": "Kenya Airways"}"#).unwrap();
        std::fs::write(
            dir.path().join(AIRCRAFT_TYPES_FILE),
            r#"{"7M8": "Boeing 737 MAX 8", "E90": "Embraer 190"}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(AIRPORT_DATABASE_FILE),
            r#"{"NBO": {"city": "Nairobi", "name": "Jomo Kenyatta International", "timezone": "Africa/Nairobi"}}"#,
        )
        .unwrap();

        let data = load_reference_data(&ReferenceConfig::new(dir.path())).unwrap();

        assert_eq!(data.len(), 4);
        assert_eq!(
            data.airline_name(&CarrierCode::parse("KQ").unwrap()),
            "Kenya Airways"
        );
        assert_eq!(data.aircraft_name("E90"), Some("Embraer 190"));
        assert_eq!(data.airport(&AirportCode::parse("NBO").unwrap()).city, "Nairobi");
    }

    #[test]
    fn missing_files_yield_empty_tables() {
        let dir = tempdir().unwrap();
        let data = load_reference_data(&ReferenceConfig::new(dir.path())).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(AIRLINES_FILE), "not json").unwrap();

        let err = load_reference_data(&ReferenceConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, ReferenceError::Json { .. }));
    }

    #[test]
    fn airport_record_missing_field_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(AIRPORT_DATABASE_FILE),
            r#"{"NBO": {"city": "Nairobi"}}"#,
        )
        .unwrap();

        assert!(load_reference_data(&ReferenceConfig::new(dir.path())).is_err());
    }

    #[test]
    fn config_builder() {
        let config = ReferenceConfig::default().with_refresh_interval(Duration::from_secs(60));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }
}
