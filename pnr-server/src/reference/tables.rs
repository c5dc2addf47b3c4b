//! In-memory reference tables.

use std::collections::HashMap;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::{AirportCode, CarrierCode, resolve_timezone};

/// One airport entry as stored in `airportDatabase.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AirportRecord {
    pub city: String,
    pub name: String,
    pub timezone: String,
}

/// Airport details resolved for a segment endpoint.
///
/// Unknown airports resolve to placeholder values rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportInfo {
    pub city: String,
    pub name: String,
    pub timezone: Tz,
}

impl AirportInfo {
    /// Placeholder for an airport missing from the table.
    fn unknown(code: &AirportCode) -> Self {
        Self {
            city: "Unknown".to_string(),
            name: format!("Airport ({code})"),
            timezone: Tz::UTC,
        }
    }
}

/// The three lookup tables the parser reads.
///
/// Keys are stored uppercase. The parser only ever reads a `ReferenceData`;
/// refreshing replaces the whole value (see [`super::ReferenceStore`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    airlines: HashMap<String, String>,
    aircraft_types: HashMap<String, String>,
    airports: HashMap<String, AirportRecord>,
}

impl ReferenceData {
    /// Create empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw maps, normalizing keys to uppercase.
    pub fn from_maps(
        airlines: HashMap<String, String>,
        aircraft_types: HashMap<String, String>,
        airports: HashMap<String, AirportRecord>,
    ) -> Self {
        Self {
            airlines: uppercase_keys(airlines),
            aircraft_types: uppercase_keys(aircraft_types),
            airports: uppercase_keys(airports),
        }
    }

    /// Add an airline name.
    pub fn with_airline(mut self, code: &str, name: &str) -> Self {
        self.airlines.insert(code.to_uppercase(), name.to_string());
        self
    }

    /// Add an aircraft type name.
    pub fn with_aircraft(mut self, code: &str, name: &str) -> Self {
        self.aircraft_types
            .insert(code.to_uppercase(), name.to_string());
        self
    }

    /// Add an airport record.
    pub fn with_airport(mut self, code: &str, city: &str, name: &str, timezone: &str) -> Self {
        self.airports.insert(
            code.to_uppercase(),
            AirportRecord {
                city: city.to_string(),
                name: name.to_string(),
                timezone: timezone.to_string(),
            },
        );
        self
    }

    /// Airline name for a carrier, or `"Unknown Airline (<code>)"`.
    pub fn airline_name(&self, carrier: &CarrierCode) -> String {
        self.airlines
            .get(carrier.as_str())
            .cloned()
            .unwrap_or_else(|| format!("Unknown Airline ({carrier})"))
    }

    /// Aircraft type name, if the code is known.
    pub fn aircraft_name(&self, code: &str) -> Option<&str> {
        self.aircraft_types.get(code).map(String::as_str)
    }

    /// Resolve an airport, substituting placeholders for unknown codes and
    /// UTC for unknown timezone names.
    pub fn airport(&self, code: &AirportCode) -> AirportInfo {
        match self.airports.get(code.as_str()) {
            Some(record) => AirportInfo {
                city: record.city.clone(),
                name: record.name.clone(),
                timezone: resolve_timezone(&record.timezone),
            },
            None => AirportInfo::unknown(code),
        }
    }

    /// Airport codes whose stored timezone name does not resolve.
    pub fn invalid_timezones(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .airports
            .iter()
            .filter(|(_, record)| record.timezone.parse::<Tz>().is_err())
            .map(|(code, _)| code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Total number of entries across all three tables.
    pub fn len(&self) -> usize {
        self.airlines.len() + self.aircraft_types.len() + self.airports.len()
    }

    /// Returns true if all three tables are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn uppercase_keys<V>(map: HashMap<String, V>) -> HashMap<String, V> {
    map.into_iter()
        .map(|(k, v)| (k.trim().to_uppercase(), v))
        .collect()
}
