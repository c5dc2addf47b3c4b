//! Parsed itinerary records.
//!
//! These are the structured results produced from a PNR text dump: one
//! `FlightSegment` per recognized segment line, in source order, plus the
//! de-duplicated passenger list.

use std::fmt;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use super::{AirportCode, CarrierCode, TravelClass};

/// Whether a leg heads away from or back towards the journey origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Outbound,
    Inbound,
}

/// One end (departure or arrival) of a flight segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub airport_code: AirportCode,
    pub city: String,
    pub airport_name: String,
    /// Local wall-clock time, empty when the instant could not be built.
    pub local_time: String,
    pub terminal: Option<String>,
    /// IANA timezone name the local time is expressed in.
    pub timezone: String,
    /// GDS-style date ("16JAN"), only set on an arrival that lands on a
    /// different local date than the departure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_string: Option<String>,
    #[serde(skip)]
    pub instant: Option<DateTime<Tz>>,
}

/// One parsed flight leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    pub segment_number: u32,
    pub carrier_code: CarrierCode,
    pub airline_name: String,
    pub flight_number: String,
    pub travel_class: TravelClass,
    /// Departure date for display, empty when the date was unparseable.
    pub date: String,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub duration_minutes: Option<i64>,
    pub duration_display: String,
    pub aircraft_type_code: Option<String>,
    pub aircraft_type_name: String,
    pub meal_code: Option<String>,
    pub meal_description: Option<String>,
    pub operated_by: Option<String>,
    pub notes: Vec<String>,
    /// Connection time since the previous segment's arrival, only set
    /// inside the plausible transit window.
    pub transit_time: Option<String>,
    pub transit_minutes: Option<i64>,
    /// This segment's departure time rendered in the transit clock style,
    /// set alongside `transit_time`.
    pub next_departure_time: Option<String>,
    pub direction: Option<Direction>,
}

impl FlightSegment {
    /// Elapsed time from `previous`'s arrival to this segment's departure.
    ///
    /// Returns `None` if either instant failed to resolve.
    pub fn gap_after(&self, previous: &FlightSegment) -> Option<Duration> {
        let arrival = previous.arrival.instant?;
        let departure = self.departure.instant?;
        Some(departure.signed_duration_since(arrival))
    }
}

/// Passenger title accepted after the given names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Title {
    Mr,
    Mrs,
    Ms,
    Mstr,
    Miss,
    Chd,
    Inf,
}

impl Title {
    /// Recognize a title token (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let title = match s.to_ascii_uppercase().as_str() {
            "MR" => Title::Mr,
            "MRS" => Title::Mrs,
            "MS" => Title::Ms,
            "MSTR" => Title::Mstr,
            "MISS" => Title::Miss,
            "CHD" => Title::Chd,
            "INF" => Title::Inf,
            _ => return None,
        };
        Some(title)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Mr => "MR",
            Title::Mrs => "MRS",
            Title::Ms => "MS",
            Title::Mstr => "MSTR",
            Title::Miss => "MISS",
            Title::Chd => "CHD",
            Title::Inf => "INF",
        }
    }
}

/// A passenger from the name manifest.
///
/// Displays and serializes as `LASTNAME/GIVENNAMES[ TITLE]`, all uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Passenger {
    pub last_name: String,
    pub given_names: String,
    pub title: Option<Title>,
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.last_name, self.given_names)?;
        if let Some(title) = self.title {
            write!(f, " {}", title.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for Passenger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of parsing one PNR text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItineraryResult {
    pub flights: Vec<FlightSegment>,
    pub passengers: Vec<Passenger>,
}
