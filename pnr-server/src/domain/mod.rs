//! Domain types for the PNR itinerary converter.
//!
//! This module contains validated reservation codes, the fixed GDS lookup
//! tables (cabins, meals), date/time primitives and the itinerary records
//! the parser produces. Code types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod airport;
mod cabin;
mod carrier;
mod itinerary;
mod meal;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use cabin::{Cabin, TravelClass};
pub use carrier::{CarrierCode, InvalidCarrierCode};
pub use itinerary::{Direction, Endpoint, FlightSegment, ItineraryResult, Passenger, Title};
pub use meal::{MEAL_CODE_CHARS, describe_meal, is_meal_code};
pub use time::{
    DayMonth, TimeError, TimeFormat, format_day_month, format_hours_minutes, format_long_date,
    localize, parse_hhmm, resolve_timezone,
};
