//! PNR itinerary converter.
//!
//! Turns airline reservation text dumps, as printed by GDS terminals, into
//! structured itineraries: flight segments with resolved airports and
//! timezones, passengers, connection times and journey directions.

pub mod domain;
pub mod parser;
pub mod reference;
pub mod web;
