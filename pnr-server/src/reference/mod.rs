//! Reference tables: airlines, aircraft types and airports.
//!
//! The tables are loaded from JSON files in a data directory and refreshed
//! periodically by the service. The parser only ever reads them.

mod error;
mod loader;
mod store;
mod tables;

pub use error::ReferenceError;
pub use loader::{
    AIRCRAFT_TYPES_FILE, AIRLINES_FILE, AIRPORT_DATABASE_FILE, ReferenceConfig,
    load_reference_data,
};
pub use store::ReferenceStore;
pub use tables::{AirportInfo, AirportRecord, ReferenceData};
