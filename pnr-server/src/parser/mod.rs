//! PNR text parsing.
//!
//! Turns a GDS text dump into an [`ItineraryResult`](crate::domain::ItineraryResult).
//! The pipeline has three stages:
//!
//! 1. **Classify** each line as a segment, passenger manifest, operated-by
//!    annotation or free-text note
//! 2. **Extract** segment lines into flight records, inferring years and
//!    resolving timezones from the reference tables
//! 3. **Assemble** flights and passengers in source order, then label
//!    journey directions

mod assemble;
mod classify;
mod config;
mod error;
mod passenger;
mod segment;


pub use assemble::{assign_directions, parse_pnr, parse_pnr_at};
pub use classify::{Dialect, LineKind, SegmentFields, classify_line, match_segment, prepare_line};
pub use config::{ParseOptions, ParserConfig};
pub use error::ParseError;
pub use passenger::{parse_manifest, parse_name_block};
pub use segment::{INVALID_DURATION, INVALID_TIME, SegmentExtractor, normalize_terminal};
