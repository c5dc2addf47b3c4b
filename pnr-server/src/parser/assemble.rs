//! Itinerary assembly.
//!
//! A single pass over the lines of a PNR dump, feeding each to the
//! classifier. Segment lines open a new flight (closing the previous one),
//! passenger lines extend the manifest, and annotations or notes attach to
//! whichever flight is currently open. Once every flight is known, a
//! second pass labels journey directions.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use tracing::{debug, trace, warn};

use crate::domain::{Direction, FlightSegment, ItineraryResult, Passenger};
use crate::reference::ReferenceData;

use super::classify::{LineKind, classify_line, prepare_line};
use super::config::{ParseOptions, ParserConfig};
use super::error::ParseError;
use super::passenger::parse_manifest;
use super::segment::SegmentExtractor;

/// Parse a PNR text dump, inferring years relative to today's local date.
pub fn parse_pnr(
    text: &str,
    options: &ParseOptions,
    refs: &ReferenceData,
    config: &ParserConfig,
) -> Result<ItineraryResult, ParseError> {
    parse_pnr_at(text, options, refs, config, Local::now().date_naive())
}

/// Parse a PNR text dump with an explicit "today" for year inference.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pnr_server::parser::{ParseOptions, ParserConfig, parse_pnr_at};
/// use pnr_server::reference::ReferenceData;
///
/// let text = "1  KQ 100 Y 15JAN MBOJFK 1200 1800\n1.DOE/JANE MRS";
/// let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// let result = parse_pnr_at(
///     text,
///     &ParseOptions::default(),
///     &ReferenceData::new(),
///     &ParserConfig::default(),
///     today,
/// )
/// .unwrap();
///
/// assert_eq!(result.flights.len(), 1);
/// assert_eq!(result.passengers[0].to_string(), "DOE/JANE MRS");
/// ```
pub fn parse_pnr_at(
    text: &str,
    options: &ParseOptions,
    refs: &ReferenceData,
    config: &ParserConfig,
    today: NaiveDate,
) -> Result<ItineraryResult, ParseError> {
    if text.len() > config.max_input_bytes {
        return Err(ParseError::InputTooLarge {
            bytes: text.len(),
            limit: config.max_input_bytes,
        });
    }

    let mut state = AssemblyState::new(SegmentExtractor::new(refs, *options, config, today));

    for (index, raw) in text.lines().enumerate() {
        if index >= config.max_lines {
            warn!(
                limit = config.max_lines,
                "line limit reached, ignoring remaining input"
            );
            break;
        }
        if raw.chars().count() > config.max_line_len {
            warn!(line = index + 1, limit = config.max_line_len, "skipping overlong line");
            continue;
        }
        if let Some(line) = prepare_line(raw) {
            state.feed(&line);
        }
    }

    let mut result = state.finish();
    assign_directions(&mut result.flights, config);

    debug!(
        flights = result.flights.len(),
        passengers = result.passengers.len(),
        "parsed PNR"
    );
    Ok(result)
}

/// Accumulator threaded through the line loop.
struct AssemblyState<'a> {
    extractor: SegmentExtractor<'a>,
    flights: Vec<FlightSegment>,
    open_flight: Option<FlightSegment>,
    passengers: Vec<Passenger>,
    seen_passengers: HashSet<String>,
}

impl<'a> AssemblyState<'a> {
    fn new(extractor: SegmentExtractor<'a>) -> Self {
        Self {
            extractor,
            flights: Vec::new(),
            open_flight: None,
            passengers: Vec::new(),
            seen_passengers: HashSet::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Segment(fields) => {
                let segment = self.extractor.extract(&fields);
                if let Some(done) = self.open_flight.replace(segment) {
                    self.flights.push(done);
                }
            }
            LineKind::Passengers(manifest) => {
                for passenger in parse_manifest(manifest) {
                    if self.seen_passengers.insert(passenger.to_string()) {
                        self.passengers.push(passenger);
                    }
                }
            }
            LineKind::OperatedBy(carrier) => match self.open_flight.as_mut() {
                Some(flight) => flight.operated_by = Some(carrier.to_string()),
                None => trace!(line, "operated-by line before any segment, discarded"),
            },
            LineKind::Note(note) => match self.open_flight.as_mut() {
                Some(flight) => flight.notes.push(note.to_string()),
                None => trace!(line, "note before any segment, discarded"),
            },
        }
    }

    fn finish(mut self) -> ItineraryResult {
        if let Some(last) = self.open_flight.take() {
            self.flights.push(last);
        }
        ItineraryResult {
            flights: self.flights,
            passengers: self.passengers,
        }
    }
}

/// Label journey directions across the completed flight list.
///
/// The first flight is outbound. A flight departing more than the
/// stopover threshold after the previous arrival starts a new leg: inbound
/// if the journey ends where it began, outbound otherwise. Flights within a
/// leg, and flights whose gap cannot be computed, stay unlabeled.
pub fn assign_directions(flights: &mut [FlightSegment], config: &ParserConfig) {
    let (Some(first), Some(last)) = (flights.first(), flights.last()) else {
        return;
    };
    let round_trip = first.departure.airport_code == last.arrival.airport_code;
    let threshold = config.stopover_threshold();

    let boundaries: Vec<bool> = flights
        .windows(2)
        .map(|pair| pair[1].gap_after(&pair[0]).is_some_and(|gap| gap > threshold))
        .collect();

    flights[0].direction = Some(Direction::Outbound);
    for (flight, is_boundary) in flights[1..].iter_mut().zip(boundaries) {
        if is_boundary {
            flight.direction = Some(if round_trip {
                Direction::Inbound
            } else {
                Direction::Outbound
            });
        }
    }
}
