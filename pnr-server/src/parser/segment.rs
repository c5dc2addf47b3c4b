//! Segment extraction: turning captured fields into a `FlightSegment`.
//!
//! Segment lines carry day and month but never a year, and local times
//! without timezones. The extractor keeps a little state across segments
//! to infer years (assuming the PNR lists segments chronologically and
//! spans at most one year boundary), resolves airport timezones from the
//! reference tables, and computes durations and connection times from
//! the resulting instants.
//!
//! Nothing here fails: an unparseable date or unknown code degrades to a
//! placeholder value and parsing carries on.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::domain::{
    AirportCode, DayMonth, Endpoint, FlightSegment, TravelClass, describe_meal, format_day_month,
    format_hours_minutes, format_long_date, is_meal_code, localize, parse_hhmm,
};
use crate::reference::{AirportInfo, ReferenceData};

use super::classify::SegmentFields;
use super::config::{ParseOptions, ParserConfig};

/// Shown instead of a duration when either instant could not be built.
pub const INVALID_TIME: &str = "Invalid time";

/// Shown instead of a duration when arrival precedes departure.
pub const INVALID_DURATION: &str = "Invalid duration";

/// State carried from one segment to the next.
#[derive(Debug, Clone, Default)]
struct YearState {
    /// Year assigned to the most recent departure date.
    current_year: Option<i32>,
    /// Zero-based month of the most recent departure date.
    previous_month0: Option<u32>,
    /// Arrival instant of the most recent segment.
    previous_arrival: Option<DateTime<Tz>>,
    /// Number of segments extracted so far.
    segments_seen: u32,
}

/// Extracts flight segments in source order for one parse call.
pub struct SegmentExtractor<'a> {
    refs: &'a ReferenceData,
    options: ParseOptions,
    config: &'a ParserConfig,
    today: NaiveDate,
    state: YearState,
}

impl<'a> SegmentExtractor<'a> {
    /// Create an extractor. `today` anchors year inference for the first segment.
    pub fn new(
        refs: &'a ReferenceData,
        options: ParseOptions,
        config: &'a ParserConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            refs,
            options,
            config,
            today,
            state: YearState::default(),
        }
    }

    /// Assign a year to the next departure date.
    ///
    /// The first date gets the current year, or next year if that would put
    /// it more than `past_date_tolerance_months` in the past or if the day
    /// does not exist this year (29FEB). Each later date moves to the
    /// following year when its month is earlier than the previous segment's
    /// month.
    pub fn infer_year(&mut self, date: DayMonth) -> i32 {
        let year = match self.state.current_year {
            None => {
                let year = self.today.year();
                let cutoff = self
                    .today
                    .checked_sub_months(Months::new(self.config.past_date_tolerance_months));
                match (date.in_year(year), cutoff) {
                    (Some(prospective), Some(cutoff)) if prospective < cutoff => year + 1,
                    (None, _) => year + 1,
                    _ => year,
                }
            }
            Some(year)
                if self
                    .state
                    .previous_month0
                    .is_some_and(|prev| date.month0() < prev) =>
            {
                year + 1
            }
            Some(year) => year,
        };

        self.state.current_year = Some(year);
        self.state.previous_month0 = Some(date.month0());
        year
    }

    /// Build a flight segment from captured fields.
    pub fn extract(&mut self, fields: &SegmentFields<'_>) -> FlightSegment {
        self.state.segments_seen += 1;
        let segment_number = fields
            .segment_number
            .filter(|n| *n > 0)
            .unwrap_or(self.state.segments_seen);

        trace!(
            dialect = fields.dialect.name(),
            segment = segment_number,
            "extracting segment"
        );

        let origin = self.refs.airport(&fields.origin);
        let destination = self.refs.airport(&fields.destination);

        let departure_day = DayMonth::parse(fields.departure_date)
            .inspect_err(|e| {
                debug!(date = fields.departure_date, error = %e, "unparseable departure date")
            })
            .ok();
        let year = match departure_day {
            Some(day) => self.infer_year(day),
            None => self.state.current_year.unwrap_or_else(|| self.today.year()),
        };
        let departure_date = departure_day.and_then(|d| d.in_year(year));

        let departure = departure_date
            .zip(parse_hhmm(fields.departure_time).ok())
            .and_then(|(date, time)| localize(date, time, origin.timezone));

        let arrival = self.resolve_arrival(
            fields,
            departure_date,
            departure,
            year,
            destination.timezone,
        );

        let (duration_minutes, duration_display) = duration(departure, arrival);

        let (transit_time, transit_minutes, next_departure_time) =
            match (self.state.previous_arrival, departure) {
                (Some(previous), Some(dep)) => {
                    let gap = dep.signed_duration_since(previous).num_minutes();
                    if self.config.is_transit(gap) {
                        (
                            Some(format_hours_minutes(gap)),
                            Some(gap),
                            Some(self.options.transit_time_format.format(&dep)),
                        )
                    } else {
                        trace!(gap, "gap outside transit window");
                        (None, None, None)
                    }
                }
                _ => (None, None, None),
            };
        self.state.previous_arrival = arrival;

        let arrival_date_string = match (departure, arrival) {
            (Some(dep), Some(arr)) if arr.date_naive() != dep.date_naive() => {
                Some(format_day_month(&arr))
            }
            _ => None,
        };

        let (aircraft_index, aircraft_type_code) = self.find_aircraft(&fields.trailing);
        let aircraft_type_name = aircraft_type_code
            .as_deref()
            .map(|code| self.refs.aircraft_name(code).unwrap_or(code).to_string())
            .unwrap_or_default();

        let meal_code = fields
            .trailing
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != aircraft_index)
            .map(|(_, token)| *token)
            .find(|token| is_meal_code(token))
            .map(str::to_string);
        let meal_description = meal_code.as_deref().map(describe_meal);

        let segment_format = self.options.segment_time_format;

        FlightSegment {
            segment_number,
            carrier_code: fields.carrier,
            airline_name: self.refs.airline_name(&fields.carrier),
            flight_number: fields.flight_number.to_string(),
            travel_class: TravelClass::new(fields.class_code),
            date: departure.as_ref().map(format_long_date).unwrap_or_default(),
            departure: endpoint(
                fields.origin,
                origin,
                departure,
                segment_format.format_opt(departure),
                fields.origin_terminal,
                None,
            ),
            arrival: endpoint(
                fields.destination,
                destination,
                arrival,
                segment_format.format_opt(arrival),
                fields.destination_terminal,
                arrival_date_string,
            ),
            duration_minutes,
            duration_display,
            aircraft_type_code,
            aircraft_type_name,
            meal_code,
            meal_description,
            operated_by: None,
            notes: Vec::new(),
            transit_time,
            transit_minutes,
            next_departure_time,
            direction: None,
        }
    }

    /// Build the arrival instant from the arrival time and the optional
    /// trailing marker (`+N` days or an explicit `DDMON` date).
    fn resolve_arrival(
        &self,
        fields: &SegmentFields<'_>,
        departure_date: Option<NaiveDate>,
        departure: Option<DateTime<Tz>>,
        year: i32,
        tz: Tz,
    ) -> Option<DateTime<Tz>> {
        let time = parse_hhmm(fields.arrival_time).ok()?;

        match fields.arrival_marker {
            Some(marker) if marker.starts_with('+') => {
                let days: u64 = marker[1..].parse().ok()?;
                let date = departure_date?.checked_add_days(Days::new(days))?;
                localize(date, time, tz)
            }
            Some(marker) => {
                let day = DayMonth::parse(marker).ok()?;
                let departure_month0 = departure_date.map(|d| d.month0())?;
                let arrival_year = if day.month0() < departure_month0 {
                    year + 1
                } else {
                    year
                };
                localize(day.in_year(arrival_year)?, time, tz)
            }
            None => overnight_arrival(departure_date?, time, tz, departure),
        }
    }

    /// Find the aircraft type among trailing tokens.
    ///
    /// Codeshare-style tokens such as `E0/7M8` are checked by their part
    /// after the last slash. Returns the token index and the code.
    fn find_aircraft(&self, trailing: &[&str]) -> (Option<usize>, Option<String>) {
        trailing
            .iter()
            .enumerate()
            .find_map(|(i, &token)| {
                let candidate = token.rsplit('/').next().unwrap_or(token);
                self.refs
                    .aircraft_name(candidate)
                    .map(|_| (Some(i), Some(candidate.to_string())))
            })
            .unwrap_or((None, None))
    }
}

/// Arrival on the departure date, moved to the next day if it would
/// otherwise land before the departure.
fn overnight_arrival(
    date: NaiveDate,
    time: NaiveTime,
    tz: Tz,
    departure: Option<DateTime<Tz>>,
) -> Option<DateTime<Tz>> {
    let same_day = localize(date, time, tz);
    match (same_day, departure) {
        (Some(arrival), Some(dep)) if arrival < dep => {
            localize(date.checked_add_days(Days::new(1))?, time, tz)
        }
        _ => same_day,
    }
}

/// Elapsed minutes and their display string.
fn duration(
    departure: Option<DateTime<Tz>>,
    arrival: Option<DateTime<Tz>>,
) -> (Option<i64>, String) {
    match (departure, arrival) {
        (Some(dep), Some(arr)) => {
            let minutes = arr.signed_duration_since(dep).num_minutes();
            let display = if minutes < 0 {
                INVALID_DURATION.to_string()
            } else {
                format_hours_minutes(minutes)
            };
            (Some(minutes), display)
        }
        _ => (None, INVALID_TIME.to_string()),
    }
}

/// Strip a leading "T" from a terminal ("T2" -> "2"); empty becomes `None`.
pub fn normalize_terminal(terminal: Option<&str>) -> Option<String> {
    let t = terminal?.trim();
    let bare = t
        .strip_prefix('T')
        .or_else(|| t.strip_prefix('t'))
        .unwrap_or(t);
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}

fn endpoint(
    code: AirportCode,
    info: AirportInfo,
    instant: Option<DateTime<Tz>>,
    local_time: String,
    terminal: Option<&str>,
    date_string: Option<String>,
) -> Endpoint {
    Endpoint {
        airport_code: code,
        city: info.city,
        airport_name: info.name,
        local_time,
        terminal: normalize_terminal(terminal),
        timezone: info.timezone.name().to_string(),
        date_string,
        instant,
    }
}
