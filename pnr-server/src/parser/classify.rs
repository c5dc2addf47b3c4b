//! Line classification.
//!
//! Every non-blank line of a PNR dump is placed in exactly one category,
//! tried in fixed priority order: flight segment, passenger manifest,
//! "operated by" annotation, free-text note. Classification is line-local;
//! whether a note or annotation has a flight to attach to is the
//! assembler's concern.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::{AirportCode, CarrierCode};

/// GDS column layouts recognized as flight segment lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Concatenated city pair followed by a status token, no terminals:
    /// `1 KQ 100 Y 15JAN 4 NBOMBA HK1 0700 0800`
    Compact,
    /// Separate airports, each optionally followed by a terminal, segment
    /// number optional: `KQ 100 Y 15JAN NBO 1A MBA T2 0700 0800+1`
    Flexible,
    /// Fixed-width layout with a 6-letter city pair and no status token:
    /// `1 KQ 100 Y 15JAN MBOJFK 1200 1800`
    Tc,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Compact => "compact",
            Dialect::Flexible => "flexible",
            Dialect::Tc => "tc",
        }
    }
}

/// Raw fields captured from a segment line.
///
/// Codes are validated here; dates, times and the arrival marker are kept
/// as captured and resolved by the segment extractor, which degrades
/// rather than rejects when they don't make sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFields<'a> {
    pub dialect: Dialect,
    pub segment_number: Option<u32>,
    pub carrier: CarrierCode,
    pub flight_number: &'a str,
    pub class_code: char,
    pub departure_date: &'a str,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub origin_terminal: Option<&'a str>,
    pub destination_terminal: Option<&'a str>,
    pub departure_time: &'a str,
    pub arrival_time: &'a str,
    /// `+N` day offset or explicit `DDMON` arrival date.
    pub arrival_marker: Option<&'a str>,
    /// Whitespace-separated tokens after the matched fields.
    pub trailing: Vec<&'a str>,
}

/// The category a line falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Segment(SegmentFields<'a>),
    /// Manifest text after the leading `<n>.` marker.
    Passengers(&'a str),
    /// Carrier text following `OPERATED BY`.
    OperatedBy(&'a str),
    Note(&'a str),
}

/// A segment dialect: its regex and the name it is reported under.
///
/// Every pattern uses the same capture group names; a layout that runs the
/// airports together captures `pair` instead of `origin`/`dest`.
struct SegmentPattern {
    dialect: Dialect,
    regex: Regex,
}

impl SegmentPattern {
    fn new(dialect: Dialect, pattern: &str) -> Self {
        Self {
            dialect,
            regex: Regex::new(pattern).expect("static segment regex must compile"),
        }
    }

    fn capture<'a>(&self, line: &'a str) -> Option<SegmentFields<'a>> {
        let caps = self.regex.captures(line)?;
        let text = |name: &str| caps.name(name).map(|m| m.as_str());

        let (origin, destination) = match text("pair") {
            Some(pair) => AirportCode::parse_pair(pair).ok()?,
            None => (
                AirportCode::parse(text("origin")?).ok()?,
                AirportCode::parse(text("dest")?).ok()?,
            ),
        };

        let end = caps.get(0)?.end();

        Some(SegmentFields {
            dialect: self.dialect,
            segment_number: text("seg").and_then(|s| s.parse().ok()),
            carrier: CarrierCode::parse(text("carrier")?).ok()?,
            flight_number: text("flight")?,
            class_code: text("class")?.chars().next()?,
            departure_date: text("date")?,
            origin,
            destination,
            origin_terminal: non_empty(&caps, "depterm"),
            destination_terminal: non_empty(&caps, "arrterm"),
            departure_time: text("dep")?,
            arrival_time: text("arr")?,
            arrival_marker: text("arrdate"),
            trailing: line[end..].split_whitespace().collect(),
        })
    }
}

fn non_empty<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Segment dialects in the order they are tried.
static SEGMENT_PATTERNS: LazyLock<Vec<SegmentPattern>> = LazyLock::new(|| {
    vec![
        SegmentPattern::new(
            Dialect::Compact,
            r"^(?P<seg>\d+)\s+(?P<carrier>[A-Z0-9]{2})\s*(?P<flight>\d{1,4}[A-Z]?)\s+(?P<class>[A-Z])\s+(?P<date>[0-3]\d[A-Z]{3})\s+\S*\s*(?P<origin>[A-Z]{3})(?P<dest>[A-Z]{3})\s+\S+\s+(?P<dep>\d{4})\s+(?P<arr>\d{4})(?:\s*(?P<arrdate>[0-3]\d[A-Z]{3}|\+\d))?",
        ),
        SegmentPattern::new(
            Dialect::Flexible,
            r"^(?:(?P<seg>\d+)\s+)?(?P<carrier>[A-Z0-9]{2})\s*(?P<flight>\d{1,4}[A-Z]?)\s+(?P<class>[A-Z])\s+(?P<date>[0-3]\d[A-Z]{3})\s+(?P<origin>[A-Z]{3})\s*(?P<depterm>[0-9A-Z]*)\s+(?P<dest>[A-Z]{3})\s*(?P<arrterm>[0-9A-Z]*)\s+(?P<dep>\d{4})\s+(?P<arr>\d{4})(?:\s*(?P<arrdate>[0-3]\d[A-Z]{3}|\+\d))?",
        ),
        SegmentPattern::new(
            Dialect::Tc,
            r"^(?P<seg>\d+)\s+(?P<carrier>[A-Z0-9]{2})\s*(?P<flight>\d{1,4}[A-Z]?)\s+(?P<class>[A-Z])\s+(?P<date>[0-3]\d[A-Z]{3})\s+(?:\S{1,2}\s+)?(?P<pair>[A-Z]{6})\s+(?P<dep>\d{4})\s+(?P<arr>\d{4})(?:\s*(?P<arrdate>[0-3]\d[A-Z]{3}|\+\d))?",
        ),
    ]
});

static PASSENGER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*[A-Z/]").expect("static regex must compile"));

static PASSENGER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("static regex must compile"));

static OPERATED_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)OPERATED BY\s+(.+)").expect("static regex must compile"));

/// Normalize a raw input line for classification.
///
/// Trims surrounding whitespace, drops one leading `*` indicator and
/// uppercases the rest. Returns `None` for blank lines.
pub fn prepare_line(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let line = trimmed.strip_prefix('*').unwrap_or(trimmed).trim_start();
    if line.is_empty() {
        None
    } else {
        Some(line.to_uppercase())
    }
}

/// Try each segment dialect in priority order.
pub fn match_segment(line: &str) -> Option<SegmentFields<'_>> {
    SEGMENT_PATTERNS.iter().find_map(|p| p.capture(line))
}

/// Classify a prepared line.
///
/// # Examples
///
/// ```
/// use pnr_server::parser::{LineKind, classify_line};
///
/// assert!(matches!(classify_line("1 KQ 100 Y 15JAN MBOJFK 1200 1800"), LineKind::Segment(_)));
/// assert_eq!(classify_line("1.DOE/JANE MRS"), LineKind::Passengers("DOE/JANE MRS"));
/// assert_eq!(classify_line("OPERATED BY JAMBOJET"), LineKind::OperatedBy("JAMBOJET"));
/// assert_eq!(classify_line("SEAT 12A"), LineKind::Note("SEAT 12A"));
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(fields) = match_segment(line) {
        return LineKind::Segment(fields);
    }

    if PASSENGER_LINE.is_match(line) {
        let rest = PASSENGER_PREFIX
            .find(line)
            .map_or(line, |m| &line[m.end()..]);
        return LineKind::Passengers(rest);
    }

    if let Some(caps) = OPERATED_BY.captures(line)
        && let Some(carrier) = caps.get(1)
    {
        return LineKind::OperatedBy(carrier.as_str().trim());
    }

    LineKind::Note(line)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any well-formed TC line is recognized with its fields intact
        #[test]
        fn tc_lines_always_match(
            seg in 1u32..99,
            carrier in "[A-Z]{2}",
            flight in 1u32..9999,
            day in 1u32..=28,
            pair in "[A-Z]{6}",
            dep in 0u32..2400,
            arr in 0u32..2400,
        ) {
            let line = format!("{seg} {carrier} {flight} Y {day:02}MAR {pair} {dep:04} {arr:04}");
            let fields = match_segment(&line).expect("segment");
            prop_assert_eq!(fields.carrier.as_str(), carrier.as_str());
            prop_assert_eq!(fields.origin.as_str(), &pair[..3]);
            prop_assert_eq!(fields.destination.as_str(), &pair[3..]);
        }

        /// Lines without digits never classify as segments or passengers
        #[test]
        fn letters_only_lines_are_not_segments(line in "[A-Z ]{1,60}") {
            let kind = classify_line(&line);
            let is_segment = matches!(kind, LineKind::Segment(_));
            let is_passenger = matches!(kind, LineKind::Passengers(_));
            prop_assert!(!is_segment);
            prop_assert!(!is_passenger);
        }
    }
}
