//! Passenger manifest parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Passenger, Title};

/// Separator between passengers listed on one line (" 2.", " 3. ").
static NEXT_PASSENGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d+\.\s*").expect("static regex must compile"));

/// Parse one `LASTNAME/GIVENNAMES [TITLE]` block.
///
/// A trailing title token is split off the given names. Blocks without a
/// slash, or with an empty last name or empty given names, yield `None`.
///
/// # Examples
///
/// ```
/// use pnr_server::parser::parse_name_block;
///
/// let p = parse_name_block("smith/john paul mr").unwrap();
/// assert_eq!(p.last_name, "SMITH");
/// assert_eq!(p.given_names, "JOHN PAUL");
/// assert_eq!(p.to_string(), "SMITH/JOHN PAUL MR");
///
/// assert!(parse_name_block("SMITH").is_none());
/// ```
pub fn parse_name_block(block: &str) -> Option<Passenger> {
    let mut parts = block.trim().split('/');
    let last_name = parts.next()?.trim().to_uppercase();
    let given_raw = parts.next()?.trim().to_uppercase();

    let mut words: Vec<&str> = given_raw.split_whitespace().collect();
    let title = words.last().and_then(|w| Title::parse(w));
    if title.is_some() {
        words.pop();
    }
    let given_names = words.join(" ");

    if last_name.is_empty() || given_names.is_empty() {
        return None;
    }

    Some(Passenger {
        last_name,
        given_names,
        title,
    })
}

/// Parse the manifest text of one line, which may list several passengers.
///
/// `text` is the line with its leading `<n>.` marker already removed.
pub fn parse_manifest(text: &str) -> Vec<Passenger> {
    NEXT_PASSENGER
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .filter_map(parse_name_block)
        .collect()
}
