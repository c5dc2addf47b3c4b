//! Booking class to cabin mapping.

use std::fmt;

use serde::{Serialize, Serializer};

/// Booking class letters sold in a First cabin.
const FIRST_CODES: &[char] = &['F', 'A'];

/// Booking class letters sold in a Business cabin.
const BUSINESS_CODES: &[char] = &['J', 'C', 'D', 'I', 'Z', 'P'];

/// Premium Economy is carrier specific, so no letter maps to it by default.
const PREMIUM_ECONOMY_CODES: &[char] = &[];

/// Booking class letters sold in an Economy cabin.
const ECONOMY_CODES: &[char] = &[
    'Y', 'B', 'H', 'K', 'L', 'M', 'N', 'O', 'Q', 'S', 'U', 'V', 'X', 'G', 'W', 'E', 'T', 'R',
];

/// The cabin a booking class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cabin {
    First,
    Business,
    PremiumEconomy,
    Economy,
    /// A booking class letter with no fixed cabin.
    Other(char),
}

impl Cabin {
    /// Look up the cabin for a booking class letter.
    pub fn from_class_code(code: char) -> Self {
        let code = code.to_ascii_uppercase();
        if FIRST_CODES.contains(&code) {
            Cabin::First
        } else if BUSINESS_CODES.contains(&code) {
            Cabin::Business
        } else if PREMIUM_ECONOMY_CODES.contains(&code) {
            Cabin::PremiumEconomy
        } else if ECONOMY_CODES.contains(&code) {
            Cabin::Economy
        } else {
            Cabin::Other(code)
        }
    }
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cabin::First => f.write_str("First"),
            Cabin::Business => f.write_str("Business"),
            Cabin::PremiumEconomy => f.write_str("Premium Economy"),
            Cabin::Economy => f.write_str("Economy"),
            Cabin::Other(code) => write!(f, "Class {code}"),
        }
    }
}

impl Serialize for Cabin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A booking class letter together with its cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelClass {
    pub code: char,
    pub name: Cabin,
}

impl TravelClass {
    pub fn new(code: char) -> Self {
        let code = code.to_ascii_uppercase();
        Self {
            code,
            name: Cabin::from_class_code(code),
        }
    }
}
