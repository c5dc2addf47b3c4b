//! Airport code type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// GDS segment lines always carry airports as 3 uppercase letters, either
/// as separate tokens or run together as a 6-letter city pair. Any
/// `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use pnr_server::domain::AirportCode;
///
/// let nbo = AirportCode::parse("NBO").unwrap();
/// assert_eq!(nbo.as_str(), "NBO");
///
/// assert!(AirportCode::parse("nbo").is_err());
/// assert!(AirportCode::parse("NB").is_err());
/// assert!(AirportCode::parse("NBOX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Split a 6-letter concatenated city pair ("MBOJFK") into its two airports.
    pub fn parse_pair(s: &str) -> Result<(Self, Self), InvalidAirportCode> {
        if s.len() != 6 || !s.is_ascii() {
            return Err(InvalidAirportCode {
                reason: "city pair must be exactly 6 characters",
            });
        }
        Ok((Self::parse(&s[..3])?, Self::parse(&s[3..])?))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("NBO").is_ok());
        assert!(AirportCode::parse("MBA").is_ok());
        assert!(AirportCode::parse("JFK").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("jfk").is_err());
        assert!(AirportCode::parse("Jfk").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("JF").is_err());
        assert!(AirportCode::parse("JFKX").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("J1K").is_err());
        assert!(AirportCode::parse("J K").is_err());
        assert!(AirportCode::parse("JÖK").is_err());
    }

    #[test]
    fn parse_city_pair() {
        let (from, to) = AirportCode::parse_pair("MBOJFK").unwrap();
        assert_eq!(from.as_str(), "MBO");
        assert_eq!(to.as_str(), "JFK");

        assert!(AirportCode::parse_pair("MBOJF").is_err());
        assert!(AirportCode::parse_pair("MBO JF").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("LHR").unwrap();
        assert_eq!(format!("{}", code), "LHR");
        assert_eq!(format!("{:?}", code), "AirportCode(LHR)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = AirportCode::parse("DXB").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"DXB\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the input
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Any 6-letter pair splits into the two halves
        #[test]
        fn pair_splits_in_half(a in "[A-Z]{3}", b in "[A-Z]{3}") {
            let (from, to) = AirportCode::parse_pair(&format!("{a}{b}")).unwrap();
            prop_assert_eq!(from.as_str(), a.as_str());
            prop_assert_eq!(to.as_str(), b.as_str());
        }
    }
}
