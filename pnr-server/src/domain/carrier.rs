//! Airline (carrier) designator type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid carrier designator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrierCode {
    reason: &'static str,
}

/// A 2-character IATA airline designator.
///
/// Designators are uppercase letters or digits in either position
/// (e.g. "KQ" for Kenya Airways, "9W", "U2").
///
/// # Examples
///
/// ```
/// use pnr_server::domain::CarrierCode;
///
/// let kq = CarrierCode::parse("KQ").unwrap();
/// assert_eq!(kq.as_str(), "KQ");
///
/// assert!(CarrierCode::parse("U2").is_ok());
/// assert!(CarrierCode::parse("kq").is_err());
/// assert!(CarrierCode::parse("KQA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarrierCode([u8; 2]);

impl CarrierCode {
    /// Parse a carrier designator from a string.
    ///
    /// The input must be exactly 2 characters, each an uppercase ASCII
    /// letter or digit.
    pub fn parse(s: &str) -> Result<Self, InvalidCarrierCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCarrierCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidCarrierCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(CarrierCode([bytes[0], bytes[1]]))
    }

    /// Returns the designator as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.as_str())
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CarrierCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_designators() {
        assert!(CarrierCode::parse("KQ").is_ok()); // Kenya Airways
        assert!(CarrierCode::parse("EK").is_ok()); // Emirates
        assert!(CarrierCode::parse("U2").is_ok()); // easyJet
        assert!(CarrierCode::parse("9W").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(CarrierCode::parse("kq").is_err());
        assert!(CarrierCode::parse("Kq").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(CarrierCode::parse("").is_err());
        assert!(CarrierCode::parse("K").is_err());
        assert!(CarrierCode::parse("KQA").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(CarrierCode::parse("K-").is_err());
        assert!(CarrierCode::parse("K ").is_err());
    }

    #[test]
    fn display() {
        let code = CarrierCode::parse("EK").unwrap();
        assert_eq!(code.to_string(), "EK");
        assert_eq!(format!("{:?}", code), "CarrierCode(EK)");
    }
}
