/// Error from parsing a PNR text.
///
/// Malformed lines and fields never produce an error; they degrade to
/// notes or placeholder values. Only input the parser refuses to look at
/// is reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text exceeds the configured size limit
    #[error("input of {bytes} bytes exceeds the {limit} byte limit")]
    InputTooLarge { bytes: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_both_sizes() {
        let err = ParseError::InputTooLarge {
            bytes: 300_000,
            limit: 262_144,
        };
        assert_eq!(
            err.to_string(),
            "input of 300000 bytes exceeds the 262144 byte limit"
        );
    }
}
