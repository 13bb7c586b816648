//! Protocol dialect selection

use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;

/// A JSON-RPC protocol dialect.
///
/// The three historical variants differ in which fields are required and in
/// how error objects are shaped. Ordering follows the numeric version, so
/// `version < ProtocolVersion::V2_0` selects the pre-2.0 behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    V1_0,
    V1_1,
    #[default]
    V2_0,
}

impl ProtocolVersion {
    /// Wire form of the `jsonrpc` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::V1_0 => "1.0",
            ProtocolVersion::V1_1 => "1.1",
            ProtocolVersion::V2_0 => "2.0",
        }
    }

    /// Numeric form, for comparing against whatever version string a server
    /// reports (which need not be one of the known dialects).
    pub fn as_f64(&self) -> f64 {
        match self {
            ProtocolVersion::V1_0 => 1.0,
            ProtocolVersion::V1_1 => 1.1,
            ProtocolVersion::V2_0 => 2.0,
        }
    }

    /// Whether `params` must be present in every request. Required by the
    /// pre-2.0 dialects; 2.0 allows the member to be omitted.
    pub fn requires_params(&self) -> bool {
        *self < ProtocolVersion::V2_0
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "1.0" => Ok(ProtocolVersion::V1_0),
            "1.1" => Ok(ProtocolVersion::V1_1),
            "2" | "2.0" => Ok(ProtocolVersion::V2_0),
            other => Err(ProtocolError::UnknownVersion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_numeric_version() {
        assert!(ProtocolVersion::V1_0 < ProtocolVersion::V1_1);
        assert!(ProtocolVersion::V1_1 < ProtocolVersion::V2_0);
        assert!(ProtocolVersion::V1_1.requires_params());
        assert!(!ProtocolVersion::V2_0.requires_params());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("1.1".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V1_1);
        assert_eq!("2".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V2_0);
        assert_eq!(ProtocolVersion::V1_0.to_string(), "1.0");
        assert!("3.0".parse::<ProtocolVersion>().is_err());
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ProtocolVersion::default(), ProtocolVersion::V2_0);
    }
}
