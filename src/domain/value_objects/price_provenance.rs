use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a restaurant's average price figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceProvenance {
    #[default]
    Unknown,
    Estimated,
    Verified,
    Cached,
}

impl PriceProvenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceProvenance::Unknown => "unknown",
            PriceProvenance::Estimated => "estimated",
            PriceProvenance::Verified => "verified",
            PriceProvenance::Cached => "cached",
        }
    }

    /// Unrecognized persisted values decode as `Unknown`, never an error.
    pub fn parse(value: &str) -> Self {
        match value {
            "estimated" => PriceProvenance::Estimated,
            "verified" => PriceProvenance::Verified,
            "cached" => PriceProvenance::Cached,
            _ => PriceProvenance::Unknown,
        }
    }
}

impl fmt::Display for PriceProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
