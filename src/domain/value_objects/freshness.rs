use serde::{Deserialize, Serialize};
use std::fmt;

/// Distinguishes a just-fetched record from one served out of local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Live,
    Cached,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Live => "live",
            Freshness::Cached => "cached",
        }
    }

    /// Unrecognized persisted values decode as `Cached`; the store never
    /// claims a row is live.
    pub fn parse(value: &str) -> Self {
        match value {
            "live" => Freshness::Live,
            _ => Freshness::Cached,
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
