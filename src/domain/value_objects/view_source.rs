use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user reached a restaurant. Only `Recommendation` views feed the
/// repeat-protection cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewSource {
    Search,
    Recommendation,
    MapTap,
    Collection,
    Deal,
}

impl ViewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewSource::Search => "search",
            ViewSource::Recommendation => "recommendation",
            ViewSource::MapTap => "map_tap",
            ViewSource::Collection => "collection",
            ViewSource::Deal => "deal",
        }
    }

    /// Unrecognized persisted values decode as `Search`, which is never a
    /// suppressible source.
    pub fn parse(value: &str) -> Self {
        match value {
            "recommendation" => ViewSource::Recommendation,
            "map_tap" => ViewSource::MapTap,
            "collection" => ViewSource::Collection,
            "deal" => ViewSource::Deal,
            _ => ViewSource::Search,
        }
    }
}

impl fmt::Display for ViewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
