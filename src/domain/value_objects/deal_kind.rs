use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealKind {
    Daily,
    Weekly,
    Limited,
    Student,
    HappyHour,
    Combo,
}

impl DealKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealKind::Daily => "daily",
            DealKind::Weekly => "weekly",
            DealKind::Limited => "limited",
            DealKind::Student => "student",
            DealKind::HappyHour => "happy_hour",
            DealKind::Combo => "combo",
        }
    }

    /// Unrecognized persisted values decode as `Limited`, the narrowest kind.
    pub fn parse(value: &str) -> Self {
        match value {
            "daily" => DealKind::Daily,
            "weekly" => DealKind::Weekly,
            "student" => DealKind::Student,
            "happy_hour" => DealKind::HappyHour,
            "combo" => DealKind::Combo,
            _ => DealKind::Limited,
        }
    }
}

impl fmt::Display for DealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealOrigin {
    Official,
    Verified,
    UserSubmitted,
    Scraped,
}

impl DealOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealOrigin::Official => "official",
            DealOrigin::Verified => "verified",
            DealOrigin::UserSubmitted => "user_submitted",
            DealOrigin::Scraped => "scraped",
        }
    }

    /// Unrecognized persisted values decode as `Scraped`, the least trusted
    /// origin.
    pub fn parse(value: &str) -> Self {
        match value {
            "official" => DealOrigin::Official,
            "verified" => DealOrigin::Verified,
            "user_submitted" => DealOrigin::UserSubmitted,
            _ => DealOrigin::Scraped,
        }
    }
}

impl fmt::Display for DealOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
