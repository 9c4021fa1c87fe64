//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backends send, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for coin identifiers (e.g. `"bitcoin"`).
///
/// Stable primary key across snapshot fetches; also the foreign key a
/// watchlist entry carries, which may reference a coin not present in the
/// current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── TimeRange ───────────────────────────────────────────────────────────────

/// Chart time-range selection.
///
/// Drives the granularity parameter sent to the market chart endpoint. `Week`
/// is the implicit default used before any explicit selection and the safe
/// fallback for unrecognized selector labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    Year,
    #[serde(rename = "5y")]
    FiveYears,
    #[default]
    #[serde(rename = "7d")]
    Week,
}

impl TimeRange {
    /// The ranges a selector UI offers, in display order.
    pub const SELECTABLE: [TimeRange; 6] = [
        Self::Day,
        Self::FiveDays,
        Self::Month,
        Self::SixMonths,
        Self::Year,
        Self::FiveYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "1d",
            Self::FiveDays => "5d",
            Self::Month => "1m",
            Self::SixMonths => "6m",
            Self::Year => "1y",
            Self::FiveYears => "5y",
            Self::Week => "7d",
        }
    }

    /// Granularity in days sent to the market chart endpoint.
    pub fn days(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::FiveDays => 5,
            Self::Month => 30,
            Self::SixMonths => 180,
            Self::Year => 365,
            Self::FiveYears => 1825,
            Self::Week => 7,
        }
    }

    /// Label shown on range selector buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "1D",
            Self::FiveDays => "5D",
            Self::Month => "1M",
            Self::SixMonths => "6M",
            Self::Year => "1Y",
            Self::FiveYears => "5Y",
            Self::Week => "7D",
        }
    }

    /// Parse a selector value; anything unrecognized falls back to `Week`.
    pub fn parse(s: &str) -> Self {
        match s {
            "1d" => Self::Day,
            "5d" => Self::FiveDays,
            "1m" => Self::Month,
            "6m" => Self::SixMonths,
            "1y" => Self::Year,
            "5y" => Self::FiveYears,
            _ => Self::Week,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
