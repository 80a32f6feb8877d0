use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Significance tier of a period.
///
/// Tiers are ordered `Maximum > High > Moderate > Other(_)`. Tier names the
/// engine does not know are kept in the `Other` arm rather than dropped, so a
/// backend introducing a new tier still gets its periods rendered in their own
/// bucket after the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Significance {
    Maximum,
    High,
    Moderate,
    Other(String),
}

impl Significance {
    /// Wire name of the tier.
    pub fn as_str(&self) -> &str {
        match self {
            Significance::Maximum => "maximum",
            Significance::High => "high",
            Significance::Moderate => "moderate",
            Significance::Other(name) => name,
        }
    }

    /// Numeric rank, higher is more significant. All `Other` tiers share rank 0.
    pub fn rank(&self) -> u8 {
        match self {
            Significance::Maximum => 3,
            Significance::High => 2,
            Significance::Moderate => 1,
            Significance::Other(_) => 0,
        }
    }

    /// Parse a tier name, case-insensitively. Never fails.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        match normalized.as_str() {
            "maximum" => Significance::Maximum,
            "high" => Significance::High,
            "moderate" => Significance::Moderate,
            _ => Significance::Other(normalized),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Significance::Other(_))
    }
}

impl Ord for Significance {
    fn cmp(&self, other: &Self) -> Ordering {
        // Among unknown tiers the alphabetically first name is the greatest, so
        // descending iteration lists them alphabetically.
        self.rank()
            .cmp(&other.rank())
            .then_with(|| other.as_str().cmp(self.as_str()))
    }
}

impl PartialOrd for Significance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Significance {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Significance::from_name(s))
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Significance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Significance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Significance::from_name(&raw))
    }
}
