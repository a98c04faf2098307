//! Compounding frequency for savings growth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// How often interest is compounded per year.
///
/// Only the seven listed frequencies are supported. Integer codes from a form
/// (`0`, `1`, `2`, `4`, `12`, `52`, `365`) convert through [`TryFrom<u32>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingFrequency {
    /// Simple interest (no compounding)
    None,
    /// Annual compounding (1x per year)
    Annually,
    /// Semi-annual compounding (2x per year)
    SemiAnnually,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    #[default]
    Monthly,
    /// Weekly compounding (52x per year)
    Weekly,
    /// Daily compounding (365x per year)
    Daily,
}

impl CompoundingFrequency {
    /// Every supported frequency, in increasing order of periods.
    pub const ALL: [CompoundingFrequency; 7] = [
        CompoundingFrequency::None,
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Weekly,
        CompoundingFrequency::Daily,
    ];

    /// Returns the number of compounding periods per year.
    ///
    /// Returns 0 for [`CompoundingFrequency::None`].
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::None => 0,
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Returns true if this is simple interest (no compounding).
    #[must_use]
    pub fn is_simple(&self) -> bool {
        matches!(self, CompoundingFrequency::None)
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::None => "No compound",
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Weekly => "Weekly",
            CompoundingFrequency::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = CalcError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.periods_per_year() == periods)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "compoundFrequency",
                    format!("unsupported compounding frequency {}", periods),
                )
            })
    }
}

impl FromStr for CompoundingFrequency {
    type Err = CalcError;

    /// Parses either a period count (`"12"`) or a name (`"monthly"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        if let Ok(periods) = normalized.parse::<u32>() {
            return Self::try_from(periods);
        }
        match normalized.as_str() {
            "none" | "nocompound" | "simple" => Ok(Self::None),
            "annually" | "annual" | "yearly" => Ok(Self::Annually),
            "semiannually" | "semiannual" => Ok(Self::SemiAnnually),
            "quarterly" => Ok(Self::Quarterly),
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "daily" => Ok(Self::Daily),
            _ => Err(CalcError::invalid_input(
                "compoundFrequency",
                format!("unknown compounding frequency '{}'", s.trim()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(CompoundingFrequency::None.periods_per_year(), 0);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(CompoundingFrequency::Daily.periods_per_year(), 365);
    }

    #[test]
    fn test_try_from_codes() {
        for freq in CompoundingFrequency::ALL {
            assert_eq!(
                CompoundingFrequency::try_from(freq.periods_per_year()).unwrap(),
                freq
            );
        }
        assert!(CompoundingFrequency::try_from(3).is_err());
        assert!(CompoundingFrequency::try_from(360).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "semi-annually".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::SemiAnnually
        );
        assert_eq!(
            " 52 ".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::Weekly
        );
        assert_eq!(
            "No compound".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::None
        );
        assert!("fortnightly".parse::<CompoundingFrequency>().is_err());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(CompoundingFrequency::None.to_string(), "No compound");
        let json = serde_json::to_string(&CompoundingFrequency::SemiAnnually).unwrap();
        assert_eq!(json, "\"semi_annually\"");
        assert!(CompoundingFrequency::None.is_simple());
        assert!(!CompoundingFrequency::Daily.is_simple());
    }
}
