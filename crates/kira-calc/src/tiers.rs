//! Marginal rate tiers.
//!
//! A tiered schedule charges each slice of an amount at the rate of the tier
//! it falls into, like income tax brackets. Tiers are ordered by upper bound;
//! the last tier has no upper bound.

use kira_core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// One marginal tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// Upper bound of the tier (inclusive); `None` for the open-ended top tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<f64>,
    /// Rate applied to the slice inside this tier, in percent
    pub rate_percent: f64,
}

impl RateTier {
    /// Creates a bounded tier.
    pub const fn up_to(limit: f64, rate_percent: f64) -> Self {
        Self {
            up_to: Some(limit),
            rate_percent,
        }
    }

    /// Creates the open-ended top tier.
    pub const fn above(rate_percent: f64) -> Self {
        Self {
            up_to: None,
            rate_percent,
        }
    }
}

/// The charge from one tier for a given amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCharge {
    /// Lower bound of the tier
    pub from: f64,
    /// Upper bound of the tier, `None` if open-ended
    pub to: Option<f64>,
    /// Part of the amount inside this tier
    pub taxable: f64,
    /// Rate in percent
    pub rate_percent: f64,
    /// taxable × rate
    pub charge: f64,
}

/// An ordered set of marginal tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateTier>", into = "Vec<RateTier>")]
pub struct TieredRateSchedule {
    tiers: Vec<RateTier>,
}

impl TieredRateSchedule {
    /// Creates a schedule, checking that it is well formed.
    ///
    /// Bounds must be positive and strictly increasing, rates finite and not
    /// negative, and only the last tier may be open-ended.
    pub fn new(tiers: Vec<RateTier>) -> CalcResult<Self> {
        if tiers.is_empty() {
            return Err(CalcError::invalid_input("tiers", "schedule has no tiers"));
        }

        let mut previous = 0.0;
        for (idx, tier) in tiers.iter().enumerate() {
            if !tier.rate_percent.is_finite() || tier.rate_percent < 0.0 {
                return Err(CalcError::invalid_input(
                    "tiers",
                    format!("tier {} has invalid rate {}", idx + 1, tier.rate_percent),
                ));
            }
            match tier.up_to {
                Some(limit) if !limit.is_finite() || limit <= previous => {
                    return Err(CalcError::invalid_input(
                        "tiers",
                        format!("tier {} bound {} is not above {}", idx + 1, limit, previous),
                    ));
                }
                Some(limit) => previous = limit,
                None if idx + 1 != tiers.len() => {
                    return Err(CalcError::invalid_input(
                        "tiers",
                        format!("only the last tier may be open-ended (tier {})", idx + 1),
                    ));
                }
                None => {}
            }
        }

        Ok(Self { tiers })
    }

    /// Wraps tiers known to be well formed.
    pub(crate) fn from_known_tiers(tiers: &[RateTier]) -> Self {
        debug_assert!(Self::new(tiers.to_vec()).is_ok());
        Self {
            tiers: tiers.to_vec(),
        }
    }

    /// Returns the tiers in order.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Charge per tier for `amount`. Tiers the amount does not reach are omitted.
    pub fn charges(&self, amount: f64) -> Vec<TierCharge> {
        let mut charges = Vec::new();
        let mut lower = 0.0;

        for tier in &self.tiers {
            if amount <= lower {
                break;
            }
            let upper = tier.up_to.map_or(amount, |limit| amount.min(limit));
            let taxable = upper - lower;
            charges.push(TierCharge {
                from: lower,
                to: tier.up_to,
                taxable,
                rate_percent: tier.rate_percent,
                charge: taxable * tier.rate_percent / 100.0,
            });
            match tier.up_to {
                Some(limit) => lower = limit,
                None => break,
            }
        }

        charges
    }

    /// Total marginal charge for `amount`.
    ///
    /// Any part of the amount above the last bounded tier is not charged when
    /// the schedule has no open-ended tier.
    pub fn charge(&self, amount: f64) -> f64 {
        self.charges(amount).iter().map(|c| c.charge).sum()
    }
}

impl TryFrom<Vec<RateTier>> for TieredRateSchedule {
    type Error = CalcError;

    fn try_from(tiers: Vec<RateTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TieredRateSchedule> for Vec<RateTier> {
    fn from(schedule: TieredRateSchedule) -> Self {
        schedule.tiers
    }
}
