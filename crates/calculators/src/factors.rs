//! Multiplier lookups and explicit factor pipelines
//!
//! Estimates are built as `base x factor x factor ...`. Each factor is looked
//! up on its own and kept by name, so a result can show exactly how it was
//! composed.

use serde::Serialize;

use crate::constants::{
    ENGAGEMENT_MULTIPLIERS, FOLLOWER_TIERS, LOW_ENGAGEMENT_MULTIPLIER, NEUTRAL_MULTIPLIER, TierBand,
};

/// Value for `key`, or the neutral multiplier when the table has no entry
pub fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> f64 {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map_or(NEUTRAL_MULTIPLIER, |(_, multiplier)| *multiplier)
}

/// First step whose threshold `value` reaches, highest threshold first
pub fn ladder_factor(table: &[(f64, f64)], value: f64, floor: f64) -> f64 {
    table
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(floor, |(_, multiplier)| *multiplier)
}

/// Rate multiplier for an engagement rate (percent)
pub fn engagement_multiplier(engagement_rate: f64) -> f64 {
    ladder_factor(ENGAGEMENT_MULTIPLIERS, engagement_rate, LOW_ENGAGEMENT_MULTIPLIER)
}

/// Tier band containing `followers`. Counts below the smallest band use it.
pub fn tier_band(followers: f64) -> &'static TierBand {
    FOLLOWER_TIERS
        .iter()
        .rev()
        .find(|band| followers >= band.min_followers)
        .unwrap_or(&FOLLOWER_TIERS[0])
}

/// One named multiplier in a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Factor {
    pub name: &'static str,
    pub value: f64,
}

/// Ordered product of named factors
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FactorChain {
    factors: Vec<Factor>,
}

impl FactorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, name: &'static str, value: f64) -> Self {
        self.factors.push(Factor { name, value });
        self
    }

    /// Composed multiplier (1.0 for an empty chain)
    pub fn product(&self) -> f64 {
        self.factors.iter().map(|f| f.value).product()
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Factor value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.factors.iter().find(|f| f.name == name).map(|f| f.value)
    }

    /// `base` scaled by every factor
    pub fn apply(&self, base: f64) -> f64 {
        base * self.product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{FollowerTier, Niche};
    use crate::constants::NICHE_RPM_MULTIPLIERS;

    #[test]
    fn test_lookup_falls_back_to_neutral() {
        assert_eq!(lookup(NICHE_RPM_MULTIPLIERS, Niche::Finance), 2.0);
        assert_eq!(lookup(NICHE_RPM_MULTIPLIERS, Niche::Other), 1.0);
    }

    #[test]
    fn test_engagement_multiplier() {
        assert_eq!(engagement_multiplier(12.0), 1.5);
        assert_eq!(engagement_multiplier(6.0), 1.25);
        assert_eq!(engagement_multiplier(3.5), 1.0);
        assert_eq!(engagement_multiplier(0.5), 0.75);
    }

    #[test]
    fn test_tier_band() {
        assert_eq!(tier_band(500.0).tier, FollowerTier::Nano);
        assert_eq!(tier_band(10_000.0).tier, FollowerTier::Micro);
        assert_eq!(tier_band(750_000.0).tier, FollowerTier::Macro);
        assert_eq!(tier_band(50_000_000.0).tier, FollowerTier::Mega);
    }

    #[test]
    fn test_chain_product_and_breakdown() {
        let chain = FactorChain::new().then("niche", 2.0).then("engagement", 1.25);
        assert_eq!(chain.product(), 2.5);
        assert_eq!(chain.apply(10.0), 25.0);
        assert_eq!(chain.get("engagement"), Some(1.25));
        assert_eq!(FactorChain::new().product(), 1.0);
    }
}
