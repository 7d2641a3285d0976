//! Centralized constant tables for every calculator
//!
//! All rates here are illustrative estimates. Updating them means shipping a
//! new release; nothing in this crate mutates them at runtime.

use crate::choices::{Currency, FilingStatus, FollowerTier, Niche, StateTaxLevel, Timeframe};

/// Multiplier applied when a table has no entry for a key
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// =============================================================================
// Virtual Currency
// =============================================================================

/// What a viewer pays for one coin (USD)
pub const USD_PER_COIN: f64 = 0.0105;

/// Diamonds credited to the creator per coin gifted
pub const DIAMONDS_PER_COIN: f64 = 0.5;

/// Cash-out value of one diamond (USD)
pub const USD_PER_DIAMOND: f64 = 0.005;

/// Units of local currency per USD. USD itself is the implicit 1.0 fallback.
pub static EXCHANGE_RATES: &[(Currency, f64)] = &[
    (Currency::Eur, 0.92),
    (Currency::Gbp, 0.79),
    (Currency::Cad, 1.36),
    (Currency::Aud, 1.52),
    (Currency::Inr, 83.2),
    (Currency::Jpy, 149.5),
    (Currency::Brl, 4.97),
    (Currency::Mxn, 17.1),
];

// =============================================================================
// RPM Rates (USD per 1,000 views)
// =============================================================================

/// Legacy creator fund payout range
pub const CREATOR_FUND_RPM_MIN: f64 = 0.02;
pub const CREATOR_FUND_RPM_MAX: f64 = 0.04;

/// Creator rewards program payout range (qualified views only)
pub const CREATOR_REWARDS_RPM_MIN: f64 = 0.40;
pub const CREATOR_REWARDS_RPM_MAX: f64 = 1.00;

/// Base ad revenue per 1,000 views before multipliers
pub const AD_BASE_RPM: f64 = 0.50;

/// Spread applied either side of an ad revenue estimate
pub const AD_REVENUE_SPREAD: f64 = 0.25;

/// Revenue factor per number of ads shown in a video (index 0 = one ad)
pub static AD_FREQUENCY_FACTORS: &[f64] = &[1.0, 1.6, 2.0, 2.3, 2.5];

/// Maximum ads per video the ad revenue estimate supports
pub const MAX_AD_FREQUENCY: f64 = 5.0;

// =============================================================================
// Niche Multipliers
// =============================================================================

/// Advertiser demand per niche, applied to RPM-based estimates
pub static NICHE_RPM_MULTIPLIERS: &[(Niche, f64)] = &[
    (Niche::Finance, 2.0),
    (Niche::Business, 1.8),
    (Niche::Technology, 1.6),
    (Niche::Education, 1.4),
    (Niche::Beauty, 1.3),
    (Niche::Fashion, 1.2),
    (Niche::Fitness, 1.2),
    (Niche::Travel, 1.1),
    (Niche::Food, 1.0),
    (Niche::Lifestyle, 1.0),
    (Niche::Gaming, 0.9),
    (Niche::Entertainment, 0.8),
    (Niche::Comedy, 0.7),
];

/// Brand deal premium per niche
pub static NICHE_SPONSOR_MULTIPLIERS: &[(Niche, f64)] = &[
    (Niche::Finance, 1.8),
    (Niche::Business, 1.6),
    (Niche::Technology, 1.5),
    (Niche::Beauty, 1.4),
    (Niche::Fashion, 1.3),
    (Niche::Fitness, 1.3),
    (Niche::Education, 1.2),
    (Niche::Travel, 1.2),
    (Niche::Food, 1.1),
    (Niche::Lifestyle, 1.1),
    (Niche::Gaming, 1.0),
    (Niche::Entertainment, 0.9),
    (Niche::Comedy, 0.9),
];

/// Typical affiliate purchase rate per niche (percent of link clicks)
pub static NICHE_AFFILIATE_CONVERSION: &[(Niche, f64)] = &[
    (Niche::Beauty, 3.0),
    (Niche::Fashion, 2.5),
    (Niche::Fitness, 2.2),
    (Niche::Technology, 2.0),
    (Niche::Food, 1.8),
    (Niche::Lifestyle, 1.8),
    (Niche::Finance, 1.5),
    (Niche::Business, 1.5),
    (Niche::Education, 1.4),
    (Niche::Travel, 1.2),
    (Niche::Gaming, 1.0),
    (Niche::Entertainment, 0.8),
    (Niche::Comedy, 0.6),
];

// =============================================================================
// Engagement & Follower Tiers
// =============================================================================

/// Engagement rate (percent) to rate multiplier, highest threshold first
pub static ENGAGEMENT_MULTIPLIERS: &[(f64, f64)] = &[(10.0, 1.5), (6.0, 1.25), (3.0, 1.0)];

/// Multiplier for engagement below every threshold above
pub const LOW_ENGAGEMENT_MULTIPLIER: f64 = 0.75;

/// Audience band with its sponsorship pricing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBand {
    pub tier: FollowerTier,
    /// Inclusive lower bound
    pub min_followers: f64,
    /// Exclusive upper bound (infinite for the top tier)
    pub max_followers: f64,
    /// Sponsored post price per 1,000 followers (USD)
    pub rate_per_thousand_min: f64,
    pub rate_per_thousand_max: f64,
    /// Brand deals a creator in this band typically closes per month
    pub deals_per_month: f64,
}

pub static FOLLOWER_TIERS: &[TierBand] = &[
    TierBand {
        tier: FollowerTier::Nano,
        min_followers: 1_000.0,
        max_followers: 10_000.0,
        rate_per_thousand_min: 10.0,
        rate_per_thousand_max: 25.0,
        deals_per_month: 0.5,
    },
    TierBand {
        tier: FollowerTier::Micro,
        min_followers: 10_000.0,
        max_followers: 100_000.0,
        rate_per_thousand_min: 8.0,
        rate_per_thousand_max: 20.0,
        deals_per_month: 1.0,
    },
    TierBand {
        tier: FollowerTier::Mid,
        min_followers: 100_000.0,
        max_followers: 500_000.0,
        rate_per_thousand_min: 6.0,
        rate_per_thousand_max: 15.0,
        deals_per_month: 2.0,
    },
    TierBand {
        tier: FollowerTier::Macro,
        min_followers: 500_000.0,
        max_followers: 1_000_000.0,
        rate_per_thousand_min: 5.0,
        rate_per_thousand_max: 12.0,
        deals_per_month: 3.0,
    },
    TierBand {
        tier: FollowerTier::Mega,
        min_followers: 1_000_000.0,
        max_followers: f64::INFINITY,
        rate_per_thousand_min: 4.0,
        rate_per_thousand_max: 10.0,
        deals_per_month: 4.0,
    },
];

// =============================================================================
// Commerce
// =============================================================================

/// Upper bound for shop affiliate commission rates (percent)
pub const MAX_SHOP_COMMISSION_RATE: f64 = 20.0;

/// Marketplace referral fee on each shop sale (percent of selling price)
pub const SHOP_REFERRAL_FEE_PERCENT: f64 = 6.0;

/// Creator share of LIVE subscription revenue
pub const SUBSCRIPTION_CREATOR_SHARE: f64 = 0.5;

/// Share of views that click an affiliate link (percent)
pub const AFFILIATE_CLICK_RATE: f64 = 0.5;

/// Assumed average order value for affiliate estimates (USD)
pub const AFFILIATE_ORDER_VALUE: f64 = 35.0;

/// Assumed affiliate commission for niche estimates (percent)
pub const AFFILIATE_COMMISSION_RATE: f64 = 10.0;

// =============================================================================
// Tax (2024 tax year)
// =============================================================================

pub const TAX_YEAR: i32 = 2024;

/// Marginal bracket: income up to `max` is taxed at `rate` (fraction)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub max: f64,
    pub rate: f64,
}

pub static BRACKETS_SINGLE: &[TaxBracket] = &[
    TaxBracket { max: 11_600.0, rate: 0.10 },
    TaxBracket { max: 47_150.0, rate: 0.12 },
    TaxBracket { max: 100_525.0, rate: 0.22 },
    TaxBracket { max: 191_950.0, rate: 0.24 },
    TaxBracket { max: 243_725.0, rate: 0.32 },
    TaxBracket { max: 609_350.0, rate: 0.35 },
    TaxBracket { max: f64::INFINITY, rate: 0.37 },
];

pub static BRACKETS_MARRIED_JOINT: &[TaxBracket] = &[
    TaxBracket { max: 23_200.0, rate: 0.10 },
    TaxBracket { max: 94_300.0, rate: 0.12 },
    TaxBracket { max: 201_050.0, rate: 0.22 },
    TaxBracket { max: 383_900.0, rate: 0.24 },
    TaxBracket { max: 487_450.0, rate: 0.32 },
    TaxBracket { max: 731_200.0, rate: 0.35 },
    TaxBracket { max: f64::INFINITY, rate: 0.37 },
];

pub static BRACKETS_HEAD_OF_HOUSEHOLD: &[TaxBracket] = &[
    TaxBracket { max: 16_550.0, rate: 0.10 },
    TaxBracket { max: 63_100.0, rate: 0.12 },
    TaxBracket { max: 100_500.0, rate: 0.22 },
    TaxBracket { max: 191_950.0, rate: 0.24 },
    TaxBracket { max: 243_700.0, rate: 0.32 },
    TaxBracket { max: 609_350.0, rate: 0.35 },
    TaxBracket { max: f64::INFINITY, rate: 0.37 },
];

/// Bracket table for a filing status
pub fn federal_brackets(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => BRACKETS_SINGLE,
        FilingStatus::MarriedJoint => BRACKETS_MARRIED_JOINT,
        FilingStatus::HeadOfHousehold => BRACKETS_HEAD_OF_HOUSEHOLD,
    }
}

/// Share of net self-employment income subject to SE tax
pub const SE_INCOME_FACTOR: f64 = 0.9235;

/// Combined social security + medicare rate
pub const SE_TAX_RATE: f64 = 0.153;

/// Social security wage base cap
pub const SE_WAGE_BASE: f64 = 168_600.0;

/// Flat state income tax approximation (fraction of net income)
pub fn state_tax_rate(level: StateTaxLevel) -> f64 {
    match level {
        StateTaxLevel::None => 0.0,
        StateTaxLevel::Low => 0.03,
        StateTaxLevel::Medium => 0.05,
        StateTaxLevel::High => 0.08,
    }
}

// =============================================================================
// Time
// =============================================================================

/// Average days per calendar month
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Length of one timeframe unit in days
pub fn timeframe_days(timeframe: Timeframe) -> f64 {
    match timeframe {
        Timeframe::Days => 1.0,
        Timeframe::Weeks => 7.0,
        Timeframe::Months => DAYS_PER_MONTH,
    }
}

pub const SECONDS_PER_HOUR: f64 = 3_600.0;

// =============================================================================
// Composite Scores
// =============================================================================

/// A sub-score's share of a composite and the raw value that earns the full 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponent {
    pub name: &'static str,
    pub weight: f64,
    pub full_marks_at: f64,
}

/// Viral potential: engagement rate, share rate, completion rate, views per follower
pub static VIRAL_COMPONENTS: [ScoreComponent; 4] = [
    ScoreComponent { name: "engagement", weight: 0.30, full_marks_at: 10.0 },
    ScoreComponent { name: "shares", weight: 0.25, full_marks_at: 1.0 },
    ScoreComponent { name: "completion", weight: 0.30, full_marks_at: 100.0 },
    ScoreComponent { name: "velocity", weight: 0.15, full_marks_at: 5.0 },
];

/// Video performance: views per follower, engagement rate, watch percent, share rate
pub static PERFORMANCE_COMPONENTS: [ScoreComponent; 4] = [
    ScoreComponent { name: "reach", weight: 0.25, full_marks_at: 2.0 },
    ScoreComponent { name: "engagement", weight: 0.30, full_marks_at: 10.0 },
    ScoreComponent { name: "retention", weight: 0.30, full_marks_at: 100.0 },
    ScoreComponent { name: "shareability", weight: 0.15, full_marks_at: 1.0 },
];

// =============================================================================
// Input Bounds
// =============================================================================

pub const MAX_FOLLOWERS: f64 = 1_000_000_000.0;
pub const MAX_VIEWS: f64 = 1_000_000_000.0;
pub const MAX_IMPRESSIONS: f64 = 10_000_000_000.0;
pub const MAX_COINS: f64 = 10_000_000.0;
pub const MAX_DIAMONDS: f64 = 100_000_000.0;

/// Fewer views than this makes RPM-style estimates meaningless
pub const MIN_MONETIZED_VIEWS: f64 = 1_000.0;

/// Longest video length the watch-time calculators accept (seconds)
pub const MAX_VIDEO_SECONDS: f64 = 600.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_weights_sum_to_one() {
        for components in [&VIRAL_COMPONENTS, &PERFORMANCE_COMPONENTS] {
            let total: f64 = components.iter().map(|c| c.weight).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tier_bands_are_contiguous() {
        for pair in FOLLOWER_TIERS.windows(2) {
            assert_eq!(pair[0].max_followers, pair[1].min_followers);
        }
    }

    #[test]
    fn test_brackets_ascending() {
        for status in [FilingStatus::Single, FilingStatus::MarriedJoint, FilingStatus::HeadOfHousehold] {
            let brackets = federal_brackets(status);
            assert!(brackets.windows(2).all(|w| w[0].max < w[1].max && w[0].rate < w[1].rate));
            assert!(brackets.last().is_some_and(|b| b.max.is_infinite()));
        }
    }
}
