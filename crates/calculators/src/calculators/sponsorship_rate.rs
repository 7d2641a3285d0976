//! Sponsored post pricing from audience size, engagement and niche

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::{Choice, FollowerTier, Niche};
use crate::constants::{MAX_FOLLOWERS, NICHE_SPONSOR_MULTIPLIERS, TierBand};
use crate::factors::{FactorChain, engagement_multiplier, lookup, tier_band};
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_compact, format_currency, format_percent};
use crate::math::{round_cents, round_to};
use crate::validation::{Checker, FieldErrors, Form};

const FOLLOWERS: NumberField = NumberField::count("followers", "Followers", 1_000.0, MAX_FOLLOWERS)
    .with_min_hint("Followers must be at least 1,000 to price brand deals");
const ENGAGEMENT_RATE: NumberField = NumberField::percent("engagementRate", "Engagement rate", 0.01, 100.0);
const NICHE: ChoiceField = ChoiceField::of::<Niche>("niche", "Niche");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "sponsorship-rate",
    name: "Sponsorship Rate Calculator",
    category: Category::Earnings,
    description: "Find out what to charge brands for a sponsored post.",
    fields: &[
        Field::Number(FOLLOWERS),
        Field::Number(ENGAGEMENT_RATE),
        Field::Choice(NICHE),
    ],
};

/// Sponsored post price range for one audience
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRate {
    pub tier: FollowerTier,
    pub min: f64,
    pub max: f64,
    pub factors: FactorChain,
    #[serde(skip)]
    pub band: &'static TierBand,
}

impl PostRate {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Unrounded post price range: tier band rate x niche premium x engagement
pub(crate) fn post_rate(followers: f64, engagement_rate: f64, niche: Niche) -> PostRate {
    let band = tier_band(followers);
    let factors = FactorChain::new()
        .then("niche", lookup(NICHE_SPONSOR_MULTIPLIERS, niche))
        .then("engagement", engagement_multiplier(engagement_rate));
    let thousands = followers / 1_000.0;

    PostRate {
        tier: band.tier,
        min: factors.apply(thousands * band.rate_per_thousand_min),
        max: factors.apply(thousands * band.rate_per_thousand_max),
        factors,
        band,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipInput {
    pub followers: f64,
    pub engagement_rate: f64,
    pub niche: Niche,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipResult {
    pub tier: FollowerTier,
    pub min: f64,
    pub max: f64,
    pub suggested: f64,
    pub factors: FactorChain,
}

pub struct SponsorshipRate;

impl Calculator for SponsorshipRate {
    type Input = SponsorshipInput;
    type Output = SponsorshipResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<SponsorshipInput, FieldErrors> {
        let mut check = Checker::new(form);
        let followers = check.number(&FOLLOWERS);
        let engagement_rate = check.number(&ENGAGEMENT_RATE);
        let niche = check.choice::<Niche>(&NICHE);
        check.finish(|| {
            Some(SponsorshipInput {
                followers: followers?,
                engagement_rate: engagement_rate?,
                niche: niche?,
            })
        })
    }

    fn calculate(input: &SponsorshipInput) -> SponsorshipResult {
        let rate = post_rate(input.followers, input.engagement_rate, input.niche);

        SponsorshipResult {
            tier: rate.tier,
            min: round_cents(rate.min),
            max: round_cents(rate.max),
            suggested: round_cents(rate.midpoint()),
            factors: rate.factors,
        }
    }

    fn interpret(input: &SponsorshipInput, result: &SponsorshipResult) -> String {
        let opening = format!(
            "As a {} with {} followers in {}, a sponsored post is worth roughly {} to {}. Quote around {}.",
            result.tier.label().to_lowercase(),
            format_compact(input.followers),
            input.niche.label().to_lowercase(),
            format_currency(result.min),
            format_currency(result.max),
            format_currency(result.suggested),
        );
        let engagement = format_percent(input.engagement_rate, 1);
        let note = match result.factors.get("engagement") {
            Some(m) if m > 1.0 => format!("Your {engagement} engagement earns a premium; mention it in your media kit."),
            Some(m) if m < 1.0 => format!("At {engagement} engagement brands may push back on price; lifting engagement raises your rate."),
            _ => format!("Your {engagement} engagement is in the normal range."),
        };
        format!("{opening} {note}")
    }

    fn summarize(result: &SponsorshipResult) -> Summary {
        let mut summary = Summary::new(result.suggested, Unit::Currency)
            .range(result.min, result.max)
            .rated(result.tier);
        for factor in result.factors.factors() {
            let label = if factor.name == "niche" { "Niche premium" } else { "Engagement multiplier" };
            summary = summary.metric(factor.name, label, round_to(factor.value, 2), Unit::Multiplier);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_fitness_creator() {
        let result = SponsorshipRate::calculate(&SponsorshipInput {
            followers: 50_000.0,
            engagement_rate: 6.0,
            niche: Niche::Fitness,
        });
        assert_eq!(result.tier, FollowerTier::Micro);
        assert_eq!(result.min, 650.0);
        assert_eq!(result.max, 1_625.0);
        assert_eq!(result.suggested, 1_137.5);
    }

    #[test]
    fn test_summary_tag_is_tier() {
        let summary = SponsorshipRate::run(&SponsorshipInput {
            followers: 2_000_000.0,
            engagement_rate: 2.0,
            niche: Niche::Comedy,
        });
        assert_eq!(summary.rating, Some("mega"));
        assert_eq!(summary.metric_value("engagement"), Some(0.75));
    }

    #[test]
    fn test_below_minimum_followers() {
        let form = Form::new().with("followers", 500).with("engagementRate", 5).with("niche", "food");
        let errors = SponsorshipRate::validate(&form).unwrap_err();
        assert!(errors.contains("followers"));
    }
}
