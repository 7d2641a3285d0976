//! In-feed ad revenue estimate with niche, engagement and frequency factors

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::{Choice, Niche};
use crate::constants::{
    AD_BASE_RPM, AD_FREQUENCY_FACTORS, AD_REVENUE_SPREAD, MAX_AD_FREQUENCY, MAX_VIEWS, MIN_MONETIZED_VIEWS,
    NICHE_RPM_MULTIPLIERS,
};
use crate::factors::{FactorChain, engagement_multiplier, lookup};
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_number};
use crate::math::{round_cents, round_to};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", MIN_MONETIZED_VIEWS, MAX_VIEWS)
    .with_min_hint("Views must be at least 1,000 to estimate ad revenue");
const NICHE: ChoiceField = ChoiceField::of::<Niche>("niche", "Niche");
const AD_FREQUENCY: NumberField = NumberField::count("adFrequency", "Ads per video", 1.0, MAX_AD_FREQUENCY);
const ENGAGEMENT_RATE: NumberField = NumberField::percent("engagementRate", "Engagement rate", 0.0, 100.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "ad-revenue",
    name: "Ad Revenue Calculator",
    category: Category::Earnings,
    description: "Estimate ad revenue from views, niche, engagement and ad frequency.",
    fields: &[
        Field::Number(VIEWS),
        Field::Choice(NICHE),
        Field::Number(AD_FREQUENCY),
        Field::Number(ENGAGEMENT_RATE),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRevenueInput {
    pub views: f64,
    pub niche: Niche,
    pub ad_frequency: f64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRevenueResult {
    pub estimate: f64,
    pub min: f64,
    pub max: f64,
    pub effective_rpm: f64,
    pub factors: FactorChain,
}

/// Revenue factor for a number of ads per video
fn frequency_factor(ad_frequency: f64) -> f64 {
    let index = (ad_frequency.round().max(1.0) as usize).min(AD_FREQUENCY_FACTORS.len()) - 1;
    AD_FREQUENCY_FACTORS[index]
}

pub struct AdRevenue;

impl Calculator for AdRevenue {
    type Input = AdRevenueInput;
    type Output = AdRevenueResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<AdRevenueInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let niche = check.choice::<Niche>(&NICHE);
        let ad_frequency = check.number(&AD_FREQUENCY);
        let engagement_rate = check.number(&ENGAGEMENT_RATE);
        check.finish(|| {
            Some(AdRevenueInput {
                views: views?,
                niche: niche?,
                ad_frequency: ad_frequency?,
                engagement_rate: engagement_rate?,
            })
        })
    }

    fn calculate(input: &AdRevenueInput) -> AdRevenueResult {
        let factors = FactorChain::new()
            .then("niche", lookup(NICHE_RPM_MULTIPLIERS, input.niche))
            .then("engagement", engagement_multiplier(input.engagement_rate))
            .then("frequency", frequency_factor(input.ad_frequency));
        let estimate = factors.apply(input.views / 1_000.0 * AD_BASE_RPM);

        AdRevenueResult {
            estimate: round_cents(estimate),
            min: round_cents(estimate * (1.0 - AD_REVENUE_SPREAD)),
            max: round_cents(estimate * (1.0 + AD_REVENUE_SPREAD)),
            effective_rpm: round_cents(factors.apply(AD_BASE_RPM)),
            factors,
        }
    }

    fn interpret(input: &AdRevenueInput, result: &AdRevenueResult) -> String {
        let mut text = format!(
            "{} views of {} content with {} ad(s) per video could earn about {} (likely between {} and {}).",
            format_count(input.views),
            input.niche.label().to_lowercase(),
            format_number(input.ad_frequency, 0),
            format_currency(result.estimate),
            format_currency(result.min),
            format_currency(result.max),
        );
        if result.factors.get("engagement").is_some_and(|m| m < 1.0) {
            text.push_str(" Low engagement is holding the estimate back; advertisers pay more for attentive audiences.");
        } else if input.ad_frequency >= 4.0 {
            text.push_str(" Extra ads add less each time and can hurt watch time, so test carefully.");
        }
        text
    }

    fn summarize(result: &AdRevenueResult) -> Summary {
        let mut summary = Summary::new(result.estimate, Unit::Currency)
            .range(result.min, result.max)
            .metric("effectiveRpm", "Effective RPM", result.effective_rpm, Unit::Currency);
        for factor in result.factors.factors() {
            summary = summary.metric(factor.name, factor_label(factor.name), round_to(factor.value, 2), Unit::Multiplier);
        }
        summary
    }
}

fn factor_label(name: &str) -> &'static str {
    match name {
        "niche" => "Niche multiplier",
        "engagement" => "Engagement multiplier",
        _ => "Ad frequency factor",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_pipeline() {
        let result = AdRevenue::calculate(&AdRevenueInput {
            views: 1_000_000.0,
            niche: Niche::Technology,
            ad_frequency: 2.0,
            engagement_rate: 6.0,
        });
        assert_eq!(result.factors.get("niche"), Some(1.6));
        assert_eq!(result.factors.get("engagement"), Some(1.25));
        assert_eq!(result.factors.get("frequency"), Some(1.6));
        assert_eq!(result.estimate, 1_600.0);
        assert_eq!(result.min, 1_200.0);
        assert_eq!(result.max, 2_000.0);
    }

    #[test]
    fn test_frequency_above_five_rejected() {
        let form = Form::new()
            .with("views", 10_000)
            .with("niche", "food")
            .with("adFrequency", 6)
            .with("engagementRate", 4);
        let errors = AdRevenue::validate(&form).unwrap_err();
        assert_eq!(errors.get("adFrequency"), Some("Ads per video cannot exceed 5"));
    }

    #[test]
    fn test_frequency_factor_bounds() {
        assert_eq!(frequency_factor(1.0), 1.0);
        assert_eq!(frequency_factor(5.0), 2.5);
        assert_eq!(frequency_factor(0.2), 1.0);
    }
}
