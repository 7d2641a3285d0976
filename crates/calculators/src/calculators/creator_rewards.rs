//! Creator rewards program estimate for qualified views

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::{Choice, Niche};
use crate::constants::{CREATOR_REWARDS_RPM_MAX, CREATOR_REWARDS_RPM_MIN, MAX_VIEWS, MIN_MONETIZED_VIEWS, NICHE_RPM_MULTIPLIERS};
use crate::factors::{FactorChain, lookup};
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_count, format_currency};
use crate::math::{round_cents, round_to};
use crate::validation::{Checker, FieldErrors, Form};

const QUALIFIED_VIEWS: NumberField =
    NumberField::count("qualifiedViews", "Qualified views", MIN_MONETIZED_VIEWS, MAX_VIEWS)
        .with_min_hint("Qualified views must be at least 1,000 to estimate rewards");
const NICHE: ChoiceField = ChoiceField::of::<Niche>("niche", "Niche");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "creator-rewards",
    name: "Creator Rewards Program Calculator",
    category: Category::Earnings,
    description: "Estimate creator rewards payouts for qualified views on longer videos.",
    fields: &[Field::Number(QUALIFIED_VIEWS), Field::Choice(NICHE)],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRewardsInput {
    pub qualified_views: f64,
    pub niche: Niche,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRewardsResult {
    pub min: f64,
    pub max: f64,
    pub estimate: f64,
    /// Midpoint RPM after niche adjustment
    pub effective_rpm: f64,
    pub factors: FactorChain,
}

pub struct CreatorRewards;

impl Calculator for CreatorRewards {
    type Input = CreatorRewardsInput;
    type Output = CreatorRewardsResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CreatorRewardsInput, FieldErrors> {
        let mut check = Checker::new(form);
        let qualified_views = check.number(&QUALIFIED_VIEWS);
        let niche = check.choice::<Niche>(&NICHE);
        check.finish(|| {
            Some(CreatorRewardsInput {
                qualified_views: qualified_views?,
                niche: niche?,
            })
        })
    }

    fn calculate(input: &CreatorRewardsInput) -> CreatorRewardsResult {
        let factors = FactorChain::new().then("niche", lookup(NICHE_RPM_MULTIPLIERS, input.niche));
        let thousands = input.qualified_views / 1_000.0;
        let min = factors.apply(thousands * CREATOR_REWARDS_RPM_MIN);
        let max = factors.apply(thousands * CREATOR_REWARDS_RPM_MAX);
        let midpoint_rpm = (CREATOR_REWARDS_RPM_MIN + CREATOR_REWARDS_RPM_MAX) / 2.0;

        CreatorRewardsResult {
            min: round_cents(min),
            max: round_cents(max),
            estimate: round_cents((min + max) / 2.0),
            effective_rpm: round_cents(factors.apply(midpoint_rpm)),
            factors,
        }
    }

    fn interpret(input: &CreatorRewardsInput, result: &CreatorRewardsResult) -> String {
        let niche_note = match result.factors.get("niche") {
            Some(m) if m > 1.0 => format!("{} content attracts above-average advertiser demand.", input.niche.label()),
            Some(m) if m < 1.0 => format!("{} content tends to pay below the average rate.", input.niche.label()),
            _ => format!("{} content pays close to the average rate.", input.niche.label()),
        };
        format!(
            "{} qualified views could earn {} to {}, about {} at an effective RPM of {}. {}",
            format_count(input.qualified_views),
            format_currency(result.min),
            format_currency(result.max),
            format_currency(result.estimate),
            format_currency(result.effective_rpm),
            niche_note,
        )
    }

    fn summarize(result: &CreatorRewardsResult) -> Summary {
        Summary::new(result.estimate, Unit::Currency)
            .range(result.min, result.max)
            .metric("effectiveRpm", "Effective RPM", result.effective_rpm, Unit::Currency)
            .metric(
                "nicheMultiplier",
                "Niche multiplier",
                round_to(result.factors.product(), 2),
                Unit::Multiplier,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finance_niche() {
        let result = CreatorRewards::calculate(&CreatorRewardsInput {
            qualified_views: 1_000_000.0,
            niche: Niche::Finance,
        });
        assert_eq!(result.min, 800.0);
        assert_eq!(result.max, 2_000.0);
        assert_eq!(result.estimate, 1_400.0);
        assert_eq!(result.effective_rpm, 1.4);
    }

    #[test]
    fn test_unconfigured_niche_is_neutral() {
        let result = CreatorRewards::calculate(&CreatorRewardsInput {
            qualified_views: 1_000_000.0,
            niche: Niche::Other,
        });
        assert_eq!(result.factors.product(), 1.0);
        assert_eq!(result.estimate, 700.0);
    }
}
