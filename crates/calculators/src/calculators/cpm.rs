//! Cost per 1,000 impressions

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_IMPRESSIONS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency};
use crate::math::{per_thousand, ratio, round_cents};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const AD_SPEND: NumberField = NumberField::currency("adSpend", "Ad spend", 0.01, 10_000_000.0);
const IMPRESSIONS: NumberField = NumberField::count("impressions", "Impressions", 1.0, MAX_IMPRESSIONS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "cpm",
    name: "CPM Calculator",
    category: Category::Advertising,
    description: "Calculate the cost per 1,000 impressions of an ad campaign.",
    fields: &[Field::Number(AD_SPEND), Field::Number(IMPRESSIONS)],
};

// Lower is better
static COST_STEPS: [(f64, Rating); 3] = quality(4.0, 8.0, 12.0);
static COST_RATING: Ladder<Rating> = Ladder::at_most(&COST_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpmInput {
    pub ad_spend: f64,
    pub impressions: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpmResult {
    pub cpm: f64,
    pub impressions_per_dollar: f64,
    pub rating: Rating,
}

pub struct Cpm;

impl Calculator for Cpm {
    type Input = CpmInput;
    type Output = CpmResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CpmInput, FieldErrors> {
        let mut check = Checker::new(form);
        let ad_spend = check.number(&AD_SPEND);
        let impressions = check.number(&IMPRESSIONS);
        check.finish(|| {
            Some(CpmInput {
                ad_spend: ad_spend?,
                impressions: impressions?,
            })
        })
    }

    fn calculate(input: &CpmInput) -> CpmResult {
        let cpm = round_cents(per_thousand(input.ad_spend, input.impressions));

        CpmResult {
            cpm,
            impressions_per_dollar: ratio(input.impressions, input.ad_spend).floor(),
            rating: COST_RATING.classify(cpm),
        }
    }

    fn interpret(input: &CpmInput, result: &CpmResult) -> String {
        let opening = format!(
            "Spending {} for {} impressions is a CPM of {}.",
            format_currency(input.ad_spend),
            format_count(input.impressions),
            format_currency(result.cpm),
        );
        let verdict = match result.rating {
            Rating::Excellent => "That is very cheap reach for short-form video ads.",
            Rating::Good => "That is a competitive CPM.",
            Rating::Average => "That is around the typical range; tighter targeting or fresher creative can bring it down.",
            Rating::BelowAverage => "That is expensive reach. Check audience overlap and refresh tired creative.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &CpmResult) -> Summary {
        Summary::new(result.cpm, Unit::Currency).rated(result.rating).metric(
            "impressionsPerDollar",
            "Impressions per dollar",
            result.impressions_per_dollar,
            Unit::Count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpm_lower_is_better() {
        let cheap = Cpm::calculate(&CpmInput {
            ad_spend: 300.0,
            impressions: 100_000.0,
        });
        assert_eq!(cheap.cpm, 3.0);
        assert_eq!(cheap.rating, Rating::Excellent);

        let pricey = Cpm::calculate(&CpmInput {
            ad_spend: 1_500.0,
            impressions: 100_000.0,
        });
        assert_eq!(pricey.cpm, 15.0);
        assert_eq!(pricey.rating, Rating::BelowAverage);
    }
}
