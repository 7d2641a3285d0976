//! Creator fund payout range for a view count

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{CREATOR_FUND_RPM_MAX, CREATOR_FUND_RPM_MIN, MAX_VIEWS, MIN_MONETIZED_VIEWS};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency};
use crate::math::round_cents;
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", MIN_MONETIZED_VIEWS, MAX_VIEWS)
    .with_min_hint("Views must be at least 1,000 to estimate creator fund earnings");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "creator-fund",
    name: "Creator Fund Calculator",
    category: Category::Earnings,
    description: "Estimate creator fund earnings from video views.",
    fields: &[Field::Number(VIEWS)],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorFundInput {
    pub views: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorFundResult {
    pub min: f64,
    pub max: f64,
    pub estimate: f64,
}

pub struct CreatorFund;

impl Calculator for CreatorFund {
    type Input = CreatorFundInput;
    type Output = CreatorFundResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CreatorFundInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        check.finish(|| Some(CreatorFundInput { views: views? }))
    }

    fn calculate(input: &CreatorFundInput) -> CreatorFundResult {
        let thousands = input.views / 1_000.0;
        let min = thousands * CREATOR_FUND_RPM_MIN;
        let max = thousands * CREATOR_FUND_RPM_MAX;

        CreatorFundResult {
            min: round_cents(min),
            max: round_cents(max),
            estimate: round_cents((min + max) / 2.0),
        }
    }

    fn interpret(input: &CreatorFundInput, result: &CreatorFundResult) -> String {
        let range = format!(
            "{} views would typically pay between {} and {}, around {} on average.",
            format_count(input.views),
            format_currency(result.min),
            format_currency(result.max),
            format_currency(result.estimate),
        );
        if result.estimate < 1.0 {
            format!("{range} At creator fund rates, views alone pay very little; brand deals and LIVE gifts usually matter more.")
        } else {
            format!("{range} Actual payouts swing with audience location, watch time and season.")
        }
    }

    fn summarize(result: &CreatorFundResult) -> Summary {
        Summary::new(result.estimate, Unit::Currency).range(result.min, result.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_million_views() {
        let result = CreatorFund::calculate(&CreatorFundInput { views: 1_000_000.0 });
        assert_eq!(result.min, 20.0);
        assert_eq!(result.max, 40.0);
        assert_eq!(result.estimate, 30.0);
    }

    #[test]
    fn test_minimum_views_hint() {
        let errors = CreatorFund::validate(&Form::new().with("views", 999)).unwrap_err();
        assert_eq!(errors.get("views"), Some("Views must be at least 1,000 to estimate creator fund earnings"));
    }
}
