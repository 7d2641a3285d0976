//! Revenue per 1,000 views from actual earnings

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{MAX_VIEWS, MIN_MONETIZED_VIEWS};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency};
use crate::math::{per_thousand, round_cents};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", MIN_MONETIZED_VIEWS, MAX_VIEWS)
    .with_min_hint("Views must be at least 1,000 for an accurate RPM");
const EARNINGS: NumberField = NumberField::currency("earnings", "Earnings", 0.0, 10_000_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "rpm",
    name: "RPM Calculator",
    category: Category::Earnings,
    description: "Work out your revenue per 1,000 views and how it compares.",
    fields: &[Field::Number(VIEWS), Field::Number(EARNINGS)],
};

static BENCHMARK_STEPS: [(f64, Rating); 3] = quality(0.5, 0.05, 0.02);
static BENCHMARK: Ladder<Rating> = Ladder::at_least(&BENCHMARK_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpmInput {
    pub views: f64,
    pub earnings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpmResult {
    pub rpm: f64,
    pub earnings_per_million: f64,
    pub benchmark: Rating,
}

pub struct Rpm;

impl Calculator for Rpm {
    type Input = RpmInput;
    type Output = RpmResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<RpmInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let earnings = check.number(&EARNINGS);
        check.finish(|| {
            Some(RpmInput {
                views: views?,
                earnings: earnings?,
            })
        })
    }

    fn calculate(input: &RpmInput) -> RpmResult {
        let rpm = per_thousand(input.earnings, input.views);
        let rounded = round_cents(rpm);

        RpmResult {
            rpm: rounded,
            earnings_per_million: round_cents(rpm * 1_000.0),
            benchmark: BENCHMARK.classify(rounded),
        }
    }

    fn interpret(input: &RpmInput, result: &RpmResult) -> String {
        let opening = format!(
            "You earned {} from {} views, an RPM of {}.",
            format_currency(input.earnings),
            format_count(input.views),
            format_currency(result.rpm),
        );
        let verdict = match result.benchmark {
            Rating::Excellent => "That is in line with the creator rewards program for long-form, high-retention content.",
            Rating::Good => "That beats typical creator fund rates; keep leaning into longer videos.",
            Rating::Average => "That is typical of creator fund payouts, which sit around $0.02 to $0.04.",
            Rating::BelowAverage => {
                "That is below the usual range. Views from low-paying regions or short watch times often drag RPM down."
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &RpmResult) -> Summary {
        Summary::new(result.rpm, Unit::Currency).rated(result.benchmark).metric(
            "earningsPerMillion",
            "Per million views",
            result.earnings_per_million,
            Unit::Currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_fund_rpm() {
        let result = Rpm::calculate(&RpmInput {
            views: 100_000.0,
            earnings: 3.0,
        });
        assert_eq!(result.rpm, 0.03);
        assert_eq!(result.benchmark, Rating::Average);
        assert_eq!(result.earnings_per_million, 30.0);
    }

    #[test]
    fn test_zero_earnings_is_valid() {
        let form = Form::new().with("views", 5_000).with("earnings", 0);
        let input = Rpm::validate(&form).unwrap();
        assert_eq!(Rpm::calculate(&input).rpm, 0.0);
    }

    #[test]
    fn test_rating_monotonic_in_earnings() {
        let mut previous = Rating::BelowAverage;
        for earnings in [0.0, 1.0, 2.0, 5.0, 10.0, 60.0, 500.0] {
            let rating = Rpm::calculate(&RpmInput { views: 100_000.0, earnings }).benchmark;
            assert!(rating >= previous);
            previous = rating;
        }
    }
}
