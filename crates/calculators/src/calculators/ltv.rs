//! Customer lifetime value against acquisition cost

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_currency, format_number};
use crate::math::{ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const ORDER_VALUE: NumberField = NumberField::currency("averageOrderValue", "Average order value", 0.01, 100_000.0);
const PURCHASES: NumberField = NumberField::count("purchasesPerYear", "Purchases per year", 0.1, 365.0)
    .with_min_hint("Purchases per year must be at least 0.1");
const LIFESPAN: NumberField = NumberField::count("customerLifespanYears", "Customer lifespan (years)", 0.1, 50.0)
    .with_min_hint("Customer lifespan must be at least 0.1 years");
const GROSS_MARGIN: NumberField = NumberField::percent("grossMargin", "Gross margin", 1.0, 100.0);
const CAC: NumberField = NumberField::currency("cac", "Customer acquisition cost", 0.01, 1_000_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "ltv",
    name: "Customer Lifetime Value Calculator",
    category: Category::Business,
    description: "Estimate what a customer is worth over their lifetime and compare it to CAC.",
    fields: &[
        Field::Number(ORDER_VALUE),
        Field::Number(PURCHASES),
        Field::Number(LIFESPAN),
        Field::Number(GROSS_MARGIN),
        Field::Number(CAC),
    ],
};

static RATIO_STEPS: [(f64, Rating); 3] = quality(3.0, 2.0, 1.0);
static RATIO_RATING: Ladder<Rating> = Ladder::at_least(&RATIO_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LtvInput {
    pub average_order_value: f64,
    pub purchases_per_year: f64,
    pub customer_lifespan_years: f64,
    pub gross_margin: f64,
    pub cac: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LtvResult {
    pub annual_value: f64,
    pub ltv: f64,
    pub ltv_to_cac: f64,
    pub rating: Rating,
}

pub struct Ltv;

impl Calculator for Ltv {
    type Input = LtvInput;
    type Output = LtvResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<LtvInput, FieldErrors> {
        let mut check = Checker::new(form);
        let average_order_value = check.number(&ORDER_VALUE);
        let purchases_per_year = check.number(&PURCHASES);
        let customer_lifespan_years = check.number(&LIFESPAN);
        let gross_margin = check.number(&GROSS_MARGIN);
        let cac = check.number(&CAC);
        check.finish(|| {
            Some(LtvInput {
                average_order_value: average_order_value?,
                purchases_per_year: purchases_per_year?,
                customer_lifespan_years: customer_lifespan_years?,
                gross_margin: gross_margin?,
                cac: cac?,
            })
        })
    }

    fn calculate(input: &LtvInput) -> LtvResult {
        let annual_value = input.average_order_value * input.purchases_per_year * input.gross_margin / 100.0;
        let ltv = round_cents(annual_value * input.customer_lifespan_years);
        let ltv_to_cac = round_to(ratio(ltv, input.cac), 2);

        LtvResult {
            annual_value: round_cents(annual_value),
            ltv,
            ltv_to_cac,
            rating: RATIO_RATING.classify(ltv_to_cac),
        }
    }

    fn interpret(input: &LtvInput, result: &LtvResult) -> String {
        let opening = format!(
            "A customer brings in {} of gross profit a year and {} over their lifetime, {}x the {} it costs to win them.",
            format_currency(result.annual_value),
            format_currency(result.ltv),
            format_number(result.ltv_to_cac, 2),
            format_currency(input.cac),
        );
        let verdict = match result.rating {
            Rating::Excellent => "An LTV:CAC of 3 or more leaves plenty of room to invest in growth.",
            Rating::Good => "A healthy ratio. Longer retention would push it higher.",
            Rating::Average => "Customers only just repay their acquisition cost.",
            Rating::BelowAverage => "You spend more to win a customer than they are worth. Cut CAC or raise repeat purchases.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &LtvResult) -> Summary {
        Summary::new(result.ltv, Unit::Currency)
            .rated(result.rating)
            .metric("ltvToCac", "LTV to CAC", result.ltv_to_cac, Unit::Ratio)
            .metric("annualValue", "Annual value", result.annual_value, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_value() {
        let result = Ltv::calculate(&LtvInput {
            average_order_value: 50.0,
            purchases_per_year: 4.0,
            customer_lifespan_years: 3.0,
            gross_margin: 60.0,
            cac: 100.0,
        });
        assert_eq!(result.annual_value, 120.0);
        assert_eq!(result.ltv, 360.0);
        assert_eq!(result.ltv_to_cac, 3.6);
        assert_eq!(result.rating, Rating::Excellent);
    }
}
