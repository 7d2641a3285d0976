//! Visitor to customer conversion and the revenue it brings

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_VIEWS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{percent_of, ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VISITORS: NumberField = NumberField::count("visitors", "Visitors", 1.0, MAX_VIEWS);
const CONVERSIONS: NumberField = NumberField::count("conversions", "Conversions", 0.0, MAX_VIEWS);
const ORDER_VALUE: NumberField = NumberField::currency("averageOrderValue", "Average order value", 0.0, 100_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "conversion-rate",
    name: "Conversion Rate Calculator",
    category: Category::Advertising,
    description: "Calculate how many visitors buy and what each visitor is worth.",
    fields: &[
        Field::Number(VISITORS),
        Field::Number(CONVERSIONS),
        Field::Number(ORDER_VALUE),
    ],
};

static RATE_STEPS: [(f64, Rating); 3] = quality(5.0, 3.0, 1.0);
static RATE_RATING: Ladder<Rating> = Ladder::at_least(&RATE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInput {
    pub visitors: f64,
    pub conversions: f64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub conversion_rate: f64,
    pub revenue: f64,
    pub revenue_per_visitor: f64,
    pub rating: Rating,
}

pub struct ConversionRate;

impl Calculator for ConversionRate {
    type Input = ConversionInput;
    type Output = ConversionResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ConversionInput, FieldErrors> {
        let mut check = Checker::new(form);
        let visitors = check.number(&VISITORS);
        let conversions = check.number(&CONVERSIONS);
        let average_order_value = check.number(&ORDER_VALUE);
        check.not_exceeding(&CONVERSIONS, conversions, visitors, "visitors");
        check.finish(|| {
            Some(ConversionInput {
                visitors: visitors?,
                conversions: conversions?,
                average_order_value: average_order_value?,
            })
        })
    }

    fn calculate(input: &ConversionInput) -> ConversionResult {
        let conversion_rate = round_to(percent_of(input.conversions, input.visitors), 2);
        let revenue = input.conversions * input.average_order_value;

        ConversionResult {
            conversion_rate,
            revenue: round_cents(revenue),
            revenue_per_visitor: round_cents(ratio(revenue, input.visitors)),
            rating: RATE_RATING.classify(conversion_rate),
        }
    }

    fn interpret(input: &ConversionInput, result: &ConversionResult) -> String {
        let opening = format!(
            "{} of {} visitors converted ({}), bringing in {} or {} per visitor.",
            format_count(input.conversions),
            format_count(input.visitors),
            format_percent(result.conversion_rate, 2),
            format_currency(result.revenue),
            format_currency(result.revenue_per_visitor),
        );
        let verdict = match result.rating {
            Rating::Excellent => "That is an outstanding conversion rate.",
            Rating::Good => "That is a strong conversion rate for creator-driven traffic.",
            Rating::Average => "That is a typical rate. Social proof and a simpler checkout can lift it.",
            Rating::BelowAverage => "Few visitors buy. Check that the landing page matches what the video promised.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &ConversionResult) -> Summary {
        Summary::new(result.conversion_rate, Unit::Percent)
            .rated(result.rating)
            .metric("revenue", "Revenue", result.revenue, Unit::Currency)
            .metric("revenuePerVisitor", "Revenue per visitor", result.revenue_per_visitor, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        let result = ConversionRate::calculate(&ConversionInput {
            visitors: 5_000.0,
            conversions: 150.0,
            average_order_value: 40.0,
        });
        assert_eq!(result.conversion_rate, 3.0);
        assert_eq!(result.revenue, 6_000.0);
        assert_eq!(result.revenue_per_visitor, 1.2);
        assert_eq!(result.rating, Rating::Good);
    }
}
