//! Affiliate link earnings from clicks

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_number};
use crate::math::{ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const CLICKS: NumberField = NumberField::count("clicks", "Link clicks", 1.0, 100_000_000.0);
const CONVERSION_RATE: NumberField = NumberField::percent("conversionRate", "Conversion rate", 0.01, 100.0);
const ORDER_VALUE: NumberField = NumberField::currency("averageOrderValue", "Average order value", 0.01, 100_000.0);
const COMMISSION_RATE: NumberField = NumberField::percent("commissionRate", "Commission rate", 0.1, 100.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "affiliate-earnings",
    name: "Affiliate Earnings Calculator",
    category: Category::Earnings,
    description: "Project affiliate income from link clicks, conversion and commission.",
    fields: &[
        Field::Number(CLICKS),
        Field::Number(CONVERSION_RATE),
        Field::Number(ORDER_VALUE),
        Field::Number(COMMISSION_RATE),
    ],
};

static EPC_STEPS: [(f64, Rating); 3] = quality(1.0, 0.5, 0.1);
static EPC_RATING: Ladder<Rating> = Ladder::at_least(&EPC_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateInput {
    pub clicks: f64,
    pub conversion_rate: f64,
    pub average_order_value: f64,
    pub commission_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateResult {
    pub sales: f64,
    pub revenue: f64,
    pub earnings: f64,
    pub earnings_per_click: f64,
    pub rating: Rating,
}

pub struct AffiliateEarnings;

impl Calculator for AffiliateEarnings {
    type Input = AffiliateInput;
    type Output = AffiliateResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<AffiliateInput, FieldErrors> {
        let mut check = Checker::new(form);
        let clicks = check.number(&CLICKS);
        let conversion_rate = check.number(&CONVERSION_RATE);
        let average_order_value = check.number(&ORDER_VALUE);
        let commission_rate = check.number(&COMMISSION_RATE);
        check.finish(|| {
            Some(AffiliateInput {
                clicks: clicks?,
                conversion_rate: conversion_rate?,
                average_order_value: average_order_value?,
                commission_rate: commission_rate?,
            })
        })
    }

    fn calculate(input: &AffiliateInput) -> AffiliateResult {
        let sales = input.clicks * input.conversion_rate / 100.0;
        let revenue = sales * input.average_order_value;
        let earnings = revenue * input.commission_rate / 100.0;
        let earnings_per_click = round_cents(ratio(earnings, input.clicks));

        AffiliateResult {
            sales: round_to(sales, 2),
            revenue: round_cents(revenue),
            earnings: round_cents(earnings),
            earnings_per_click,
            rating: EPC_RATING.classify(earnings_per_click),
        }
    }

    fn interpret(input: &AffiliateInput, result: &AffiliateResult) -> String {
        let opening = format!(
            "{} clicks converting into about {} sales would earn {} ({} per click).",
            format_count(input.clicks),
            format_number(result.sales, 0),
            format_currency(result.earnings),
            format_currency(result.earnings_per_click),
        );
        let verdict = match result.rating {
            Rating::Excellent => "That earnings per click is excellent; this offer is worth featuring often.",
            Rating::Good => "That is a healthy earnings per click for creator affiliate links.",
            Rating::Average => "That is a typical result. Stronger calls to action can lift conversion.",
            Rating::BelowAverage => "Each click earns little. Try higher-priced products or better-converting offers.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &AffiliateResult) -> Summary {
        Summary::new(result.earnings, Unit::Currency)
            .rated(result.rating)
            .metric("sales", "Sales", result.sales, Unit::Count)
            .metric("revenue", "Revenue generated", result.revenue, Unit::Currency)
            .metric("earningsPerClick", "Earnings per click", result.earnings_per_click, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affiliate_pipeline() {
        let result = AffiliateEarnings::calculate(&AffiliateInput {
            clicks: 1_000.0,
            conversion_rate: 2.0,
            average_order_value: 50.0,
            commission_rate: 10.0,
        });
        assert_eq!(result.sales, 20.0);
        assert_eq!(result.revenue, 1_000.0);
        assert_eq!(result.earnings, 100.0);
        assert_eq!(result.earnings_per_click, 0.1);
        assert_eq!(result.rating, Rating::Average);
    }
}
