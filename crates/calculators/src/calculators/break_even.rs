//! Sales needed to recover ad spend, and what the campaign is likely to make

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{ceil_units, percent_of, ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const AD_SPEND: NumberField = NumberField::currency("adSpend", "Ad spend", 1.0, 10_000_000.0);
const COST_PER_CLICK: NumberField = NumberField::currency("costPerClick", "Cost per click", 0.01, 1_000.0);
const CONVERSION_RATE: NumberField = NumberField::percent("conversionRate", "Conversion rate", 0.01, 100.0);
const PRODUCT_PRICE: NumberField = NumberField::currency("productPrice", "Product price", 0.01, 100_000.0);
const PRODUCT_COST: NumberField = NumberField::currency("productCost", "Product cost", 0.0, 100_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "break-even",
    name: "Break-Even Calculator",
    category: Category::Business,
    description: "Find how many sales an ad budget needs to pay for itself.",
    fields: &[
        Field::Number(AD_SPEND),
        Field::Number(COST_PER_CLICK),
        Field::Number(CONVERSION_RATE),
        Field::Number(PRODUCT_PRICE),
        Field::Number(PRODUCT_COST),
    ],
};

static ROI_STEPS: [(f64, Rating); 3] = quality(100.0, 25.0, 0.0);
static ROI_RATING: Ladder<Rating> = Ladder::at_least(&ROI_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenInput {
    pub ad_spend: f64,
    pub cost_per_click: f64,
    pub conversion_rate: f64,
    pub product_price: f64,
    pub product_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResult {
    pub profit_per_sale: f64,
    /// Whole sales needed to cover the ad spend
    pub break_even_units: f64,
    pub clicks_needed: f64,
    pub expected_clicks: f64,
    pub expected_sales: f64,
    pub expected_profit: f64,
    pub expected_roi: f64,
    pub rating: Rating,
}

pub struct BreakEven;

impl Calculator for BreakEven {
    type Input = BreakEvenInput;
    type Output = BreakEvenResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<BreakEvenInput, FieldErrors> {
        let mut check = Checker::new(form);
        let ad_spend = check.number(&AD_SPEND);
        let cost_per_click = check.number(&COST_PER_CLICK);
        let conversion_rate = check.number(&CONVERSION_RATE);
        let product_price = check.number(&PRODUCT_PRICE);
        let product_cost = check.number(&PRODUCT_COST);
        check.less_than(&PRODUCT_COST, product_cost, product_price, "the product price");
        check.finish(|| {
            Some(BreakEvenInput {
                ad_spend: ad_spend?,
                cost_per_click: cost_per_click?,
                conversion_rate: conversion_rate?,
                product_price: product_price?,
                product_cost: product_cost?,
            })
        })
    }

    fn calculate(input: &BreakEvenInput) -> BreakEvenResult {
        let profit_per_sale = round_cents(input.product_price - input.product_cost);
        let break_even_units = ceil_units(input.ad_spend, profit_per_sale);
        let clicks_needed = ceil_units(break_even_units * 100.0, input.conversion_rate);

        let expected_clicks = ratio(input.ad_spend, input.cost_per_click).floor();
        let expected_sales = expected_clicks * input.conversion_rate / 100.0;
        let expected_profit = expected_sales * profit_per_sale - input.ad_spend;
        let expected_roi = round_to(percent_of(expected_profit, input.ad_spend), 2);

        BreakEvenResult {
            profit_per_sale,
            break_even_units,
            clicks_needed,
            expected_clicks,
            expected_sales: round_to(expected_sales, 2),
            expected_profit: round_cents(expected_profit),
            expected_roi,
            rating: ROI_RATING.classify(expected_roi),
        }
    }

    fn interpret(input: &BreakEvenInput, result: &BreakEvenResult) -> String {
        let opening = format!(
            "At {} profit per sale you need {} sales ({} clicks) to recover {} in ad spend.",
            format_currency(result.profit_per_sale),
            format_count(result.break_even_units),
            format_count(result.clicks_needed),
            format_currency(input.ad_spend),
        );
        let forecast = format!(
            "Your budget buys about {} clicks, which at {} conversion means roughly {} sales and {} profit (ROI {}).",
            format_count(result.expected_clicks),
            format_percent(input.conversion_rate, 2),
            format_count(result.expected_sales.floor()),
            format_currency(result.expected_profit),
            format_percent(result.expected_roi, 1),
        );
        let verdict = match result.rating {
            Rating::Excellent => "The numbers comfortably clear break-even.",
            Rating::Good => "You should clear break-even with room to spare.",
            Rating::Average => "You would just about break even; small changes in CPC or conversion matter a lot.",
            Rating::BelowAverage => {
                "At these rates the campaign would not pay for itself. Lower the CPC, raise the price or improve conversion."
            }
        };
        format!("{opening} {forecast} {verdict}")
    }

    fn summarize(result: &BreakEvenResult) -> Summary {
        Summary::new(result.break_even_units, Unit::Count)
            .rated(result.rating)
            .metric("profitPerSale", "Profit per sale", result.profit_per_sale, Unit::Currency)
            .metric("clicksNeeded", "Clicks needed", result.clicks_needed, Unit::Count)
            .metric("expectedSales", "Expected sales", result.expected_sales, Unit::Count)
            .metric("expectedProfit", "Expected profit", result.expected_profit, Unit::Currency)
            .metric("expectedRoi", "Expected ROI", result.expected_roi, Unit::Percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BreakEvenInput {
        BreakEvenInput {
            ad_spend: 1_000.0,
            cost_per_click: 0.5,
            conversion_rate: 2.0,
            product_price: 50.0,
            product_cost: 20.0,
        }
    }

    #[test]
    fn test_break_even_rounds_units_up() {
        let result = BreakEven::calculate(&input());
        assert_eq!(result.profit_per_sale, 30.0);
        assert_eq!(result.break_even_units, 34.0);
        assert_eq!(result.clicks_needed, 1_700.0);
    }

    #[test]
    fn test_expected_outcome() {
        let result = BreakEven::calculate(&input());
        assert_eq!(result.expected_clicks, 2_000.0);
        assert_eq!(result.expected_sales, 40.0);
        assert_eq!(result.expected_profit, 200.0);
        assert_eq!(result.expected_roi, 20.0);
        assert_eq!(result.rating, Rating::Average);
    }

    #[test]
    fn test_everyday_prices_do_not_overcount() {
        let result = BreakEven::calculate(&BreakEvenInput {
            product_price: 19.99,
            product_cost: 9.99,
            ..input()
        });
        assert_eq!(result.profit_per_sale, 10.0);
        assert_eq!(result.break_even_units, 100.0);

        let result = BreakEven::calculate(&BreakEvenInput {
            ad_spend: 350.0,
            conversion_rate: 0.7,
            product_price: 60.0,
            product_cost: 10.0,
            ..input()
        });
        assert_eq!(result.break_even_units, 7.0);
        assert_eq!(result.clicks_needed, 1_000.0);
    }

    #[test]
    fn test_cost_must_be_below_price() {
        let form = Form::new()
            .with("adSpend", 1_000)
            .with("costPerClick", 0.5)
            .with("conversionRate", 2)
            .with("productPrice", 20)
            .with("productCost", 20);
        let errors = BreakEven::validate(&form).unwrap_err();
        assert_eq!(errors.get("productCost"), Some("Product cost must be less than the product price"));
    }
}
