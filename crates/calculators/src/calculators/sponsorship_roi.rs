//! Return a brand gets from sponsoring a creator

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_VIEWS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{per_thousand, percent_of, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const COST: NumberField = NumberField::currency("sponsorshipCost", "Sponsorship cost", 1.0, 10_000_000.0);
const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const CLICK_THROUGH: NumberField = NumberField::percent("clickThroughRate", "Click-through rate", 0.0, 100.0);
const CONVERSION_RATE: NumberField = NumberField::percent("conversionRate", "Conversion rate", 0.0, 100.0);
const ORDER_VALUE: NumberField = NumberField::currency("averageOrderValue", "Average order value", 0.0, 100_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "sponsorship-roi",
    name: "Sponsorship ROI Calculator",
    category: Category::Business,
    description: "Estimate the return a brand earns from a sponsored video.",
    fields: &[
        Field::Number(COST),
        Field::Number(VIEWS),
        Field::Number(CLICK_THROUGH),
        Field::Number(CONVERSION_RATE),
        Field::Number(ORDER_VALUE),
    ],
};

static ROI_STEPS: [(f64, Rating); 3] = quality(200.0, 100.0, 0.0);
static ROI_RATING: Ladder<Rating> = Ladder::at_least(&ROI_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipRoiInput {
    pub sponsorship_cost: f64,
    pub views: f64,
    pub click_through_rate: f64,
    pub conversion_rate: f64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipRoiResult {
    pub clicks: f64,
    pub sales: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roi: f64,
    pub effective_cpm: f64,
    pub rating: Rating,
}

pub struct SponsorshipRoi;

impl Calculator for SponsorshipRoi {
    type Input = SponsorshipRoiInput;
    type Output = SponsorshipRoiResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<SponsorshipRoiInput, FieldErrors> {
        let mut check = Checker::new(form);
        let sponsorship_cost = check.number(&COST);
        let views = check.number(&VIEWS);
        let click_through_rate = check.number(&CLICK_THROUGH);
        let conversion_rate = check.number(&CONVERSION_RATE);
        let average_order_value = check.number(&ORDER_VALUE);
        check.finish(|| {
            Some(SponsorshipRoiInput {
                sponsorship_cost: sponsorship_cost?,
                views: views?,
                click_through_rate: click_through_rate?,
                conversion_rate: conversion_rate?,
                average_order_value: average_order_value?,
            })
        })
    }

    fn calculate(input: &SponsorshipRoiInput) -> SponsorshipRoiResult {
        let clicks = input.views * input.click_through_rate / 100.0;
        let sales = clicks * input.conversion_rate / 100.0;
        let revenue = sales * input.average_order_value;
        let profit = revenue - input.sponsorship_cost;
        let roi = round_to(percent_of(profit, input.sponsorship_cost), 2);

        SponsorshipRoiResult {
            clicks: round_to(clicks, 2),
            sales: round_to(sales, 2),
            revenue: round_cents(revenue),
            profit: round_cents(profit),
            roi,
            effective_cpm: round_cents(per_thousand(input.sponsorship_cost, input.views)),
            rating: ROI_RATING.classify(roi),
        }
    }

    fn interpret(input: &SponsorshipRoiInput, result: &SponsorshipRoiResult) -> String {
        let opening = format!(
            "{} views would drive about {} clicks and {} sales worth {}, an ROI of {} on a {} sponsorship (effective CPM {}).",
            format_count(input.views),
            format_count(result.clicks),
            format_count(result.sales),
            format_currency(result.revenue),
            format_percent(result.roi, 1),
            format_currency(input.sponsorship_cost),
            format_currency(result.effective_cpm),
        );
        let verdict = match result.rating {
            Rating::Excellent => "An outstanding deal for the brand, and a strong case for a repeat booking.",
            Rating::Good => "The sponsorship comfortably pays for itself.",
            Rating::Average => "The brand roughly breaks even or makes a small return.",
            Rating::BelowAverage => {
                "On direct sales alone the brand loses money, so the deal rests on awareness value."
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &SponsorshipRoiResult) -> Summary {
        Summary::new(result.roi, Unit::Percent)
            .rated(result.rating)
            .metric("clicks", "Clicks", result.clicks, Unit::Count)
            .metric("sales", "Sales", result.sales, Unit::Count)
            .metric("revenue", "Revenue", result.revenue, Unit::Currency)
            .metric("effectiveCpm", "Effective CPM", result.effective_cpm, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sponsorship_return() {
        let result = SponsorshipRoi::calculate(&SponsorshipRoiInput {
            sponsorship_cost: 2_000.0,
            views: 200_000.0,
            click_through_rate: 2.0,
            conversion_rate: 5.0,
            average_order_value: 60.0,
        });
        assert_eq!(result.clicks, 4_000.0);
        assert_eq!(result.sales, 200.0);
        assert_eq!(result.revenue, 12_000.0);
        assert_eq!(result.roi, 500.0);
        assert_eq!(result.effective_cpm, 10.0);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_no_clicks_is_total_loss() {
        let result = SponsorshipRoi::calculate(&SponsorshipRoiInput {
            sponsorship_cost: 500.0,
            views: 10_000.0,
            click_through_rate: 0.0,
            conversion_rate: 5.0,
            average_order_value: 60.0,
        });
        assert_eq!(result.roi, -100.0);
        assert_eq!(result.rating, Rating::BelowAverage);
    }
}
