//! Subscription income with a year of churn

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::SUBSCRIPTION_CREATOR_SHARE;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::round_cents;
use crate::validation::{Checker, FieldErrors, Form};

const SUBSCRIBERS: NumberField = NumberField::count("subscribers", "Subscribers", 1.0, 10_000_000.0);
const MONTHLY_PRICE: NumberField = NumberField::currency("monthlyPrice", "Monthly price", 0.99, 100.0);
const MONTHLY_CHURN: NumberField = NumberField::percent("monthlyChurn", "Monthly churn", 0.0, 100.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "subscription-revenue",
    name: "Subscription Revenue Calculator",
    category: Category::Earnings,
    description: "Estimate subscription income and what a year of churn does to it.",
    fields: &[
        Field::Number(SUBSCRIBERS),
        Field::Number(MONTHLY_PRICE),
        Field::Number(MONTHLY_CHURN),
    ],
};

const PROJECTION_MONTHS: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInput {
    pub subscribers: f64,
    pub monthly_price: f64,
    pub monthly_churn: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResult {
    pub monthly_gross: f64,
    pub monthly_creator: f64,
    /// Creator share over the next 12 months with churn compounding
    pub annual_projection: f64,
    pub subscribers_after_year: f64,
}

pub struct SubscriptionRevenue;

impl Calculator for SubscriptionRevenue {
    type Input = SubscriptionInput;
    type Output = SubscriptionResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<SubscriptionInput, FieldErrors> {
        let mut check = Checker::new(form);
        let subscribers = check.number(&SUBSCRIBERS);
        let monthly_price = check.number(&MONTHLY_PRICE);
        let monthly_churn = check.number(&MONTHLY_CHURN);
        check.finish(|| {
            Some(SubscriptionInput {
                subscribers: subscribers?,
                monthly_price: monthly_price?,
                monthly_churn: monthly_churn?,
            })
        })
    }

    fn calculate(input: &SubscriptionInput) -> SubscriptionResult {
        let monthly_gross = input.subscribers * input.monthly_price;
        let monthly_creator = monthly_gross * SUBSCRIPTION_CREATOR_SHARE;
        let retention = 1.0 - input.monthly_churn / 100.0;

        let annual_projection: f64 = (0..PROJECTION_MONTHS)
            .map(|month| monthly_creator * retention.powi(month))
            .sum();

        SubscriptionResult {
            monthly_gross: round_cents(monthly_gross),
            monthly_creator: round_cents(monthly_creator),
            annual_projection: round_cents(annual_projection),
            subscribers_after_year: (input.subscribers * retention.powi(PROJECTION_MONTHS)).floor(),
        }
    }

    fn interpret(input: &SubscriptionInput, result: &SubscriptionResult) -> String {
        let opening = format!(
            "{} subscribers at {} bring in {} a month, of which you keep {}.",
            format_count(input.subscribers),
            format_currency(input.monthly_price),
            format_currency(result.monthly_gross),
            format_currency(result.monthly_creator),
        );
        if input.monthly_churn == 0.0 {
            return format!(
                "{opening} With no churn that adds up to {} over a year.",
                format_currency(result.annual_projection)
            );
        }
        format!(
            "{opening} At {} monthly churn you would keep about {} subscribers after a year, earning {} in total. Exclusive content and regular LIVEs help reduce churn.",
            format_percent(input.monthly_churn, 1),
            format_count(result.subscribers_after_year),
            format_currency(result.annual_projection),
        )
    }

    fn summarize(result: &SubscriptionResult) -> Summary {
        Summary::new(result.monthly_creator, Unit::Currency)
            .metric("monthlyGross", "Monthly gross", result.monthly_gross, Unit::Currency)
            .metric("annualProjection", "12-month projection", result.annual_projection, Unit::Currency)
            .metric("subscribersAfterYear", "Subscribers after a year", result.subscribers_after_year, Unit::Count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_churn_is_twelve_months() {
        let result = SubscriptionRevenue::calculate(&SubscriptionInput {
            subscribers: 100.0,
            monthly_price: 5.0,
            monthly_churn: 0.0,
        });
        assert_eq!(result.monthly_gross, 500.0);
        assert_eq!(result.monthly_creator, 250.0);
        assert_eq!(result.annual_projection, 3_000.0);
        assert_eq!(result.subscribers_after_year, 100.0);
    }

    #[test]
    fn test_churn_reduces_projection() {
        let result = SubscriptionRevenue::calculate(&SubscriptionInput {
            subscribers: 100.0,
            monthly_price: 5.0,
            monthly_churn: 10.0,
        });
        assert!(result.annual_projection < 3_000.0);
        assert!(result.annual_projection > 250.0);
        assert_eq!(result.subscribers_after_year, 28.0);
    }
}
