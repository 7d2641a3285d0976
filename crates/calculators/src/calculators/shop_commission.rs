//! Affiliate commission on shop product sales

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_SHOP_COMMISSION_RATE;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{percent_of, ratio, round_cents};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const PRODUCT_PRICE: NumberField = NumberField::currency("productPrice", "Product price", 0.01, 100_000.0);
const UNITS_SOLD: NumberField = NumberField::count("unitsSold", "Units sold", 1.0, 10_000_000.0);
const COMMISSION_RATE: NumberField =
    NumberField::percent("commissionRate", "Commission rate", 1.0, MAX_SHOP_COMMISSION_RATE);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "shop-commission",
    name: "Shop Commission Calculator",
    category: Category::Earnings,
    description: "Calculate affiliate commission earned from shop product sales.",
    fields: &[
        Field::Number(PRODUCT_PRICE),
        Field::Number(UNITS_SOLD),
        Field::Number(COMMISSION_RATE),
    ],
};

static RATE_STEPS: [(f64, Rating); 3] = quality(15.0, 10.0, 5.0);
static RATE_RATING: Ladder<Rating> = Ladder::at_least(&RATE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopCommissionInput {
    pub product_price: f64,
    pub units_sold: f64,
    pub commission_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopCommissionResult {
    pub gross_sales: f64,
    pub commission: f64,
    pub commission_per_unit: f64,
    pub rating: Rating,
}

pub struct ShopCommission;

impl Calculator for ShopCommission {
    type Input = ShopCommissionInput;
    type Output = ShopCommissionResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ShopCommissionInput, FieldErrors> {
        let mut check = Checker::new(form);
        let product_price = check.number(&PRODUCT_PRICE);
        let units_sold = check.number(&UNITS_SOLD);
        let commission_rate = check.number(&COMMISSION_RATE);
        check.finish(|| {
            Some(ShopCommissionInput {
                product_price: product_price?,
                units_sold: units_sold?,
                commission_rate: commission_rate?,
            })
        })
    }

    fn calculate(input: &ShopCommissionInput) -> ShopCommissionResult {
        let gross_sales = input.product_price * input.units_sold;
        let commission = gross_sales * input.commission_rate / 100.0;

        ShopCommissionResult {
            gross_sales: round_cents(gross_sales),
            commission: round_cents(commission),
            commission_per_unit: round_cents(ratio(commission, input.units_sold)),
            rating: RATE_RATING.classify(input.commission_rate),
        }
    }

    fn interpret(input: &ShopCommissionInput, result: &ShopCommissionResult) -> String {
        let opening = format!(
            "Selling {} units at {} generates {} in sales and {} in commission ({} per unit).",
            format_count(input.units_sold),
            format_currency(input.product_price),
            format_currency(result.gross_sales),
            format_currency(result.commission),
            format_currency(result.commission_per_unit),
        );
        let rate = format_percent(input.commission_rate, 1);
        let verdict = match result.rating {
            Rating::Excellent => format!("A {rate} commission is near the top of what shop sellers offer."),
            Rating::Good => format!("A {rate} commission is a solid rate for most categories."),
            Rating::Average => format!("A {rate} commission is typical; higher-margin products often pay more."),
            Rating::BelowAverage => {
                format!("A {rate} commission is low. Ask the seller for a better rate or look for similar products.")
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &ShopCommissionResult) -> Summary {
        Summary::new(result.commission, Unit::Currency)
            .rated(result.rating)
            .metric("grossSales", "Gross sales", result.gross_sales, Unit::Currency)
            .metric("commissionPerUnit", "Commission per unit", result.commission_per_unit, Unit::Currency)
            .metric(
                "commissionShare",
                "Share of sales",
                round_cents(percent_of(result.commission, result.gross_sales)),
                Unit::Percent,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission() {
        let result = ShopCommission::calculate(&ShopCommissionInput {
            product_price: 25.0,
            units_sold: 200.0,
            commission_rate: 10.0,
        });
        assert_eq!(result.gross_sales, 5_000.0);
        assert_eq!(result.commission, 500.0);
        assert_eq!(result.commission_per_unit, 2.5);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_rate_above_cap_rejected() {
        let form = Form::new()
            .with("productPrice", 25)
            .with("unitsSold", 200)
            .with("commissionRate", 25);
        let errors = ShopCommission::validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("commissionRate"), Some("Commission rate cannot exceed 20.00%"));
    }
}
