//! Per-unit profit on a shop product after fees and creator commission

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::SHOP_REFERRAL_FEE_PERCENT;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_currency, format_percent};
use crate::math::{percent_of, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const SELLING_PRICE: NumberField = NumberField::currency("sellingPrice", "Selling price", 0.01, 100_000.0);
const PRODUCT_COST: NumberField = NumberField::currency("productCost", "Product cost", 0.0, 100_000.0);
const SHIPPING_COST: NumberField = NumberField::currency("shippingCost", "Shipping cost", 0.0, 10_000.0);
const AFFILIATE_COMMISSION: NumberField =
    NumberField::percent("affiliateCommission", "Affiliate commission", 0.0, 80.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "product-margin",
    name: "Product Margin Calculator",
    category: Category::Business,
    description: "See what you keep from each sale after platform fees and creator commission.",
    fields: &[
        Field::Number(SELLING_PRICE),
        Field::Number(PRODUCT_COST),
        Field::Number(SHIPPING_COST),
        Field::Number(AFFILIATE_COMMISSION),
    ],
};

static MARGIN_STEPS: [(f64, Rating); 3] = quality(40.0, 25.0, 10.0);
static MARGIN_RATING: Ladder<Rating> = Ladder::at_least(&MARGIN_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMarginInput {
    pub selling_price: f64,
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub affiliate_commission: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMarginResult {
    pub referral_fee: f64,
    pub commission_cost: f64,
    pub total_costs: f64,
    pub net_profit_per_unit: f64,
    pub margin: f64,
    pub rating: Rating,
}

pub struct ProductMargin;

impl Calculator for ProductMargin {
    type Input = ProductMarginInput;
    type Output = ProductMarginResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ProductMarginInput, FieldErrors> {
        let mut check = Checker::new(form);
        let selling_price = check.number(&SELLING_PRICE);
        let product_cost = check.number(&PRODUCT_COST);
        let shipping_cost = check.number(&SHIPPING_COST);
        let affiliate_commission = check.number(&AFFILIATE_COMMISSION);
        check.less_than(&PRODUCT_COST, product_cost, selling_price, "the selling price");
        check.finish(|| {
            Some(ProductMarginInput {
                selling_price: selling_price?,
                product_cost: product_cost?,
                shipping_cost: shipping_cost?,
                affiliate_commission: affiliate_commission?,
            })
        })
    }

    fn calculate(input: &ProductMarginInput) -> ProductMarginResult {
        let referral_fee = input.selling_price * SHOP_REFERRAL_FEE_PERCENT / 100.0;
        let commission_cost = input.selling_price * input.affiliate_commission / 100.0;
        let total_costs = input.product_cost + input.shipping_cost + referral_fee + commission_cost;
        let net_profit_per_unit = round_cents(input.selling_price - total_costs);
        let margin = round_to(percent_of(net_profit_per_unit, input.selling_price), 2);

        ProductMarginResult {
            referral_fee: round_cents(referral_fee),
            commission_cost: round_cents(commission_cost),
            total_costs: round_cents(total_costs),
            net_profit_per_unit,
            margin,
            rating: MARGIN_RATING.classify(margin),
        }
    }

    fn interpret(input: &ProductMarginInput, result: &ProductMarginResult) -> String {
        let opening = format!(
            "Selling at {} you keep {} per unit after {} in costs, fees and commission: a {} margin.",
            format_currency(input.selling_price),
            format_currency(result.net_profit_per_unit),
            format_currency(result.total_costs),
            format_percent(result.margin, 1),
        );
        let verdict = match result.rating {
            Rating::Excellent => "A healthy margin with room to offer creators a higher commission.",
            Rating::Good => "A solid margin for a shop product.",
            Rating::Average => "The margin is thin. Sourcing or shipping savings would make a real difference.",
            Rating::BelowAverage if result.net_profit_per_unit < 0.0 => {
                "You lose money on every sale. Raise the price or cut costs before promoting this product."
            }
            Rating::BelowAverage => "Very little is left per sale; a single return could wipe out the profit.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &ProductMarginResult) -> Summary {
        Summary::new(result.margin, Unit::Percent)
            .rated(result.rating)
            .metric("netProfitPerUnit", "Net profit per unit", result.net_profit_per_unit, Unit::Currency)
            .metric("referralFee", "Referral fee", result.referral_fee, Unit::Currency)
            .metric("commissionCost", "Creator commission", result.commission_cost, Unit::Currency)
            .metric("totalCosts", "Total costs", result.total_costs, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_after_fees() {
        let result = ProductMargin::calculate(&ProductMarginInput {
            selling_price: 50.0,
            product_cost: 15.0,
            shipping_cost: 5.0,
            affiliate_commission: 10.0,
        });
        assert_eq!(result.referral_fee, 3.0);
        assert_eq!(result.commission_cost, 5.0);
        assert_eq!(result.net_profit_per_unit, 22.0);
        assert_eq!(result.margin, 44.0);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_fees_can_push_margin_negative() {
        let result = ProductMargin::calculate(&ProductMarginInput {
            selling_price: 10.0,
            product_cost: 8.0,
            shipping_cost: 2.0,
            affiliate_commission: 20.0,
        });
        assert!(result.net_profit_per_unit < 0.0);
        assert_eq!(result.rating, Rating::BelowAverage);
    }
}
