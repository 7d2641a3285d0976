//! Customer acquisition cost

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_number};
use crate::math::{ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const MARKETING_SPEND: NumberField = NumberField::currency("marketingSpend", "Marketing spend", 0.01, 100_000_000.0);
const NEW_CUSTOMERS: NumberField = NumberField::count("newCustomers", "New customers", 1.0, 10_000_000.0);
const CUSTOMER_VALUE: NumberField =
    NumberField::currency("averageCustomerValue", "Average customer value", 0.0, 1_000_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "cac",
    name: "Customer Acquisition Cost Calculator",
    category: Category::Business,
    description: "Calculate what each new customer costs and whether they are worth it.",
    fields: &[
        Field::Number(MARKETING_SPEND),
        Field::Number(NEW_CUSTOMERS),
        Field::Number(CUSTOMER_VALUE),
    ],
};

static RATIO_STEPS: [(f64, Rating); 3] = quality(3.0, 2.0, 1.0);
static RATIO_RATING: Ladder<Rating> = Ladder::at_least(&RATIO_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacInput {
    pub marketing_spend: f64,
    pub new_customers: f64,
    pub average_customer_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacResult {
    pub cac: f64,
    pub value_to_cac_ratio: f64,
    pub profit_per_customer: f64,
    pub rating: Rating,
}

pub struct Cac;

impl Calculator for Cac {
    type Input = CacInput;
    type Output = CacResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CacInput, FieldErrors> {
        let mut check = Checker::new(form);
        let marketing_spend = check.number(&MARKETING_SPEND);
        let new_customers = check.number(&NEW_CUSTOMERS);
        let average_customer_value = check.number(&CUSTOMER_VALUE);
        check.finish(|| {
            Some(CacInput {
                marketing_spend: marketing_spend?,
                new_customers: new_customers?,
                average_customer_value: average_customer_value?,
            })
        })
    }

    fn calculate(input: &CacInput) -> CacResult {
        let cac = round_cents(ratio(input.marketing_spend, input.new_customers));
        let value_to_cac_ratio = round_to(ratio(input.average_customer_value, cac), 2);

        CacResult {
            cac,
            value_to_cac_ratio,
            profit_per_customer: round_cents(input.average_customer_value - cac),
            rating: RATIO_RATING.classify(value_to_cac_ratio),
        }
    }

    fn interpret(input: &CacInput, result: &CacResult) -> String {
        let opening = format!(
            "Winning {} customers for {} means each one cost {}. Each is worth {}x what it cost to acquire.",
            format_count(input.new_customers),
            format_currency(input.marketing_spend),
            format_currency(result.cac),
            format_number(result.value_to_cac_ratio, 2),
        );
        let verdict = match result.rating {
            Rating::Excellent => "A 3x ratio or better is a healthy, scalable acquisition channel.",
            Rating::Good => "A solid ratio, though there is room to make acquisition more efficient.",
            Rating::Average => "Customers barely pay back their cost. Improve retention or lower acquisition spend.",
            Rating::BelowAverage => "Each customer costs more than they bring in. Rethink the channel before scaling.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &CacResult) -> Summary {
        Summary::new(result.cac, Unit::Currency)
            .rated(result.rating)
            .metric("valueToCacRatio", "Value to CAC", result.value_to_cac_ratio, Unit::Ratio)
            .metric("profitPerCustomer", "Profit per customer", result.profit_per_customer, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cac_ratio() {
        let result = Cac::calculate(&CacInput {
            marketing_spend: 5_000.0,
            new_customers: 100.0,
            average_customer_value: 150.0,
        });
        assert_eq!(result.cac, 50.0);
        assert_eq!(result.value_to_cac_ratio, 3.0);
        assert_eq!(result.profit_per_customer, 100.0);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_no_customers_rejected() {
        let form = Form::new()
            .with("marketingSpend", 5_000)
            .with("newCustomers", 0)
            .with("averageCustomerValue", 150);
        assert!(Cac::validate(&form).unwrap_err().contains("newCustomers"));
    }
}
