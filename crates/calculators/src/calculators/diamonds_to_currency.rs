//! Diamond cash-out value in a chosen currency

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::Currency;
use crate::constants::{EXCHANGE_RATES, MAX_DIAMONDS, USD_PER_DIAMOND};
use crate::factors::lookup;
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_number};
use crate::math::round_cents;
use crate::validation::{Checker, FieldErrors, Form};

const DIAMONDS: NumberField = NumberField::count("diamonds", "Diamonds", 1.0, MAX_DIAMONDS);
const CURRENCY: ChoiceField = ChoiceField::of::<Currency>("currency", "Currency");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "diamonds-to-currency",
    name: "Diamonds to Cash Calculator",
    category: Category::Currency,
    description: "Convert diamonds into US dollars or your local currency.",
    fields: &[Field::Number(DIAMONDS), Field::Choice(CURRENCY)],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondsInput {
    pub diamonds: f64,
    pub currency: Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondsResult {
    pub usd_value: f64,
    pub local_value: f64,
    pub exchange_rate: f64,
    pub currency: Currency,
}

pub struct DiamondsToCurrency;

impl Calculator for DiamondsToCurrency {
    type Input = DiamondsInput;
    type Output = DiamondsResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<DiamondsInput, FieldErrors> {
        let mut check = Checker::new(form);
        let diamonds = check.number(&DIAMONDS);
        let currency = check.choice::<Currency>(&CURRENCY);
        check.finish(|| {
            Some(DiamondsInput {
                diamonds: diamonds?,
                currency: currency?,
            })
        })
    }

    fn calculate(input: &DiamondsInput) -> DiamondsResult {
        let usd_value = input.diamonds * USD_PER_DIAMOND;
        let exchange_rate = lookup(EXCHANGE_RATES, input.currency);

        DiamondsResult {
            usd_value: round_cents(usd_value),
            local_value: round_cents(usd_value * exchange_rate),
            exchange_rate,
            currency: input.currency,
        }
    }

    fn interpret(input: &DiamondsInput, result: &DiamondsResult) -> String {
        let mut text = format!(
            "{} diamonds cash out for about {}.",
            format_count(input.diamonds),
            format_currency(result.usd_value)
        );
        if result.currency != Currency::Usd {
            text.push_str(&format!(
                " At {} {} per dollar that is roughly {} {}. Your bank or payout provider may take a conversion fee.",
                format_number(result.exchange_rate, 2),
                result.currency.code(),
                format_number(result.local_value, 2),
                result.currency.code(),
            ));
        }
        text
    }

    fn summarize(result: &DiamondsResult) -> Summary {
        Summary::new(result.local_value, Unit::Currency)
            .metric("usdValue", "Value in USD", result.usd_value, Unit::Currency)
            .metric("exchangeRate", "Exchange rate", result.exchange_rate, Unit::Multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_uses_neutral_rate() {
        let result = DiamondsToCurrency::calculate(&DiamondsInput {
            diamonds: 10_000.0,
            currency: Currency::Usd,
        });
        assert_eq!(result.usd_value, 50.0);
        assert_eq!(result.local_value, 50.0);
        assert_eq!(result.exchange_rate, 1.0);
    }

    #[test]
    fn test_local_currency() {
        let input = DiamondsInput {
            diamonds: 10_000.0,
            currency: Currency::Gbp,
        };
        let result = DiamondsToCurrency::calculate(&input);
        assert_eq!(result.local_value, 39.5);
        assert!(DiamondsToCurrency::interpret(&input, &result).contains("GBP"));
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let form = Form::new().with("diamonds", 100).with("currency", "doubloons");
        let errors = DiamondsToCurrency::validate(&form).unwrap_err();
        assert!(errors.contains("currency"));
    }
}
