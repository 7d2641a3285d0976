//! What a stack of coins costs a viewer, and what it pays a creator

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{DIAMONDS_PER_COIN, MAX_COINS, USD_PER_COIN, USD_PER_DIAMOND};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency};
use crate::math::round_cents;
use crate::validation::{Checker, FieldErrors, Form};

const COINS: NumberField = NumberField::count("coins", "Coins", 1.0, MAX_COINS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "coins-to-usd",
    name: "Coins to USD Calculator",
    category: Category::Currency,
    description: "Convert coins to US dollars and see how much of that reaches the creator.",
    fields: &[Field::Number(COINS)],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsInput {
    pub coins: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsResult {
    /// Price a viewer pays for the coins
    pub usd_value: f64,
    pub diamonds: f64,
    /// Cash-out value of the diamonds
    pub creator_earnings: f64,
}

pub struct CoinsToUsd;

impl Calculator for CoinsToUsd {
    type Input = CoinsInput;
    type Output = CoinsResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CoinsInput, FieldErrors> {
        let mut check = Checker::new(form);
        let coins = check.number(&COINS);
        check.finish(|| Some(CoinsInput { coins: coins? }))
    }

    fn calculate(input: &CoinsInput) -> CoinsResult {
        let diamonds = (input.coins * DIAMONDS_PER_COIN).floor();
        CoinsResult {
            usd_value: round_cents(input.coins * USD_PER_COIN),
            diamonds,
            creator_earnings: round_cents(diamonds * USD_PER_DIAMOND),
        }
    }

    fn interpret(input: &CoinsInput, result: &CoinsResult) -> String {
        format!(
            "{} coins cost viewers about {}. Once gifted they turn into {} diamonds, which cash out for roughly {}. \
             The gap between the two is the platform's cut.",
            format_count(input.coins),
            format_currency(result.usd_value),
            format_count(result.diamonds),
            format_currency(result.creator_earnings),
        )
    }

    fn summarize(result: &CoinsResult) -> Summary {
        Summary::new(result.usd_value, Unit::Currency)
            .metric("diamonds", "Diamonds", result.diamonds, Unit::Count)
            .metric("creatorEarnings", "Creator earnings", result.creator_earnings, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousand_coins() {
        let result = CoinsToUsd::calculate(&CoinsInput { coins: 1000.0 });
        assert_eq!(result.usd_value, 10.5);
        assert_eq!(result.diamonds, 500.0);
        assert_eq!(result.creator_earnings, 2.5);
    }

    #[test]
    fn test_zero_coins_rejected() {
        let errors = CoinsToUsd::validate(&Form::new().with("coins", 0)).unwrap_err();
        assert_eq!(errors.get("coins"), Some("Coins must be at least 1"));
    }

    #[test]
    fn test_interpretation_mentions_amounts() {
        let input = CoinsInput { coins: 1000.0 };
        let text = CoinsToUsd::interpret(&input, &CoinsToUsd::calculate(&input));
        assert!(text.contains("$10.50"));
        assert!(text.contains("500 diamonds"));
    }
}
