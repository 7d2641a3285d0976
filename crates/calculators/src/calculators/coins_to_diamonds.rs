//! Coins gifted on LIVE and the diamonds they become

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{DIAMONDS_PER_COIN, MAX_COINS, USD_PER_COIN, USD_PER_DIAMOND};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{percent_of, round_cents, round_to};
use crate::validation::{Checker, FieldErrors, Form};

const COINS: NumberField = NumberField::count("coins", "Coins received", 1.0, MAX_COINS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "coins-to-diamonds",
    name: "Coins to Diamonds Calculator",
    category: Category::Currency,
    description: "See how many diamonds a creator earns from gifted coins and the platform's share.",
    fields: &[Field::Number(COINS)],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsToDiamondsInput {
    pub coins: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsToDiamondsResult {
    pub diamonds: f64,
    pub usd_value: f64,
    pub creator_earnings: f64,
    pub platform_share: f64,
    /// Creator earnings as a percentage of what viewers paid
    pub creator_share_percent: f64,
}

pub struct CoinsToDiamonds;

impl Calculator for CoinsToDiamonds {
    type Input = CoinsToDiamondsInput;
    type Output = CoinsToDiamondsResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CoinsToDiamondsInput, FieldErrors> {
        let mut check = Checker::new(form);
        let coins = check.number(&COINS);
        check.finish(|| Some(CoinsToDiamondsInput { coins: coins? }))
    }

    fn calculate(input: &CoinsToDiamondsInput) -> CoinsToDiamondsResult {
        let diamonds = (input.coins * DIAMONDS_PER_COIN).floor();
        let usd_value = input.coins * USD_PER_COIN;
        let creator_earnings = diamonds * USD_PER_DIAMOND;

        CoinsToDiamondsResult {
            diamonds,
            usd_value: round_cents(usd_value),
            creator_earnings: round_cents(creator_earnings),
            platform_share: round_cents(usd_value - creator_earnings),
            creator_share_percent: round_to(percent_of(creator_earnings, usd_value), 2),
        }
    }

    fn interpret(input: &CoinsToDiamondsInput, result: &CoinsToDiamondsResult) -> String {
        format!(
            "{} coins become {} diamonds worth {}. Viewers paid {} for those coins, so the creator keeps about {} \
             and the platform keeps {}.",
            format_count(input.coins),
            format_count(result.diamonds),
            format_currency(result.creator_earnings),
            format_currency(result.usd_value),
            format_percent(result.creator_share_percent, 0),
            format_currency(result.platform_share),
        )
    }

    fn summarize(result: &CoinsToDiamondsResult) -> Summary {
        Summary::new(result.diamonds, Unit::Count)
            .metric("creatorEarnings", "Creator earnings", result.creator_earnings, Unit::Currency)
            .metric("usdValue", "Viewer spend", result.usd_value, Unit::Currency)
            .metric("platformShare", "Platform share", result.platform_share, Unit::Currency)
            .metric("creatorSharePercent", "Creator share", result.creator_share_percent, Unit::Percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let result = CoinsToDiamonds::calculate(&CoinsToDiamondsInput { coins: 1000.0 });
        assert_eq!(result.diamonds, 500.0);
        assert_eq!(result.creator_earnings, 2.5);
        assert_eq!(result.platform_share, 8.0);
        assert_eq!(result.creator_share_percent, 23.81);
    }

    #[test]
    fn test_odd_coins_round_down_to_whole_diamonds() {
        let result = CoinsToDiamonds::calculate(&CoinsToDiamondsInput { coins: 3.0 });
        assert_eq!(result.diamonds, 1.0);
    }
}
