//! LIVE gift income projected from audience size and gifting habits

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{DIAMONDS_PER_COIN, USD_PER_DIAMOND};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWERS: NumberField = NumberField::count("averageViewers", "Average viewers", 1.0, 10_000_000.0);
const GIFTER_PERCENT: NumberField = NumberField::percent("gifterPercent", "Viewers who send gifts", 0.1, 100.0);
const COINS_PER_GIFT: NumberField = NumberField::count("averageCoinsPerGift", "Average coins per gift", 1.0, 50_000.0);
const STREAMS: NumberField = NumberField::count("streamsPerMonth", "Streams per month", 1.0, 120.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "live-gift-earnings",
    name: "LIVE Gift Earnings Calculator",
    category: Category::Currency,
    description: "Estimate monthly income from LIVE gifts based on viewers and gifting behaviour.",
    fields: &[
        Field::Number(VIEWERS),
        Field::Number(GIFTER_PERCENT),
        Field::Number(COINS_PER_GIFT),
        Field::Number(STREAMS),
    ],
};

static MONTHLY_STEPS: [(f64, Rating); 3] = quality(1_000.0, 250.0, 50.0);
static MONTHLY_RATING: Ladder<Rating> = Ladder::at_least(&MONTHLY_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGiftInput {
    pub average_viewers: f64,
    pub gifter_percent: f64,
    pub average_coins_per_gift: f64,
    pub streams_per_month: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGiftResult {
    pub gifters_per_stream: f64,
    pub coins_per_stream: f64,
    pub per_stream: f64,
    pub monthly: f64,
    pub yearly: f64,
    pub rating: Rating,
}

pub struct LiveGiftEarnings;

impl Calculator for LiveGiftEarnings {
    type Input = LiveGiftInput;
    type Output = LiveGiftResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<LiveGiftInput, FieldErrors> {
        let mut check = Checker::new(form);
        let average_viewers = check.number(&VIEWERS);
        let gifter_percent = check.number(&GIFTER_PERCENT);
        let average_coins_per_gift = check.number(&COINS_PER_GIFT);
        let streams_per_month = check.number(&STREAMS);
        check.finish(|| {
            Some(LiveGiftInput {
                average_viewers: average_viewers?,
                gifter_percent: gifter_percent?,
                average_coins_per_gift: average_coins_per_gift?,
                streams_per_month: streams_per_month?,
            })
        })
    }

    fn calculate(input: &LiveGiftInput) -> LiveGiftResult {
        let gifters = input.average_viewers * input.gifter_percent / 100.0;
        let coins = gifters * input.average_coins_per_gift;
        let per_stream = coins * DIAMONDS_PER_COIN * USD_PER_DIAMOND;
        let monthly = round_cents(per_stream * input.streams_per_month);

        LiveGiftResult {
            gifters_per_stream: round_to(gifters, 1),
            coins_per_stream: round_to(coins, 0),
            per_stream: round_cents(per_stream),
            monthly,
            yearly: round_cents(monthly * 12.0),
            rating: MONTHLY_RATING.classify(monthly),
        }
    }

    fn interpret(input: &LiveGiftInput, result: &LiveGiftResult) -> String {
        let opening = format!(
            "With {} viewers and {} of them gifting, each stream brings in about {} coins ({}). \
             Over {} streams that is roughly {} a month.",
            format_count(input.average_viewers),
            format_percent(input.gifter_percent, 1),
            format_count(result.coins_per_stream),
            format_currency(result.per_stream),
            format_count(input.streams_per_month),
            format_currency(result.monthly),
        );
        let advice = match result.rating {
            Rating::Excellent => "That is a serious income stream; consistent scheduling will protect it.",
            Rating::Good => "A solid side income. Gift goals and shout-outs can lift the gifting rate further.",
            Rating::Average => "Gifts cover some costs. Longer streams and interactive segments tend to raise gifting.",
            Rating::BelowAverage => {
                "Gifts are a small contribution for now. Growing concurrent viewers matters more than streaming more often."
            }
        };
        format!("{opening} {advice}")
    }

    fn summarize(result: &LiveGiftResult) -> Summary {
        Summary::new(result.monthly, Unit::Currency)
            .rated(result.rating)
            .metric("perStream", "Per stream", result.per_stream, Unit::Currency)
            .metric("yearly", "Per year", result.yearly, Unit::Currency)
            .metric("coinsPerStream", "Coins per stream", result.coins_per_stream, Unit::Count)
            .metric("giftersPerStream", "Gifters per stream", result.gifters_per_stream, Unit::Count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(viewers: f64) -> LiveGiftInput {
        LiveGiftInput {
            average_viewers: viewers,
            gifter_percent: 5.0,
            average_coins_per_gift: 100.0,
            streams_per_month: 20.0,
        }
    }

    #[test]
    fn test_monthly_projection() {
        // 200 viewers * 5% = 10 gifters * 100 coins = 1,000 coins = $2.50 per stream
        let result = LiveGiftEarnings::calculate(&input(200.0));
        assert_eq!(result.coins_per_stream, 1_000.0);
        assert_eq!(result.per_stream, 2.5);
        assert_eq!(result.monthly, 50.0);
        assert_eq!(result.yearly, 600.0);
        assert_eq!(result.rating, Rating::Average);
    }

    #[test]
    fn test_more_viewers_never_lowers_rating() {
        let small = LiveGiftEarnings::calculate(&input(100.0)).rating;
        let large = LiveGiftEarnings::calculate(&input(10_000.0)).rating;
        assert!(large >= small);
    }
}
