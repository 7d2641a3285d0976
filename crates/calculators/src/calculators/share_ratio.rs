//! Shares per view and per like

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_VIEWS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_number, format_percent};
use crate::math::{percent_of, ratio, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const SHARES: NumberField = NumberField::count("shares", "Shares", 0.0, MAX_VIEWS);
const LIKES: NumberField = NumberField::count("likes", "Likes", 0.0, MAX_VIEWS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "share-ratio",
    name: "Share Ratio Calculator",
    category: Category::Engagement,
    description: "See how often viewers pass your videos on.",
    fields: &[Field::Number(VIEWS), Field::Number(SHARES), Field::Number(LIKES)],
};

static SHARE_STEPS: [(f64, Rating); 3] = quality(1.0, 0.5, 0.2);
static SHARE_RATING: Ladder<Rating> = Ladder::at_least(&SHARE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInput {
    pub views: f64,
    pub shares: f64,
    pub likes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResult {
    pub share_rate: f64,
    pub shares_per_like: f64,
    pub rating: Rating,
}

pub struct ShareRatio;

impl Calculator for ShareRatio {
    type Input = ShareInput;
    type Output = ShareResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ShareInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let shares = check.number(&SHARES);
        let likes = check.number(&LIKES);
        check.not_exceeding(&SHARES, shares, views, "views");
        check.finish(|| {
            Some(ShareInput {
                views: views?,
                shares: shares?,
                likes: likes?,
            })
        })
    }

    fn calculate(input: &ShareInput) -> ShareResult {
        let share_rate = round_to(percent_of(input.shares, input.views), 2);

        ShareResult {
            share_rate,
            shares_per_like: round_to(ratio(input.shares, input.likes), 2),
            rating: SHARE_RATING.classify(share_rate),
        }
    }

    fn interpret(input: &ShareInput, result: &ShareResult) -> String {
        let mut text = format!(
            "{} shares from {} views is a share rate of {}.",
            format_count(input.shares),
            format_count(input.views),
            format_percent(result.share_rate, 2),
        );
        if input.likes > 0.0 {
            text.push_str(&format!(
                " That is {} shares for every like.",
                format_number(result.shares_per_like, 2)
            ));
        }
        let verdict = match result.rating {
            Rating::Excellent => " People are actively spreading this video, the strongest sign of viral reach.",
            Rating::Good => " A healthy share rate; this content travels beyond your followers.",
            Rating::Average => " A typical share rate. Relatable or surprising moments get shared more.",
            Rating::BelowAverage => " Few viewers share this. Content people want to send to a friend spreads further.",
        };
        text.push_str(verdict);
        text
    }

    fn summarize(result: &ShareResult) -> Summary {
        Summary::new(result.share_rate, Unit::Percent)
            .rated(result.rating)
            .metric("sharesPerLike", "Shares per like", result.shares_per_like, Unit::Ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_rate() {
        let result = ShareRatio::calculate(&ShareInput {
            views: 20_000.0,
            shares: 200.0,
            likes: 1_000.0,
        });
        assert_eq!(result.share_rate, 1.0);
        assert_eq!(result.shares_per_like, 0.2);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_zero_likes_gives_zero_ratio() {
        let result = ShareRatio::calculate(&ShareInput {
            views: 20_000.0,
            shares: 50.0,
            likes: 0.0,
        });
        assert_eq!(result.shares_per_like, 0.0);
        assert_eq!(result.rating, Rating::Average);
    }
}
