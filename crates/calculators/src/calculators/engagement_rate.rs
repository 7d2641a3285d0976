//! Engagement rate from average interactions per post

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_FOLLOWERS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_percent};
use crate::math::{percent_of, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const FOLLOWERS: NumberField = NumberField::count("followers", "Followers", 1.0, MAX_FOLLOWERS);
const LIKES: NumberField = NumberField::count("avgLikes", "Average likes", 0.0, MAX_FOLLOWERS);
const COMMENTS: NumberField = NumberField::count("avgComments", "Average comments", 0.0, MAX_FOLLOWERS);
const SHARES: NumberField = NumberField::count("avgShares", "Average shares", 0.0, MAX_FOLLOWERS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "engagement-rate",
    name: "Engagement Rate Calculator",
    category: Category::Engagement,
    description: "Measure how actively your followers interact with your posts.",
    fields: &[
        Field::Number(FOLLOWERS),
        Field::Number(LIKES),
        Field::Number(COMMENTS),
        Field::Number(SHARES),
    ],
};

static RATE_STEPS: [(f64, Rating); 3] = quality(10.0, 5.0, 2.0);
static RATE_RATING: Ladder<Rating> = Ladder::at_least(&RATE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementInput {
    pub followers: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_shares: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementResult {
    pub engagement_rate: f64,
    pub total_engagements: f64,
    pub rating: Rating,
}

pub struct EngagementRate;

impl Calculator for EngagementRate {
    type Input = EngagementInput;
    type Output = EngagementResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<EngagementInput, FieldErrors> {
        let mut check = Checker::new(form);
        let followers = check.number(&FOLLOWERS);
        let avg_likes = check.number(&LIKES);
        let avg_comments = check.number(&COMMENTS);
        let avg_shares = check.number(&SHARES);
        check.finish(|| {
            Some(EngagementInput {
                followers: followers?,
                avg_likes: avg_likes?,
                avg_comments: avg_comments?,
                avg_shares: avg_shares?,
            })
        })
    }

    fn calculate(input: &EngagementInput) -> EngagementResult {
        let total_engagements = input.avg_likes + input.avg_comments + input.avg_shares;
        let engagement_rate = round_to(percent_of(total_engagements, input.followers), 2);

        EngagementResult {
            engagement_rate,
            total_engagements,
            rating: RATE_RATING.classify(engagement_rate),
        }
    }

    fn interpret(input: &EngagementInput, result: &EngagementResult) -> String {
        let opening = format!(
            "{} interactions per post across {} followers is an engagement rate of {}.",
            format_count(result.total_engagements),
            format_count(input.followers),
            format_percent(result.engagement_rate, 2),
        );
        let verdict = match result.rating {
            Rating::Excellent => "That is exceptional. Brands pay a premium for audiences this active.",
            Rating::Good => "That is above average; your audience is genuinely interested in your content.",
            Rating::Average => "That is about average. Hooks, questions and replies to comments can push it higher.",
            Rating::BelowAverage => {
                "That is below average. Try posting when your audience is online and inviting comments."
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &EngagementResult) -> Summary {
        Summary::new(result.engagement_rate, Unit::Percent)
            .rated(result.rating)
            .metric("totalEngagements", "Engagements per post", result.total_engagements, Unit::Count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_engagement() {
        let form = Form::new()
            .with("followers", 10_000)
            .with("avgLikes", 400)
            .with("avgComments", 50)
            .with("avgShares", 50);
        let input = EngagementRate::validate(&form).unwrap();
        let result = EngagementRate::calculate(&input);
        assert_eq!(result.engagement_rate, 5.0);
        assert_eq!(result.rating, Rating::Good);
        assert_eq!(EngagementRate::run(&input).rating, Some("good"));
    }

    #[test]
    fn test_zero_followers_rejected() {
        let form = Form::new()
            .with("followers", 0)
            .with("avgLikes", 400)
            .with("avgComments", 50)
            .with("avgShares", 50);
        let errors = EngagementRate::validate(&form).unwrap_err();
        assert_eq!(errors.get("followers"), Some("Followers must be at least 1"));
    }
}
