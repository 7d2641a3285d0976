//! Follower growth over a period, normalized to a monthly rate

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::Timeframe;
use crate::constants::{DAYS_PER_MONTH, MAX_FOLLOWERS, timeframe_days};
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_count, format_number, format_percent};
use crate::math::{percent_of, ratio, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const STARTING: NumberField = NumberField::count("startingFollowers", "Starting followers", 1.0, MAX_FOLLOWERS);
const ENDING: NumberField = NumberField::count("endingFollowers", "Ending followers", 0.0, MAX_FOLLOWERS);
const PERIOD: NumberField = NumberField::count("periodLength", "Period length", 1.0, 3_650.0);
const TIMEFRAME: ChoiceField = ChoiceField::of::<Timeframe>("timeframe", "Timeframe");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "follower-growth",
    name: "Follower Growth Calculator",
    category: Category::Growth,
    description: "Measure how fast your audience grew over a period of time.",
    fields: &[
        Field::Number(STARTING),
        Field::Number(ENDING),
        Field::Number(PERIOD),
        Field::Choice(TIMEFRAME),
    ],
};

static MONTHLY_STEPS: [(f64, Rating); 3] = quality(20.0, 10.0, 3.0);
static MONTHLY_RATING: Ladder<Rating> = Ladder::at_least(&MONTHLY_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerGrowthInput {
    pub starting_followers: f64,
    pub ending_followers: f64,
    pub period_length: f64,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerGrowthResult {
    /// Net change, negative when followers were lost
    pub growth: f64,
    pub total_growth_rate: f64,
    /// Growth rate per day, week or month as entered
    pub rate_per_period: f64,
    pub monthly_growth_rate: f64,
    pub followers_per_day: f64,
    pub rating: Rating,
}

pub struct FollowerGrowth;

impl Calculator for FollowerGrowth {
    type Input = FollowerGrowthInput;
    type Output = FollowerGrowthResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<FollowerGrowthInput, FieldErrors> {
        let mut check = Checker::new(form);
        let starting_followers = check.number(&STARTING);
        let ending_followers = check.number(&ENDING);
        let period_length = check.number(&PERIOD);
        let timeframe = check.choice::<Timeframe>(&TIMEFRAME);
        check.finish(|| {
            Some(FollowerGrowthInput {
                starting_followers: starting_followers?,
                ending_followers: ending_followers?,
                period_length: period_length?,
                timeframe: timeframe?,
            })
        })
    }

    fn calculate(input: &FollowerGrowthInput) -> FollowerGrowthResult {
        let growth = input.ending_followers - input.starting_followers;
        let total_growth_rate = percent_of(growth, input.starting_followers);
        let days = input.period_length * timeframe_days(input.timeframe);
        let monthly_growth_rate = round_to(ratio(total_growth_rate, days / DAYS_PER_MONTH), 2);

        FollowerGrowthResult {
            growth,
            total_growth_rate: round_to(total_growth_rate, 2),
            rate_per_period: round_to(ratio(total_growth_rate, input.period_length), 2),
            monthly_growth_rate,
            followers_per_day: round_to(ratio(growth, days), 1),
            rating: MONTHLY_RATING.classify(monthly_growth_rate),
        }
    }

    fn interpret(input: &FollowerGrowthInput, result: &FollowerGrowthResult) -> String {
        let unit = input.timeframe.unit();
        let period = format!(
            "{} {}{}",
            format_number(input.period_length, 0),
            unit,
            if input.period_length == 1.0 { "" } else { "s" }
        );
        if result.growth < 0.0 {
            return format!(
                "You lost {} followers over {period} ({}). Look at which recent posts underperformed and return to formats that worked.",
                format_count(result.growth.abs()),
                format_percent(result.total_growth_rate, 2),
            );
        }
        let opening = format!(
            "You gained {} followers over {period}, {} in total or {} per {unit} ({} a month).",
            format_count(result.growth),
            format_percent(result.total_growth_rate, 2),
            format_percent(result.rate_per_period, 2),
            format_percent(result.monthly_growth_rate, 2),
        );
        let verdict = match result.rating {
            Rating::Excellent => "That is explosive growth; make the most of the momentum.",
            Rating::Good => "That is strong, steady growth.",
            Rating::Average => "That is a healthy pace for an established account.",
            Rating::BelowAverage => "Growth is slow. Posting more consistently and joining trends can help.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &FollowerGrowthResult) -> Summary {
        Summary::new(result.monthly_growth_rate, Unit::Percent)
            .rated(result.rating)
            .metric("growth", "Net growth", result.growth, Unit::Count)
            .metric("totalGrowthRate", "Total growth", result.total_growth_rate, Unit::Percent)
            .metric("ratePerPeriod", "Growth per period", result.rate_per_period, Unit::Percent)
            .metric("followersPerDay", "Followers per day", result.followers_per_day, Unit::Count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_months() {
        let result = FollowerGrowth::calculate(&FollowerGrowthInput {
            starting_followers: 10_000.0,
            ending_followers: 12_000.0,
            period_length: 2.0,
            timeframe: Timeframe::Months,
        });
        assert_eq!(result.growth, 2_000.0);
        assert_eq!(result.total_growth_rate, 20.0);
        assert_eq!(result.rate_per_period, 10.0);
        assert_eq!(result.monthly_growth_rate, 10.0);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_weeks_normalize_to_month() {
        let result = FollowerGrowth::calculate(&FollowerGrowthInput {
            starting_followers: 1_000.0,
            ending_followers: 1_070.0,
            period_length: 1.0,
            timeframe: Timeframe::Weeks,
        });
        assert_eq!(result.rate_per_period, 7.0);
        assert_eq!(result.monthly_growth_rate, 30.44);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_losing_followers() {
        let input = FollowerGrowthInput {
            starting_followers: 1_000.0,
            ending_followers: 900.0,
            period_length: 30.0,
            timeframe: Timeframe::Days,
        };
        let result = FollowerGrowth::calculate(&input);
        assert_eq!(result.growth, -100.0);
        assert_eq!(result.rating, Rating::BelowAverage);
        assert!(FollowerGrowth::interpret(&input, &result).starts_with("You lost 100 followers"));
    }
}
