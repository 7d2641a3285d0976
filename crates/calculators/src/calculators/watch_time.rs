//! Total watch hours and average percentage watched

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{MAX_VIDEO_SECONDS, MAX_VIEWS, SECONDS_PER_HOUR};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_number, format_percent};
use crate::math::{percent_of, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const WATCH: NumberField =
    NumberField::new("averageWatchSeconds", "Average watch time", Unit::Seconds, 0.0, MAX_VIDEO_SECONDS);
const LENGTH: NumberField = NumberField::new("videoLengthSeconds", "Video length", Unit::Seconds, 1.0, MAX_VIDEO_SECONDS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "watch-time",
    name: "Watch Time Calculator",
    category: Category::Performance,
    description: "Total up watch hours and see how much of each video people watch.",
    fields: &[Field::Number(VIEWS), Field::Number(WATCH), Field::Number(LENGTH)],
};

static PERCENT_STEPS: [(f64, Rating); 3] = quality(70.0, 50.0, 30.0);
static PERCENT_RATING: Ladder<Rating> = Ladder::at_least(&PERCENT_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchTimeInput {
    pub views: f64,
    pub average_watch_seconds: f64,
    pub video_length_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchTimeResult {
    pub total_watch_hours: f64,
    pub average_watch_percent: f64,
    pub rating: Rating,
}

pub struct WatchTime;

impl Calculator for WatchTime {
    type Input = WatchTimeInput;
    type Output = WatchTimeResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<WatchTimeInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let average_watch_seconds = check.number(&WATCH);
        let video_length_seconds = check.number(&LENGTH);
        check.not_exceeding(&WATCH, average_watch_seconds, video_length_seconds, "the video length");
        check.finish(|| {
            Some(WatchTimeInput {
                views: views?,
                average_watch_seconds: average_watch_seconds?,
                video_length_seconds: video_length_seconds?,
            })
        })
    }

    fn calculate(input: &WatchTimeInput) -> WatchTimeResult {
        let average_watch_percent = round_to(percent_of(input.average_watch_seconds, input.video_length_seconds), 2);

        WatchTimeResult {
            total_watch_hours: round_to(input.views * input.average_watch_seconds / SECONDS_PER_HOUR, 1),
            average_watch_percent,
            rating: PERCENT_RATING.classify(average_watch_percent),
        }
    }

    fn interpret(input: &WatchTimeInput, result: &WatchTimeResult) -> String {
        let opening = format!(
            "{} views at {}s each add up to {} hours of watch time. Viewers watch {} of the video on average.",
            format_count(input.views),
            format_number(input.average_watch_seconds, 1),
            format_number(result.total_watch_hours, 1),
            format_percent(result.average_watch_percent, 1),
        );
        let verdict = match result.rating {
            Rating::Excellent => "Retention like this tells the algorithm the video is worth recommending.",
            Rating::Good => "Good retention; most viewers stay for the bulk of the video.",
            Rating::Average => "Average retention. Trim the intro and get to the payoff sooner.",
            Rating::BelowAverage => "Viewers drop off early. A shorter cut or a stronger hook should help.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &WatchTimeResult) -> Summary {
        Summary::new(result.average_watch_percent, Unit::Percent)
            .rated(result.rating)
            .metric("totalWatchHours", "Total watch time", result.total_watch_hours, Unit::Hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_time() {
        let result = WatchTime::calculate(&WatchTimeInput {
            views: 10_000.0,
            average_watch_seconds: 45.0,
            video_length_seconds: 60.0,
        });
        assert_eq!(result.total_watch_hours, 125.0);
        assert_eq!(result.average_watch_percent, 75.0);
        assert_eq!(result.rating, Rating::Excellent);
    }
}
