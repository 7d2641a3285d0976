//! Overall performance score for a single video

use serde::{Deserialize, Serialize};

use super::viral_potential::{SubScore, composite};
use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{MAX_FOLLOWERS, MAX_VIDEO_SECONDS, MAX_VIEWS, PERFORMANCE_COMPONENTS};
use crate::fields::{Field, NumberField, Unit};
use crate::format::format_number;
use crate::math::{percent_of, ratio};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const FOLLOWERS: NumberField = NumberField::count("followers", "Followers", 1.0, MAX_FOLLOWERS);
const LIKES: NumberField = NumberField::count("likes", "Likes", 0.0, MAX_VIEWS);
const COMMENTS: NumberField = NumberField::count("comments", "Comments", 0.0, MAX_VIEWS);
const SHARES: NumberField = NumberField::count("shares", "Shares", 0.0, MAX_VIEWS);
const LENGTH: NumberField = NumberField::new("videoLengthSeconds", "Video length", Unit::Seconds, 1.0, MAX_VIDEO_SECONDS);
const WATCH: NumberField =
    NumberField::new("averageWatchSeconds", "Average watch time", Unit::Seconds, 0.0, MAX_VIDEO_SECONDS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "video-performance",
    name: "Video Performance Calculator",
    category: Category::Performance,
    description: "Grade a video on reach, engagement, retention and shareability.",
    fields: &[
        Field::Number(VIEWS),
        Field::Number(FOLLOWERS),
        Field::Number(LIKES),
        Field::Number(COMMENTS),
        Field::Number(SHARES),
        Field::Number(LENGTH),
        Field::Number(WATCH),
    ],
};

static SCORE_STEPS: [(f64, Rating); 3] = quality(75.0, 55.0, 35.0);
static SCORE_RATING: Ladder<Rating> = Ladder::at_least(&SCORE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInput {
    pub views: f64,
    pub followers: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub video_length_seconds: f64,
    pub average_watch_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub score: f64,
    pub components: Vec<SubScore>,
    pub rating: Rating,
}

pub struct VideoPerformance;

impl Calculator for VideoPerformance {
    type Input = VideoInput;
    type Output = VideoResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<VideoInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let followers = check.number(&FOLLOWERS);
        let likes = check.number(&LIKES);
        let comments = check.number(&COMMENTS);
        let shares = check.number(&SHARES);
        let video_length_seconds = check.number(&LENGTH);
        let average_watch_seconds = check.number(&WATCH);
        check.not_exceeding(&LIKES, likes, views, "views");
        check.not_exceeding(&COMMENTS, comments, views, "views");
        check.not_exceeding(&SHARES, shares, views, "views");
        check.not_exceeding(&WATCH, average_watch_seconds, video_length_seconds, "the video length");
        check.finish(|| {
            Some(VideoInput {
                views: views?,
                followers: followers?,
                likes: likes?,
                comments: comments?,
                shares: shares?,
                video_length_seconds: video_length_seconds?,
                average_watch_seconds: average_watch_seconds?,
            })
        })
    }

    fn calculate(input: &VideoInput) -> VideoResult {
        let reach = ratio(input.views, input.followers);
        let engagement = percent_of(input.likes + input.comments + input.shares, input.views);
        let retention = percent_of(input.average_watch_seconds, input.video_length_seconds);
        let shareability = percent_of(input.shares, input.views);

        let (components, score) = composite(&PERFORMANCE_COMPONENTS, [reach, engagement, retention, shareability]);

        VideoResult {
            score,
            components,
            rating: SCORE_RATING.classify(score),
        }
    }

    fn interpret(_input: &VideoInput, result: &VideoResult) -> String {
        let opening = format!("This video scores {} out of 100.", format_number(result.score, 1));
        let verdict = match result.rating {
            Rating::Excellent => "It is performing exceptionally well across the board; study what made it work.",
            Rating::Good => "It is performing well above a typical post.",
            Rating::Average => "It is performing about as well as a typical post.",
            Rating::BelowAverage => "It is underperforming. Compare its hook and length with your best videos.",
        };
        let strongest = result.components.iter().max_by(|a, b| a.score.total_cmp(&b.score));
        let weakest = result.components.iter().min_by(|a, b| a.score.total_cmp(&b.score));
        match (strongest, weakest) {
            (Some(best), Some(worst)) if best.name != worst.name => format!(
                "{opening} {verdict} Its strongest area is {} and its weakest is {}.",
                best.name, worst.name
            ),
            _ => format!("{opening} {verdict}"),
        }
    }

    fn summarize(result: &VideoResult) -> Summary {
        let mut summary = Summary::new(result.score, Unit::Score).rated(result.rating);
        for part in &result.components {
            let label = match part.name {
                "reach" => "Reach score",
                "engagement" => "Engagement score",
                "retention" => "Retention score",
                _ => "Shareability score",
            };
            summary = summary.metric(part.name, label, part.score, Unit::Score);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_score() {
        let result = VideoPerformance::calculate(&VideoInput {
            views: 20_000.0,
            followers: 10_000.0,
            likes: 1_500.0,
            comments: 300.0,
            shares: 200.0,
            video_length_seconds: 60.0,
            average_watch_seconds: 30.0,
        });
        assert_eq!(result.score, 85.0);
        assert_eq!(result.rating, Rating::Excellent);
        let retention = result.components.iter().find(|p| p.name == "retention").map(|p| p.score);
        assert_eq!(retention, Some(50.0));
    }

    #[test]
    fn test_watch_time_within_length() {
        let form = Form::new()
            .with("views", 1_000)
            .with("followers", 1_000)
            .with("likes", 10)
            .with("comments", 1)
            .with("shares", 1)
            .with("videoLengthSeconds", 30)
            .with("averageWatchSeconds", 45);
        let errors = VideoPerformance::validate(&form).unwrap_err();
        assert_eq!(errors.get("averageWatchSeconds"), Some("Average watch time cannot exceed the video length"));
    }
}
