//! Funnel from video views to profile visits to new followers

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_VIEWS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_percent};
use crate::math::{percent_of, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("videoViews", "Video views", 1.0, MAX_VIEWS);
const VISITS: NumberField = NumberField::count("profileVisits", "Profile visits", 1.0, MAX_VIEWS);
const NEW_FOLLOWERS: NumberField = NumberField::count("newFollowers", "New followers", 0.0, MAX_VIEWS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "profile-conversion",
    name: "Profile Conversion Calculator",
    category: Category::Engagement,
    description: "Track how well your videos turn viewers into profile visits and followers.",
    fields: &[Field::Number(VIEWS), Field::Number(VISITS), Field::Number(NEW_FOLLOWERS)],
};

static FOLLOW_STEPS: [(f64, Rating); 3] = quality(20.0, 10.0, 5.0);
static FOLLOW_RATING: Ladder<Rating> = Ladder::at_least(&FOLLOW_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConversionInput {
    pub video_views: f64,
    pub profile_visits: f64,
    pub new_followers: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConversionResult {
    /// Profile visits per view (percent)
    pub visit_rate: f64,
    /// Follows per profile visit (percent)
    pub follow_rate: f64,
    /// Follows per view (percent)
    pub overall_rate: f64,
    pub rating: Rating,
}

pub struct ProfileConversion;

impl Calculator for ProfileConversion {
    type Input = ProfileConversionInput;
    type Output = ProfileConversionResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ProfileConversionInput, FieldErrors> {
        let mut check = Checker::new(form);
        let video_views = check.number(&VIEWS);
        let profile_visits = check.number(&VISITS);
        let new_followers = check.number(&NEW_FOLLOWERS);
        check.not_exceeding(&VISITS, profile_visits, video_views, "video views");
        check.not_exceeding(&NEW_FOLLOWERS, new_followers, profile_visits, "profile visits");
        check.finish(|| {
            Some(ProfileConversionInput {
                video_views: video_views?,
                profile_visits: profile_visits?,
                new_followers: new_followers?,
            })
        })
    }

    fn calculate(input: &ProfileConversionInput) -> ProfileConversionResult {
        let follow_rate = round_to(percent_of(input.new_followers, input.profile_visits), 2);

        ProfileConversionResult {
            visit_rate: round_to(percent_of(input.profile_visits, input.video_views), 2),
            follow_rate,
            overall_rate: round_to(percent_of(input.new_followers, input.video_views), 2),
            rating: FOLLOW_RATING.classify(follow_rate),
        }
    }

    fn interpret(input: &ProfileConversionInput, result: &ProfileConversionResult) -> String {
        let opening = format!(
            "{} of viewers visited your profile and {} of those visitors followed, {} new followers in total.",
            format_percent(result.visit_rate, 2),
            format_percent(result.follow_rate, 1),
            format_count(input.new_followers),
        );
        let verdict = match result.rating {
            Rating::Excellent => "Your profile converts visitors exceptionally well.",
            Rating::Good => "Your profile does a good job of turning curiosity into follows.",
            Rating::Average => "A typical follow rate. A clear bio and pinned videos can lift it.",
            Rating::BelowAverage => {
                "Visitors are not sticking. Make your bio say what you post and pin your best videos."
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &ProfileConversionResult) -> Summary {
        Summary::new(result.follow_rate, Unit::Percent)
            .rated(result.rating)
            .metric("visitRate", "Profile visit rate", result.visit_rate, Unit::Percent)
            .metric("overallRate", "Views to followers", result.overall_rate, Unit::Percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel() {
        let result = ProfileConversion::calculate(&ProfileConversionInput {
            video_views: 100_000.0,
            profile_visits: 2_000.0,
            new_followers: 300.0,
        });
        assert_eq!(result.visit_rate, 2.0);
        assert_eq!(result.follow_rate, 15.0);
        assert_eq!(result.overall_rate, 0.3);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_funnel_order_enforced() {
        let form = Form::new()
            .with("videoViews", 1_000)
            .with("profileVisits", 2_000)
            .with("newFollowers", 100);
        let errors = ProfileConversion::validate(&form).unwrap_err();
        assert_eq!(errors.get("profileVisits"), Some("Profile visits cannot exceed video views"));
        assert!(!errors.contains("newFollowers"));
    }
}
