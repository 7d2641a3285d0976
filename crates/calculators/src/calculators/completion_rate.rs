//! Share of views that watched to the end

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_VIEWS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_percent};
use crate::math::{percent_of, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const COMPLETED: NumberField = NumberField::count("completedViews", "Completed views", 0.0, MAX_VIEWS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "completion-rate",
    name: "Completion Rate Calculator",
    category: Category::Engagement,
    description: "See what share of viewers watch your videos all the way through.",
    fields: &[Field::Number(VIEWS), Field::Number(COMPLETED)],
};

static RATE_STEPS: [(f64, Rating); 3] = quality(80.0, 60.0, 40.0);
static RATE_RATING: Ladder<Rating> = Ladder::at_least(&RATE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInput {
    pub views: f64,
    pub completed_views: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub completion_rate: f64,
    pub drop_off_rate: f64,
    pub rating: Rating,
}

pub struct CompletionRate;

impl Calculator for CompletionRate {
    type Input = CompletionInput;
    type Output = CompletionResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CompletionInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let completed_views = check.number(&COMPLETED);
        check.not_exceeding(&COMPLETED, completed_views, views, "total views");
        check.finish(|| {
            Some(CompletionInput {
                views: views?,
                completed_views: completed_views?,
            })
        })
    }

    fn calculate(input: &CompletionInput) -> CompletionResult {
        let completion_rate = round_to(percent_of(input.completed_views, input.views), 2);

        CompletionResult {
            completion_rate,
            drop_off_rate: round_to(100.0 - completion_rate, 2),
            rating: RATE_RATING.classify(completion_rate),
        }
    }

    fn interpret(input: &CompletionInput, result: &CompletionResult) -> String {
        let opening = format!(
            "{} of {} views watched to the end, a completion rate of {}.",
            format_count(input.completed_views),
            format_count(input.views),
            format_percent(result.completion_rate, 1),
        );
        let verdict = match result.rating {
            Rating::Excellent => "Viewers are hooked from start to finish, which the feed algorithm rewards heavily.",
            Rating::Good => "Most viewers stay to the end; this content format is working.",
            Rating::Average => "About half your viewers finish. A tighter edit or a stronger opening can help.",
            Rating::BelowAverage => {
                "Most viewers leave early. Grab attention in the first seconds and cut slow sections."
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &CompletionResult) -> Summary {
        Summary::new(result.completion_rate, Unit::Percent)
            .rated(result.rating)
            .metric("dropOffRate", "Drop-off rate", result.drop_off_rate, Unit::Percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion() {
        let result = CompletionRate::calculate(&CompletionInput {
            views: 1_000.0,
            completed_views: 650.0,
        });
        assert_eq!(result.completion_rate, 65.0);
        assert_eq!(result.drop_off_rate, 35.0);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_completed_cannot_exceed_views() {
        let form = Form::new().with("views", 100).with("completedViews", 150);
        let errors = CompletionRate::validate(&form).unwrap_err();
        assert_eq!(errors.get("completedViews"), Some("Completed views cannot exceed total views"));
    }
}
