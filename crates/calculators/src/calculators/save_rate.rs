//! Saves per view

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_VIEWS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_percent};
use crate::math::{percent_of, ratio, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const SAVES: NumberField = NumberField::count("saves", "Saves", 0.0, MAX_VIEWS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "save-rate",
    name: "Save Rate Calculator",
    category: Category::Engagement,
    description: "Measure how often viewers bookmark your videos to come back to.",
    fields: &[Field::Number(VIEWS), Field::Number(SAVES)],
};

static RATE_STEPS: [(f64, Rating); 3] = quality(2.0, 1.0, 0.5);
static RATE_RATING: Ladder<Rating> = Ladder::at_least(&RATE_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveInput {
    pub views: f64,
    pub saves: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub save_rate: f64,
    /// Views it takes to earn one save (0 with no saves)
    pub views_per_save: f64,
    pub rating: Rating,
}

pub struct SaveRate;

impl Calculator for SaveRate {
    type Input = SaveInput;
    type Output = SaveResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<SaveInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let saves = check.number(&SAVES);
        check.not_exceeding(&SAVES, saves, views, "views");
        check.finish(|| {
            Some(SaveInput {
                views: views?,
                saves: saves?,
            })
        })
    }

    fn calculate(input: &SaveInput) -> SaveResult {
        let save_rate = round_to(percent_of(input.saves, input.views), 2);

        SaveResult {
            save_rate,
            views_per_save: round_to(ratio(input.views, input.saves), 1),
            rating: RATE_RATING.classify(save_rate),
        }
    }

    fn interpret(input: &SaveInput, result: &SaveResult) -> String {
        let opening = format!(
            "{} saves from {} views is a save rate of {}.",
            format_count(input.saves),
            format_count(input.views),
            format_percent(result.save_rate, 2),
        );
        let verdict = match result.rating {
            Rating::Excellent => "Viewers treat this as reference material, a strong signal of lasting value.",
            Rating::Good => "A good share of viewers want to return to this video.",
            Rating::Average => "A typical save rate. Tips, recipes and tutorials tend to get saved more.",
            Rating::BelowAverage => "Few viewers save this. Add practical value people will want to revisit.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &SaveResult) -> Summary {
        Summary::new(result.save_rate, Unit::Percent)
            .rated(result.rating)
            .metric("viewsPerSave", "Views per save", result.views_per_save, Unit::Count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_rate() {
        let result = SaveRate::calculate(&SaveInput {
            views: 10_000.0,
            saves: 150.0,
        });
        assert_eq!(result.save_rate, 1.5);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_no_saves() {
        let result = SaveRate::calculate(&SaveInput { views: 10_000.0, saves: 0.0 });
        assert_eq!(result.save_rate, 0.0);
        assert_eq!(result.views_per_save, 0.0);
        assert_eq!(result.rating, Rating::BelowAverage);
    }
}
