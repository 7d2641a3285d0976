//! Weighted score estimating how likely a video is to break out

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::{MAX_FOLLOWERS, MAX_VIEWS, ScoreComponent, VIRAL_COMPONENTS};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_number, format_percent};
use crate::math::{clamp_score, percent_of, ratio, round_to};
use crate::rating::{Chance, Ladder};
use crate::validation::{Checker, FieldErrors, Form};

/// One sub-score of a composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScore {
    pub name: &'static str,
    /// The measured value before scaling
    pub raw: f64,
    /// 0-100
    pub score: f64,
    pub weight: f64,
}

/// Scale each raw value against its component and combine by weight.
/// Returns the sub-scores and the composite rounded to one decimal.
pub(crate) fn composite<const N: usize>(components: &[ScoreComponent; N], raws: [f64; N]) -> (Vec<SubScore>, f64) {
    let parts: Vec<SubScore> = components
        .iter()
        .zip(raws)
        .map(|(component, raw)| SubScore {
            name: component.name,
            raw: round_to(raw, 2),
            score: round_to(clamp_score(raw, component.full_marks_at), 1),
            weight: component.weight,
        })
        .collect();
    let total = components
        .iter()
        .zip(raws)
        .map(|(component, raw)| clamp_score(raw, component.full_marks_at) * component.weight)
        .sum::<f64>();
    (parts, round_to(total, 1))
}

const VIEWS: NumberField = NumberField::count("views", "Views", 1.0, MAX_VIEWS);
const FOLLOWERS: NumberField = NumberField::count("followers", "Followers", 1.0, MAX_FOLLOWERS);
const LIKES: NumberField = NumberField::count("likes", "Likes", 0.0, MAX_VIEWS);
const COMMENTS: NumberField = NumberField::count("comments", "Comments", 0.0, MAX_VIEWS);
const SHARES: NumberField = NumberField::count("shares", "Shares", 0.0, MAX_VIEWS);
const COMPLETION: NumberField = NumberField::percent("completionRate", "Completion rate", 0.0, 100.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "viral-potential",
    name: "Viral Potential Calculator",
    category: Category::Performance,
    description: "Score a video's early signals to gauge its chance of going viral.",
    fields: &[
        Field::Number(VIEWS),
        Field::Number(FOLLOWERS),
        Field::Number(LIKES),
        Field::Number(COMMENTS),
        Field::Number(SHARES),
        Field::Number(COMPLETION),
    ],
};

static CHANCE_STEPS: [(f64, Chance); 3] = [(80.0, Chance::VeryHigh), (60.0, Chance::High), (40.0, Chance::Moderate)];
static CHANCE: Ladder<Chance> = Ladder::at_least(&CHANCE_STEPS, Chance::Low);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralInput {
    pub views: f64,
    pub followers: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralResult {
    pub score: f64,
    pub components: Vec<SubScore>,
    pub chance: Chance,
}

impl ViralResult {
    /// Lowest-scoring component, the one with the most room to improve
    pub fn weakest(&self) -> Option<&SubScore> {
        self.components.iter().min_by(|a, b| a.score.total_cmp(&b.score))
    }
}

pub struct ViralPotential;

impl Calculator for ViralPotential {
    type Input = ViralInput;
    type Output = ViralResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ViralInput, FieldErrors> {
        let mut check = Checker::new(form);
        let views = check.number(&VIEWS);
        let followers = check.number(&FOLLOWERS);
        let likes = check.number(&LIKES);
        let comments = check.number(&COMMENTS);
        let shares = check.number(&SHARES);
        let completion_rate = check.number(&COMPLETION);
        check.not_exceeding(&LIKES, likes, views, "views");
        check.not_exceeding(&COMMENTS, comments, views, "views");
        check.not_exceeding(&SHARES, shares, views, "views");
        check.finish(|| {
            Some(ViralInput {
                views: views?,
                followers: followers?,
                likes: likes?,
                comments: comments?,
                shares: shares?,
                completion_rate: completion_rate?,
            })
        })
    }

    fn calculate(input: &ViralInput) -> ViralResult {
        let engagement = percent_of(input.likes + input.comments + input.shares, input.views);
        let share_rate = percent_of(input.shares, input.views);
        let velocity = ratio(input.views, input.followers);

        let (components, score) = composite(
            &VIRAL_COMPONENTS,
            [engagement, share_rate, input.completion_rate, velocity],
        );

        ViralResult {
            score,
            components,
            chance: CHANCE.classify(score),
        }
    }

    fn interpret(_input: &ViralInput, result: &ViralResult) -> String {
        let opening = format!("This video scores {} out of 100 for viral potential.", format_number(result.score, 1));
        let verdict = match result.chance {
            Chance::VeryHigh => "Every signal is firing; expect the algorithm to keep pushing it.",
            Chance::High => "Strong early signals. A follow-up video while it is hot can ride the wave.",
            Chance::Moderate => "Some signals are promising but it has not broken out yet.",
            Chance::Low => "Early signals are weak, so this one is unlikely to spread far on its own.",
        };
        let advice = match result.weakest() {
            Some(part) if part.score < 100.0 => format!(" The weakest signal is {} ({}/100).", describe(part), format_number(part.score, 0)),
            _ => String::new(),
        };
        format!("{opening} {verdict}{advice}")
    }

    fn summarize(result: &ViralResult) -> Summary {
        let mut summary = Summary::new(result.score, Unit::Score).rated(result.chance);
        for part in &result.components {
            summary = summary.metric(part.name, label(part.name), part.score, Unit::Score);
        }
        summary
    }
}

fn label(name: &str) -> &'static str {
    match name {
        "engagement" => "Engagement score",
        "shares" => "Share score",
        "completion" => "Completion score",
        _ => "Velocity score",
    }
}

fn describe(part: &SubScore) -> String {
    match part.name {
        "engagement" => format!("engagement at {}", format_percent(part.raw, 2)),
        "shares" => format!("share rate at {}", format_percent(part.raw, 2)),
        "completion" => format!("completion at {}", format_percent(part.raw, 1)),
        _ => format!("view velocity at {}x followers", format_number(part.raw, 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ViralInput {
        ViralInput {
            views: 100_000.0,
            followers: 50_000.0,
            likes: 8_000.0,
            comments: 1_000.0,
            shares: 1_000.0,
            completion_rate: 60.0,
        }
    }

    #[test]
    fn test_weighted_score() {
        let result = ViralPotential::calculate(&input());
        assert_eq!(result.score, 79.0);
        assert_eq!(result.chance, Chance::High);
        assert_eq!(result.weakest().map(|p| p.name), Some("velocity"));
    }

    #[test]
    fn test_sub_scores_are_capped() {
        let result = ViralPotential::calculate(&ViralInput {
            views: 1_000_000.0,
            followers: 1_000.0,
            likes: 500_000.0,
            comments: 100_000.0,
            shares: 100_000.0,
            completion_rate: 100.0,
        });
        assert!(result.components.iter().all(|p| p.score == 100.0));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.chance, Chance::VeryHigh);
    }

    #[test]
    fn test_shares_cannot_exceed_views() {
        let form = Form::new()
            .with("views", 100)
            .with("followers", 100)
            .with("likes", 10)
            .with("comments", 1)
            .with("shares", 500)
            .with("completionRate", 50);
        let errors = ViralPotential::validate(&form).unwrap_err();
        assert_eq!(errors.get("shares"), Some("Shares cannot exceed views"));
    }
}
