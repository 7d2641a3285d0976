//! Compound follower growth projected forward

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::{Choice, FollowerTier};
use crate::constants::{FOLLOWER_TIERS, MAX_FOLLOWERS};
use crate::factors::tier_band;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_number, format_percent};
use crate::validation::{Checker, FieldErrors, Form};

const CURRENT: NumberField = NumberField::count("currentFollowers", "Current followers", 1.0, MAX_FOLLOWERS);
const GROWTH_RATE: NumberField = NumberField::percent("monthlyGrowthRate", "Monthly growth rate", 0.0, 500.0);
const MONTHS: NumberField = NumberField::new("months", "Months", Unit::Months, 1.0, 60.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "follower-projection",
    name: "Follower Projection Calculator",
    category: Category::Growth,
    description: "Project your follower count forward at a steady monthly growth rate.",
    fields: &[Field::Number(CURRENT), Field::Number(GROWTH_RATE), Field::Number(MONTHS)],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub current_followers: f64,
    pub monthly_growth_rate: f64,
    pub months: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub month: u32,
    pub followers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub projected_followers: f64,
    pub gained: f64,
    pub current_tier: FollowerTier,
    pub projected_tier: FollowerTier,
    /// Months until the next tier at this rate. None at the top tier or with no growth.
    pub months_to_next_tier: Option<f64>,
    /// Follower count at the end of each month
    pub timeline: Vec<ProjectionPoint>,
}

fn grow(followers: f64, monthly_rate: f64, months: f64) -> f64 {
    (followers * (1.0 + monthly_rate / 100.0).powf(months)).floor()
}

/// Whole months of compounding needed to go from `current` to `target`
fn months_to_reach(current: f64, target: f64, monthly_rate: f64) -> Option<f64> {
    if monthly_rate <= 0.0 || target <= current {
        return None;
    }
    let months = (target / current).ln() / (1.0 + monthly_rate / 100.0).ln();
    months.is_finite().then(|| months.ceil())
}

pub struct FollowerProjection;

impl Calculator for FollowerProjection {
    type Input = ProjectionInput;
    type Output = ProjectionResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ProjectionInput, FieldErrors> {
        let mut check = Checker::new(form);
        let current_followers = check.number(&CURRENT);
        let monthly_growth_rate = check.number(&GROWTH_RATE);
        let months = check.number(&MONTHS);
        check.finish(|| {
            Some(ProjectionInput {
                current_followers: current_followers?,
                monthly_growth_rate: monthly_growth_rate?,
                months: months?,
            })
        })
    }

    fn calculate(input: &ProjectionInput) -> ProjectionResult {
        let projected_followers = grow(input.current_followers, input.monthly_growth_rate, input.months);
        let current_tier = tier_band(input.current_followers).tier;

        let next_tier_at = FOLLOWER_TIERS
            .iter()
            .find(|band| band.tier > current_tier)
            .map(|band| band.min_followers);

        let timeline = (1..=input.months.round() as u32)
            .map(|month| ProjectionPoint {
                month,
                followers: grow(input.current_followers, input.monthly_growth_rate, f64::from(month)),
            })
            .collect();

        ProjectionResult {
            projected_followers,
            gained: projected_followers - input.current_followers.floor(),
            current_tier,
            projected_tier: tier_band(projected_followers).tier,
            months_to_next_tier: next_tier_at
                .and_then(|target| months_to_reach(input.current_followers, target, input.monthly_growth_rate)),
            timeline,
        }
    }

    fn interpret(input: &ProjectionInput, result: &ProjectionResult) -> String {
        let mut text = format!(
            "Growing {} a month, {} followers would become {} in {} months (+{}).",
            format_percent(input.monthly_growth_rate, 1),
            format_count(input.current_followers),
            format_count(result.projected_followers),
            format_number(input.months, 0),
            format_count(result.gained),
        );
        if result.projected_tier > result.current_tier {
            text.push_str(&format!(
                " That moves you from {} to {} status.",
                result.current_tier.label().to_lowercase(),
                result.projected_tier.label().to_lowercase()
            ));
        } else if let Some(months) = result.months_to_next_tier {
            text.push_str(&format!(" At this pace you reach the next tier in about {} months.", format_number(months, 0)));
        } else if input.monthly_growth_rate == 0.0 {
            text.push_str(" Without growth the audience stays where it is.");
        }
        text
    }

    fn summarize(result: &ProjectionResult) -> Summary {
        let summary = Summary::new(result.projected_followers, Unit::Count)
            .rated(result.projected_tier)
            .metric("gained", "Followers gained", result.gained, Unit::Count);
        match result.months_to_next_tier {
            Some(months) => summary.metric("monthsToNextTier", "Months to next tier", months, Unit::Months),
            None => summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_projection() {
        let result = FollowerProjection::calculate(&ProjectionInput {
            current_followers: 10_000.0,
            monthly_growth_rate: 10.0,
            months: 12.0,
        });
        assert_eq!(result.projected_followers, 31_384.0);
        assert_eq!(result.gained, 21_384.0);
        assert_eq!(result.current_tier, FollowerTier::Micro);
        assert_eq!(result.projected_tier, FollowerTier::Micro);
        assert_eq!(result.months_to_next_tier, Some(25.0));
        assert_eq!(result.timeline.len(), 12);
        assert_eq!(result.timeline[0].followers, 11_000.0);
    }

    #[test]
    fn test_zero_growth() {
        let result = FollowerProjection::calculate(&ProjectionInput {
            current_followers: 5_000.0,
            monthly_growth_rate: 0.0,
            months: 6.0,
        });
        assert_eq!(result.projected_followers, 5_000.0);
        assert_eq!(result.gained, 0.0);
        assert_eq!(result.months_to_next_tier, None);
    }

    #[test]
    fn test_below_smallest_band_targets_the_tier_above() {
        let input = ProjectionInput {
            current_followers: 500.0,
            monthly_growth_rate: 10.0,
            months: 3.0,
        };
        let result = FollowerProjection::calculate(&input);
        assert_eq!(result.current_tier, FollowerTier::Nano);
        assert_eq!(result.projected_tier, FollowerTier::Nano);
        assert_eq!(result.months_to_next_tier, Some(32.0));
        assert!(FollowerProjection::interpret(&input, &result).contains("about 32 months"));
    }

    #[test]
    fn test_top_tier_has_no_next() {
        let result = FollowerProjection::calculate(&ProjectionInput {
            current_followers: 2_000_000.0,
            monthly_growth_rate: 5.0,
            months: 3.0,
        });
        assert_eq!(result.projected_tier, FollowerTier::Mega);
        assert_eq!(result.months_to_next_tier, None);
        assert_eq!(FollowerProjection::summarize(&result).rating, Some("mega"));
    }
}
