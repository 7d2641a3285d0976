//! Return on a month of content production

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_count, format_currency, format_percent};
use crate::math::{percent_of, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const POSTS: NumberField = NumberField::count("postsPerMonth", "Posts per month", 1.0, 300.0);
const HOURS_PER_POST: NumberField = NumberField::new("hoursPerPost", "Hours per post", Unit::Hours, 0.0, 100.0);
const HOURLY_RATE: NumberField = NumberField::currency("hourlyRate", "Hourly rate", 0.0, 10_000.0);
const PRODUCTION_COST: NumberField =
    NumberField::currency("productionCostPerPost", "Production cost per post", 0.0, 100_000.0);
const REVENUE_PER_POST: NumberField = NumberField::currency("revenuePerPost", "Revenue per post", 0.0, 1_000_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "content-calendar-roi",
    name: "Content Calendar ROI Calculator",
    category: Category::Business,
    description: "Weigh the time and money behind a posting schedule against what it earns.",
    fields: &[
        Field::Number(POSTS),
        Field::Number(HOURS_PER_POST),
        Field::Number(HOURLY_RATE),
        Field::Number(PRODUCTION_COST),
        Field::Number(REVENUE_PER_POST),
    ],
};

static ROI_STEPS: [(f64, Rating); 3] = quality(200.0, 100.0, 0.0);
static ROI_RATING: Ladder<Rating> = Ladder::at_least(&ROI_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCalendarInput {
    pub posts_per_month: f64,
    pub hours_per_post: f64,
    pub hourly_rate: f64,
    pub production_cost_per_post: f64,
    pub revenue_per_post: f64,
}

impl ContentCalendarInput {
    /// Time plus production cost of one post
    fn cost_per_post(&self) -> f64 {
        self.hours_per_post * self.hourly_rate + self.production_cost_per_post
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCalendarResult {
    pub cost_per_post: f64,
    pub monthly_hours: f64,
    pub monthly_cost: f64,
    pub monthly_revenue: f64,
    pub monthly_profit: f64,
    pub roi: f64,
    pub rating: Rating,
}

pub struct ContentCalendarRoi;

impl Calculator for ContentCalendarRoi {
    type Input = ContentCalendarInput;
    type Output = ContentCalendarResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<ContentCalendarInput, FieldErrors> {
        let mut check = Checker::new(form);
        let posts_per_month = check.number(&POSTS);
        let hours_per_post = check.number(&HOURS_PER_POST);
        let hourly_rate = check.number(&HOURLY_RATE);
        let production_cost_per_post = check.number(&PRODUCTION_COST);
        let revenue_per_post = check.number(&REVENUE_PER_POST);

        let cost = match (hours_per_post, hourly_rate, production_cost_per_post) {
            (Some(hours), Some(rate), Some(production)) => Some(hours * rate + production),
            _ => None,
        };
        if cost.is_some_and(|cost| cost <= 0.0) {
            check.reject(HOURLY_RATE.name, "Add an hourly rate or production cost so ROI can be measured");
        }

        check.finish(|| {
            Some(ContentCalendarInput {
                posts_per_month: posts_per_month?,
                hours_per_post: hours_per_post?,
                hourly_rate: hourly_rate?,
                production_cost_per_post: production_cost_per_post?,
                revenue_per_post: revenue_per_post?,
            })
        })
    }

    fn calculate(input: &ContentCalendarInput) -> ContentCalendarResult {
        let cost_per_post = input.cost_per_post();
        let monthly_cost = cost_per_post * input.posts_per_month;
        let monthly_revenue = input.revenue_per_post * input.posts_per_month;
        let monthly_profit = monthly_revenue - monthly_cost;
        let roi = round_to(percent_of(monthly_profit, monthly_cost), 2);

        ContentCalendarResult {
            cost_per_post: round_cents(cost_per_post),
            monthly_hours: round_to(input.hours_per_post * input.posts_per_month, 1),
            monthly_cost: round_cents(monthly_cost),
            monthly_revenue: round_cents(monthly_revenue),
            monthly_profit: round_cents(monthly_profit),
            roi,
            rating: ROI_RATING.classify(roi),
        }
    }

    fn interpret(input: &ContentCalendarInput, result: &ContentCalendarResult) -> String {
        let opening = format!(
            "{} posts a month cost {} ({} each) and earn {}, leaving {} profit for an ROI of {}.",
            format_count(input.posts_per_month),
            format_currency(result.monthly_cost),
            format_currency(result.cost_per_post),
            format_currency(result.monthly_revenue),
            format_currency(result.monthly_profit),
            format_percent(result.roi, 1),
        );
        let verdict = match result.rating {
            Rating::Excellent => "Your content schedule is highly profitable; more output could pay off.",
            Rating::Good => "Your time is well rewarded at this posting pace.",
            Rating::Average => "The schedule pays for itself, but only just. Batch filming can cut the hours per post.",
            Rating::BelowAverage => {
                "The schedule costs more than it earns. Post fewer, stronger videos or find better-paying formats."
            }
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &ContentCalendarResult) -> Summary {
        Summary::new(result.roi, Unit::Percent)
            .rated(result.rating)
            .metric("monthlyCost", "Monthly cost", result.monthly_cost, Unit::Currency)
            .metric("monthlyRevenue", "Monthly revenue", result.monthly_revenue, Unit::Currency)
            .metric("monthlyProfit", "Monthly profit", result.monthly_profit, Unit::Currency)
            .metric("costPerPost", "Cost per post", result.cost_per_post, Unit::Currency)
            .metric("monthlyHours", "Hours per month", result.monthly_hours, Unit::Hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_roi() {
        let result = ContentCalendarRoi::calculate(&ContentCalendarInput {
            posts_per_month: 20.0,
            hours_per_post: 3.0,
            hourly_rate: 25.0,
            production_cost_per_post: 25.0,
            revenue_per_post: 300.0,
        });
        assert_eq!(result.cost_per_post, 100.0);
        assert_eq!(result.monthly_cost, 2_000.0);
        assert_eq!(result.monthly_revenue, 6_000.0);
        assert_eq!(result.monthly_profit, 4_000.0);
        assert_eq!(result.roi, 200.0);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_zero_cost_rejected() {
        let form = Form::new()
            .with("postsPerMonth", 20)
            .with("hoursPerPost", 2)
            .with("hourlyRate", 0)
            .with("productionCostPerPost", 0)
            .with("revenuePerPost", 100);
        let errors = ContentCalendarRoi::validate(&form).unwrap_err();
        assert_eq!(
            errors.get("hourlyRate"),
            Some("Add an hourly rate or production cost so ROI can be measured")
        );
    }
}
