//! Combined monthly income from video rewards and brand deals

use serde::{Deserialize, Serialize};

use super::sponsorship_rate::post_rate;
use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::Niche;
use crate::constants::{CREATOR_REWARDS_RPM_MAX, CREATOR_REWARDS_RPM_MIN, MAX_FOLLOWERS, MAX_VIEWS, NICHE_RPM_MULTIPLIERS};
use crate::factors::lookup;
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_currency, format_percent};
use crate::math::{percent_of, round_cents};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const FOLLOWERS: NumberField = NumberField::count("followers", "Followers", 1_000.0, MAX_FOLLOWERS);
const AVERAGE_VIEWS: NumberField = NumberField::count("averageViews", "Average views per post", 1.0, MAX_VIEWS);
const POSTS: NumberField = NumberField::count("postsPerMonth", "Posts per month", 1.0, 300.0);
const DEALS: NumberField = NumberField::count("brandDealsPerMonth", "Brand deals per month", 0.0, 60.0);
const ENGAGEMENT_RATE: NumberField = NumberField::percent("engagementRate", "Engagement rate", 0.01, 100.0);
const NICHE: ChoiceField = ChoiceField::of::<Niche>("niche", "Niche");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "monthly-earnings",
    name: "Monthly Earnings Calculator",
    category: Category::Earnings,
    description: "Estimate total monthly income from video rewards and brand deals.",
    fields: &[
        Field::Number(FOLLOWERS),
        Field::Number(AVERAGE_VIEWS),
        Field::Number(POSTS),
        Field::Number(DEALS),
        Field::Number(ENGAGEMENT_RATE),
        Field::Choice(NICHE),
    ],
};

static TOTAL_STEPS: [(f64, Rating); 3] = quality(10_000.0, 2_000.0, 500.0);
static TOTAL_RATING: Ladder<Rating> = Ladder::at_least(&TOTAL_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEarningsInput {
    pub followers: f64,
    pub average_views: f64,
    pub posts_per_month: f64,
    pub brand_deals_per_month: f64,
    pub engagement_rate: f64,
    pub niche: Niche,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEarningsResult {
    pub creator_rewards: f64,
    pub brand_deals: f64,
    pub rate_per_deal: f64,
    pub total: f64,
    pub annual: f64,
    pub rating: Rating,
}

pub struct MonthlyEarnings;

impl Calculator for MonthlyEarnings {
    type Input = MonthlyEarningsInput;
    type Output = MonthlyEarningsResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<MonthlyEarningsInput, FieldErrors> {
        let mut check = Checker::new(form);
        let followers = check.number(&FOLLOWERS);
        let average_views = check.number(&AVERAGE_VIEWS);
        let posts_per_month = check.number(&POSTS);
        let brand_deals_per_month = check.number(&DEALS);
        let engagement_rate = check.number(&ENGAGEMENT_RATE);
        let niche = check.choice::<Niche>(&NICHE);
        check.finish(|| {
            Some(MonthlyEarningsInput {
                followers: followers?,
                average_views: average_views?,
                posts_per_month: posts_per_month?,
                brand_deals_per_month: brand_deals_per_month?,
                engagement_rate: engagement_rate?,
                niche: niche?,
            })
        })
    }

    fn calculate(input: &MonthlyEarningsInput) -> MonthlyEarningsResult {
        let midpoint_rpm = (CREATOR_REWARDS_RPM_MIN + CREATOR_REWARDS_RPM_MAX) / 2.0;
        let monthly_views = input.average_views * input.posts_per_month;
        let creator_rewards =
            round_cents(monthly_views / 1_000.0 * midpoint_rpm * lookup(NICHE_RPM_MULTIPLIERS, input.niche));

        let rate_per_deal = round_cents(post_rate(input.followers, input.engagement_rate, input.niche).midpoint());
        let brand_deals = round_cents(rate_per_deal * input.brand_deals_per_month);
        let total = round_cents(creator_rewards + brand_deals);

        MonthlyEarningsResult {
            creator_rewards,
            brand_deals,
            rate_per_deal,
            total,
            annual: round_cents(total * 12.0),
            rating: TOTAL_RATING.classify(total),
        }
    }

    fn interpret(_input: &MonthlyEarningsInput, result: &MonthlyEarningsResult) -> String {
        let opening = format!(
            "You could earn about {} a month ({} a year): {} from video rewards and {} from brand deals.",
            format_currency(result.total),
            format_currency(result.annual),
            format_currency(result.creator_rewards),
            format_currency(result.brand_deals),
        );
        let deal_share = percent_of(result.brand_deals, result.total);
        let verdict = match result.rating {
            Rating::Excellent => "That is a full-time income from content.".to_string(),
            Rating::Good => "That is a serious side income and a realistic path to going full-time.".to_string(),
            Rating::Average => "That is a useful side income; adding a brand deal or two moves it quickly.".to_string(),
            Rating::BelowAverage if result.brand_deals == 0.0 => {
                "Video rewards alone pay little. Brand deals are usually the biggest lever.".to_string()
            }
            Rating::BelowAverage => format!(
                "Brand deals make up {} of this; grow views to lift the rest.",
                format_percent(deal_share, 0)
            ),
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &MonthlyEarningsResult) -> Summary {
        Summary::new(result.total, Unit::Currency)
            .rated(result.rating)
            .metric("creatorRewards", "Video rewards", result.creator_rewards, Unit::Currency)
            .metric("brandDeals", "Brand deals", result.brand_deals, Unit::Currency)
            .metric("ratePerDeal", "Rate per deal", result.rate_per_deal, Unit::Currency)
            .metric("annual", "Annual", result.annual, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(deals: f64) -> MonthlyEarningsInput {
        MonthlyEarningsInput {
            followers: 50_000.0,
            average_views: 20_000.0,
            posts_per_month: 20.0,
            brand_deals_per_month: deals,
            engagement_rate: 6.0,
            niche: Niche::Fitness,
        }
    }

    #[test]
    fn test_rewards_plus_deals() {
        let result = MonthlyEarnings::calculate(&input(2.0));
        assert_eq!(result.creator_rewards, 336.0);
        assert_eq!(result.rate_per_deal, 1_137.5);
        assert_eq!(result.brand_deals, 2_275.0);
        assert_eq!(result.total, 2_611.0);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_no_deals() {
        let result = MonthlyEarnings::calculate(&input(0.0));
        assert_eq!(result.brand_deals, 0.0);
        assert_eq!(result.total, 336.0);
        assert_eq!(result.rating, Rating::BelowAverage);
    }
}
