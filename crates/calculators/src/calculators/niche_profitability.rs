//! Monthly income potential of a niche across three revenue streams
//!
//! Each stream is an explicit factor pipeline so the result shows which
//! multipliers drove the estimate:
//!
//! - video rewards: monthly views / 1,000 x midpoint rewards RPM x niche RPM
//! - brand deals: tier post rate x niche premium x engagement x deals per month
//! - affiliate: monthly views x click rate x niche conversion x order value x commission
//!
//! Niches missing from a table fall back to the neutral multiplier, which for
//! affiliate conversion reads as 1%.

use serde::{Deserialize, Serialize};

use super::sponsorship_rate::post_rate;
use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::{Choice, FollowerTier, Niche};
use crate::constants::{
    AFFILIATE_CLICK_RATE, AFFILIATE_COMMISSION_RATE, AFFILIATE_ORDER_VALUE, CREATOR_REWARDS_RPM_MAX,
    CREATOR_REWARDS_RPM_MIN, MAX_FOLLOWERS, MAX_VIEWS, NICHE_AFFILIATE_CONVERSION,
    NICHE_RPM_MULTIPLIERS,
};
use crate::factors::{FactorChain, lookup};
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_currency, format_percent};
use crate::math::{percent_of, round_cents};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const NICHE: ChoiceField = ChoiceField::of::<Niche>("niche", "Niche");
const FOLLOWERS: NumberField = NumberField::count("followers", "Followers", 1_000.0, MAX_FOLLOWERS);
const AVERAGE_VIEWS: NumberField = NumberField::count("averageViews", "Average views per post", 1.0, MAX_VIEWS);
const POSTS: NumberField = NumberField::count("postsPerMonth", "Posts per month", 1.0, 300.0);
const ENGAGEMENT_RATE: NumberField = NumberField::percent("engagementRate", "Engagement rate", 0.01, 100.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "niche-profitability",
    name: "Niche Profitability Calculator",
    category: Category::Business,
    description: "Compare how much a niche can earn from rewards, brand deals and affiliate links.",
    fields: &[
        Field::Choice(NICHE),
        Field::Number(FOLLOWERS),
        Field::Number(AVERAGE_VIEWS),
        Field::Number(POSTS),
        Field::Number(ENGAGEMENT_RATE),
    ],
};

static TOTAL_STEPS: [(f64, Rating); 3] = quality(10_000.0, 2_000.0, 500.0);
static TOTAL_RATING: Ladder<Rating> = Ladder::at_least(&TOTAL_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheInput {
    pub niche: Niche,
    pub followers: f64,
    pub average_views: f64,
    pub posts_per_month: f64,
    pub engagement_rate: f64,
}

/// One income stream and the pipeline that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub key: &'static str,
    pub label: &'static str,
    pub base: f64,
    pub factors: FactorChain,
    pub monthly: f64,
}

impl Stream {
    fn new(key: &'static str, label: &'static str, base: f64, factors: FactorChain) -> Self {
        let monthly = round_cents(factors.apply(base));
        Self {
            key,
            label,
            base,
            factors,
            monthly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheResult {
    pub tier: FollowerTier,
    pub streams: Vec<Stream>,
    pub total_monthly: f64,
    pub annual: f64,
    pub rating: Rating,
}

impl NicheResult {
    pub fn stream(&self, key: &str) -> Option<&Stream> {
        self.streams.iter().find(|s| s.key == key)
    }

    /// Stream contributing the most income
    pub fn top_stream(&self) -> Option<&Stream> {
        self.streams.iter().max_by(|a, b| a.monthly.total_cmp(&b.monthly))
    }
}

pub struct NicheProfitability;

impl Calculator for NicheProfitability {
    type Input = NicheInput;
    type Output = NicheResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<NicheInput, FieldErrors> {
        let mut check = Checker::new(form);
        let niche = check.choice::<Niche>(&NICHE);
        let followers = check.number(&FOLLOWERS);
        let average_views = check.number(&AVERAGE_VIEWS);
        let posts_per_month = check.number(&POSTS);
        let engagement_rate = check.number(&ENGAGEMENT_RATE);
        check.finish(|| {
            Some(NicheInput {
                niche: niche?,
                followers: followers?,
                average_views: average_views?,
                posts_per_month: posts_per_month?,
                engagement_rate: engagement_rate?,
            })
        })
    }

    fn calculate(input: &NicheInput) -> NicheResult {
        let monthly_views = input.average_views * input.posts_per_month;

        let rewards = Stream::new(
            "creatorRewards",
            "Video rewards",
            monthly_views / 1_000.0,
            FactorChain::new()
                .then("rpm", (CREATOR_REWARDS_RPM_MIN + CREATOR_REWARDS_RPM_MAX) / 2.0)
                .then("niche", lookup(NICHE_RPM_MULTIPLIERS, input.niche)),
        );

        let rate = post_rate(input.followers, input.engagement_rate, input.niche);
        let thousands = input.followers / 1_000.0;
        let band_midpoint = (rate.band.rate_per_thousand_min + rate.band.rate_per_thousand_max) / 2.0;
        let mut deal_factors = FactorChain::new().then("tierRate", band_midpoint);
        for factor in rate.factors.factors() {
            deal_factors = deal_factors.then(factor.name, factor.value);
        }
        let brand_deals = Stream::new(
            "brandDeals",
            "Brand deals",
            thousands,
            deal_factors.then("dealsPerMonth", rate.band.deals_per_month),
        );

        let affiliate = Stream::new(
            "affiliate",
            "Affiliate links",
            monthly_views,
            FactorChain::new()
                .then("clickRate", AFFILIATE_CLICK_RATE / 100.0)
                .then("conversion", lookup(NICHE_AFFILIATE_CONVERSION, input.niche) / 100.0)
                .then("orderValue", AFFILIATE_ORDER_VALUE)
                .then("commission", AFFILIATE_COMMISSION_RATE / 100.0),
        );

        let streams = vec![rewards, brand_deals, affiliate];
        let total_monthly = round_cents(streams.iter().map(|s| s.monthly).sum());

        NicheResult {
            tier: rate.tier,
            streams,
            total_monthly,
            annual: round_cents(total_monthly * 12.0),
            rating: TOTAL_RATING.classify(total_monthly),
        }
    }

    fn interpret(input: &NicheInput, result: &NicheResult) -> String {
        let mut text = format!(
            "{} content at your size could earn about {} a month ({} a year).",
            input.niche.label(),
            format_currency(result.total_monthly),
            format_currency(result.annual),
        );
        if let Some(top) = result.top_stream() {
            text.push_str(&format!(
                " {} is the biggest stream at {} ({} of the total).",
                top.label,
                format_currency(top.monthly),
                format_percent(percent_of(top.monthly, result.total_monthly), 0),
            ));
        }
        let verdict = match result.rating {
            Rating::Excellent => " This niche can support a full-time creator business.",
            Rating::Good => " A strong niche for monetization; diversify across all three streams.",
            Rating::Average => " A workable niche. Growth and consistent posting will matter most.",
            Rating::BelowAverage => " Earnings are modest at this size. Focus on growing the audience first.",
        };
        text.push_str(verdict);
        text
    }

    fn summarize(result: &NicheResult) -> Summary {
        let mut summary = Summary::new(result.total_monthly, Unit::Currency).rated(result.rating);
        for stream in &result.streams {
            summary = summary.metric(stream.key, stream.label, stream.monthly, Unit::Currency);
        }
        summary.metric("annual", "Annual", result.annual, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(niche: Niche) -> NicheInput {
        NicheInput {
            niche,
            followers: 100_000.0,
            average_views: 50_000.0,
            posts_per_month: 30.0,
            engagement_rate: 6.0,
        }
    }

    #[test]
    fn test_finance_streams() {
        let result = NicheProfitability::calculate(&input(Niche::Finance));
        assert_eq!(result.tier, FollowerTier::Mid);
        assert_eq!(result.stream("creatorRewards").map(|s| s.monthly), Some(2_100.0));
        assert_eq!(result.stream("brandDeals").map(|s| s.monthly), Some(4_725.0));
        assert_eq!(result.stream("affiliate").map(|s| s.monthly), Some(393.75));
        assert_eq!(result.total_monthly, 7_218.75);
        assert_eq!(result.annual, 86_625.0);
        assert_eq!(result.rating, Rating::Good);
        assert_eq!(result.top_stream().map(|s| s.key), Some("brandDeals"));
    }

    #[test]
    fn test_factor_breakdown_is_kept() {
        let result = NicheProfitability::calculate(&input(Niche::Finance));
        let deals = result.stream("brandDeals").map(|s| s.factors.clone()).unwrap_or_default();
        assert_eq!(deals.get("niche"), Some(1.8));
        assert_eq!(deals.get("engagement"), Some(1.25));
        assert_eq!(deals.get("dealsPerMonth"), Some(2.0));
    }

    #[test]
    fn test_higher_paying_niche_earns_more() {
        let finance = NicheProfitability::calculate(&input(Niche::Finance)).total_monthly;
        let comedy = NicheProfitability::calculate(&input(Niche::Comedy)).total_monthly;
        assert!(finance > comedy);
    }
}
