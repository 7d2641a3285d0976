//! Full set of paid-campaign unit costs: CPM, CPV, CPC, CPA and CTR

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::constants::MAX_IMPRESSIONS;
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_currency, format_percent};
use crate::math::{per_thousand, percent_of, ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const AD_SPEND: NumberField = NumberField::currency("adSpend", "Ad spend", 0.01, 10_000_000.0);
const IMPRESSIONS: NumberField = NumberField::count("impressions", "Impressions", 1.0, MAX_IMPRESSIONS);
const VIDEO_VIEWS: NumberField = NumberField::count("videoViews", "Video views", 1.0, MAX_IMPRESSIONS);
const CLICKS: NumberField = NumberField::count("clicks", "Clicks", 1.0, MAX_IMPRESSIONS);
const CONVERSIONS: NumberField = NumberField::count("conversions", "Conversions", 1.0, MAX_IMPRESSIONS);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "ad-cost-metrics",
    name: "Ad Cost Metrics Calculator",
    category: Category::Advertising,
    description: "Break a campaign down into CPM, cost per view, cost per click and cost per acquisition.",
    fields: &[
        Field::Number(AD_SPEND),
        Field::Number(IMPRESSIONS),
        Field::Number(VIDEO_VIEWS),
        Field::Number(CLICKS),
        Field::Number(CONVERSIONS),
    ],
};

static CTR_STEPS: [(f64, Rating); 3] = quality(2.0, 1.0, 0.5);
static CTR_RATING: Ladder<Rating> = Ladder::at_least(&CTR_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCostInput {
    pub ad_spend: f64,
    pub impressions: f64,
    pub video_views: f64,
    pub clicks: f64,
    pub conversions: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCostResult {
    pub cpm: f64,
    /// In cents
    pub cpv: f64,
    pub cpc: f64,
    pub cpa: f64,
    pub ctr: f64,
    pub click_to_conversion: f64,
    pub rating: Rating,
}

pub struct AdCostMetrics;

impl Calculator for AdCostMetrics {
    type Input = AdCostInput;
    type Output = AdCostResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<AdCostInput, FieldErrors> {
        let mut check = Checker::new(form);
        let ad_spend = check.number(&AD_SPEND);
        let impressions = check.number(&IMPRESSIONS);
        let video_views = check.number(&VIDEO_VIEWS);
        let clicks = check.number(&CLICKS);
        let conversions = check.number(&CONVERSIONS);
        check.not_exceeding(&VIDEO_VIEWS, video_views, impressions, "impressions");
        check.not_exceeding(&CLICKS, clicks, impressions, "impressions");
        check.not_exceeding(&CONVERSIONS, conversions, clicks, "clicks");
        check.finish(|| {
            Some(AdCostInput {
                ad_spend: ad_spend?,
                impressions: impressions?,
                video_views: video_views?,
                clicks: clicks?,
                conversions: conversions?,
            })
        })
    }

    fn calculate(input: &AdCostInput) -> AdCostResult {
        let ctr = round_to(percent_of(input.clicks, input.impressions), 2);

        AdCostResult {
            cpm: round_cents(per_thousand(input.ad_spend, input.impressions)),
            cpv: round_to(ratio(input.ad_spend, input.video_views) * 100.0, 2),
            cpc: round_cents(ratio(input.ad_spend, input.clicks)),
            cpa: round_cents(ratio(input.ad_spend, input.conversions)),
            ctr,
            click_to_conversion: round_to(percent_of(input.conversions, input.clicks), 2),
            rating: CTR_RATING.classify(ctr),
        }
    }

    fn interpret(_input: &AdCostInput, result: &AdCostResult) -> String {
        let opening = format!(
            "Each customer cost {} to acquire, with clicks at {} each and a click-through rate of {}.",
            format_currency(result.cpa),
            format_currency(result.cpc),
            format_percent(result.ctr, 2),
        );
        let verdict = match result.rating {
            Rating::Excellent => "Your creative is pulling clicks far above the norm.",
            Rating::Good => "A strong click-through rate; the ad is resonating.",
            Rating::Average => "A typical click-through rate. Test new hooks in the first two seconds.",
            Rating::BelowAverage => "Few viewers click. Try a clearer call to action or a different audience.",
        };
        format!(
            "{opening} {verdict} {} of clicks turned into conversions.",
            format_percent(result.click_to_conversion, 1)
        )
    }

    fn summarize(result: &AdCostResult) -> Summary {
        Summary::new(result.cpa, Unit::Currency)
            .rated(result.rating)
            .metric("cpm", "CPM", result.cpm, Unit::Currency)
            .metric("cpv", "Cost per view", result.cpv, Unit::Cents)
            .metric("cpc", "Cost per click", result.cpc, Unit::Currency)
            .metric("ctr", "Click-through rate", result.ctr, Unit::Percent)
            .metric("clickToConversion", "Click to conversion", result.click_to_conversion, Unit::Percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_breakdown() {
        let result = AdCostMetrics::calculate(&AdCostInput {
            ad_spend: 1_000.0,
            impressions: 200_000.0,
            video_views: 50_000.0,
            clicks: 2_000.0,
            conversions: 50.0,
        });
        assert_eq!(result.cpm, 5.0);
        assert_eq!(result.cpv, 2.0);
        assert_eq!(result.cpc, 0.5);
        assert_eq!(result.cpa, 20.0);
        assert_eq!(result.ctr, 1.0);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn test_funnel_limits() {
        let form = Form::new()
            .with("adSpend", 100)
            .with("impressions", 1_000)
            .with("videoViews", 500)
            .with("clicks", 50)
            .with("conversions", 60);
        let errors = AdCostMetrics::validate(&form).unwrap_err();
        assert_eq!(errors.get("conversions"), Some("Conversions cannot exceed clicks"));
    }

    #[test]
    fn test_zero_clicks_rejected() {
        let form = Form::new()
            .with("adSpend", 100)
            .with("impressions", 1_000)
            .with("videoViews", 500)
            .with("clicks", 0)
            .with("conversions", 0);
        let errors = AdCostMetrics::validate(&form).unwrap_err();
        assert!(errors.contains("clicks"));
        assert!(errors.contains("conversions"));
    }
}
