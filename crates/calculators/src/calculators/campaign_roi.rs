//! Return on a paid campaign

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::fields::{Field, NumberField, Unit};
use crate::format::{format_currency, format_number, format_percent};
use crate::math::{percent_of, ratio, round_cents, round_to};
use crate::rating::{Ladder, Rating, quality};
use crate::validation::{Checker, FieldErrors, Form};

const AD_SPEND: NumberField = NumberField::currency("adSpend", "Ad spend", 1.0, 10_000_000.0);
const OTHER_COSTS: NumberField = NumberField::currency("otherCosts", "Other costs", 0.0, 10_000_000.0);
const REVENUE: NumberField = NumberField::currency("revenue", "Revenue", 0.0, 100_000_000.0);

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "campaign-roi",
    name: "Campaign ROI Calculator",
    category: Category::Business,
    description: "Work out the profit, ROI and ROAS of an ad campaign.",
    fields: &[
        Field::Number(AD_SPEND),
        Field::Number(OTHER_COSTS),
        Field::Number(REVENUE),
    ],
};

static ROI_STEPS: [(f64, Rating); 3] = quality(200.0, 100.0, 0.0);
static ROI_RATING: Ladder<Rating> = Ladder::at_least(&ROI_STEPS, Rating::BelowAverage);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub ad_spend: f64,
    pub other_costs: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    pub total_cost: f64,
    pub profit: f64,
    pub roi: f64,
    /// Revenue per dollar of ad spend
    pub roas: f64,
    pub rating: Rating,
}

pub struct CampaignRoi;

impl Calculator for CampaignRoi {
    type Input = CampaignInput;
    type Output = CampaignResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<CampaignInput, FieldErrors> {
        let mut check = Checker::new(form);
        let ad_spend = check.number(&AD_SPEND);
        let other_costs = check.number(&OTHER_COSTS);
        let revenue = check.number(&REVENUE);
        check.finish(|| {
            Some(CampaignInput {
                ad_spend: ad_spend?,
                other_costs: other_costs?,
                revenue: revenue?,
            })
        })
    }

    fn calculate(input: &CampaignInput) -> CampaignResult {
        let total_cost = input.ad_spend + input.other_costs;
        let profit = input.revenue - total_cost;
        let roi = round_to(percent_of(profit, total_cost), 2);

        CampaignResult {
            total_cost: round_cents(total_cost),
            profit: round_cents(profit),
            roi,
            roas: round_to(ratio(input.revenue, input.ad_spend), 2),
            rating: ROI_RATING.classify(roi),
        }
    }

    fn interpret(input: &CampaignInput, result: &CampaignResult) -> String {
        let outcome = if result.profit >= 0.0 {
            format!("a profit of {}", format_currency(result.profit))
        } else {
            format!("a loss of {}", format_currency(result.profit.abs()))
        };
        let opening = format!(
            "{} in revenue against {} in costs is {outcome}, an ROI of {} and a ROAS of {}x.",
            format_currency(input.revenue),
            format_currency(result.total_cost),
            format_percent(result.roi, 1),
            format_number(result.roas, 2),
        );
        let verdict = match result.rating {
            Rating::Excellent => "This campaign more than tripled its money; scale it up.",
            Rating::Good => "A strong return. Consider increasing budget gradually.",
            Rating::Average => "The campaign pays for itself with a modest margin.",
            Rating::BelowAverage => "The campaign lost money. Review targeting, creative and offer before spending more.",
        };
        format!("{opening} {verdict}")
    }

    fn summarize(result: &CampaignResult) -> Summary {
        Summary::new(result.roi, Unit::Percent)
            .rated(result.rating)
            .metric("profit", "Profit", result.profit, Unit::Currency)
            .metric("roas", "ROAS", result.roas, Unit::Ratio)
            .metric("totalCost", "Total cost", result.total_cost, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profitable_campaign() {
        let result = CampaignRoi::calculate(&CampaignInput {
            ad_spend: 1_000.0,
            other_costs: 500.0,
            revenue: 4_500.0,
        });
        assert_eq!(result.profit, 3_000.0);
        assert_eq!(result.roi, 200.0);
        assert_eq!(result.roas, 4.5);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_losing_campaign() {
        let input = CampaignInput {
            ad_spend: 1_000.0,
            other_costs: 0.0,
            revenue: 400.0,
        };
        let result = CampaignRoi::calculate(&input);
        assert_eq!(result.roi, -60.0);
        assert_eq!(result.rating, Rating::BelowAverage);
        assert!(CampaignRoi::interpret(&input, &result).contains("a loss of $600.00"));
    }
}
