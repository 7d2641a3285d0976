//! The catalogue of every calculator, addressable by slug

use tracing::debug;

use crate::calculator::{Category, DynCalculator, Report};
use crate::calculators::*;
use crate::choices::Choice;
use crate::error::CalcError;
use crate::validation::{Form, Validation};

static CALCULATORS: &[&dyn DynCalculator] = &[
    // Coins & currency
    &CoinsToUsd,
    &CoinsToDiamonds,
    &DiamondsToCurrency,
    &LiveGiftEarnings,
    // Earnings
    &CreatorFund,
    &CreatorRewards,
    &Rpm,
    &AdRevenue,
    &ShopCommission,
    &AffiliateEarnings,
    &SubscriptionRevenue,
    &SponsorshipRate,
    &MonthlyEarnings,
    // Engagement
    &EngagementRate,
    &CompletionRate,
    &SaveRate,
    &ShareRatio,
    &ProfileConversion,
    // Advertising
    &Cpm,
    &AdCostMetrics,
    &ConversionRate,
    // Business
    &CampaignRoi,
    &BreakEven,
    &Cac,
    &Ltv,
    &SponsorshipRoi,
    &ContentCalendarRoi,
    &NicheProfitability,
    &ProductMargin,
    // Growth
    &FollowerGrowth,
    &FollowerProjection,
    // Performance
    &ViralPotential,
    &VideoPerformance,
    &WatchTime,
    // Tax
    &CreatorTax,
];

/// Every calculator in display order
pub fn all() -> &'static [&'static dyn DynCalculator] {
    CALCULATORS
}

pub fn find(slug: &str) -> Option<&'static dyn DynCalculator> {
    let slug = slug.trim();
    let found = CALCULATORS.iter().copied().find(|calc| calc.meta().slug == slug);
    if found.is_none() {
        debug!(slug, "no calculator registered for slug");
    }
    found
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static dyn DynCalculator> {
    CALCULATORS.iter().copied().filter(move |calc| calc.meta().category == category)
}

/// Non-empty categories with their calculators, in navigation order
pub fn grouped() -> Vec<(Category, Vec<&'static dyn DynCalculator>)> {
    Category::OPTIONS
        .iter()
        .map(|&category| (category, by_category(category).collect::<Vec<_>>()))
        .filter(|(_, calcs)| !calcs.is_empty())
        .collect()
}

/// Validate a form against the calculator named by `slug`
pub fn check(slug: &str, form: &Form) -> Result<Validation, CalcError> {
    let calc = find(slug).ok_or_else(|| CalcError::UnknownCalculator(slug.to_string()))?;
    Ok(calc.check(form))
}

/// Validate and, if valid, calculate
pub fn evaluate(slug: &str, form: &Form) -> Result<Report, CalcError> {
    let calc = find(slug).ok_or_else(|| CalcError::UnknownCalculator(slug.to_string()))?;
    let report = calc.evaluate(form);
    debug!(slug, valid = report.is_ok(), "evaluated calculator");
    report.map_err(CalcError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = all().iter().map(|calc| calc.meta().slug).collect();
        assert_eq!(slugs.len(), all().len());
        assert_eq!(all().len(), 35);
    }

    #[test]
    fn test_field_names_are_unique_per_calculator() {
        for calc in all() {
            let info = calc.meta();
            let names: HashSet<_> = info.fields.iter().map(|f| f.name()).collect();
            assert_eq!(names.len(), info.fields.len(), "{}", info.slug);
        }
    }

    #[test]
    fn test_every_category_has_calculators() {
        assert_eq!(grouped().len(), Category::OPTIONS.len());
    }

    #[test]
    fn test_find_and_unknown() {
        assert_eq!(find("rpm").map(|c| c.meta().name), Some("RPM Calculator"));
        assert!(find("not-a-calculator").is_none());
        assert!(matches!(
            evaluate("not-a-calculator", &Form::new()),
            Err(CalcError::UnknownCalculator(_))
        ));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        for calc in all() {
            let validation = calc.check(&Form::new());
            assert!(!validation.valid, "{}", calc.meta().slug);
            assert_eq!(validation.errors.len(), calc.meta().fields.len(), "{}", calc.meta().slug);
        }
    }

    #[test]
    fn test_evaluate_report_carries_details() {
        let form = Form::new().with("coins", 1_000);
        let report = evaluate("coins-to-usd", &form).unwrap();
        assert_eq!(report.slug, "coins-to-usd");
        assert_eq!(report.summary.value, 10.5);
        assert_eq!(report.inputs["coins"], 1_000.0);
        assert_eq!(report.details["diamonds"], 500.0);
        assert!(!report.summary.interpretation.is_empty());
    }

    #[test]
    fn test_invalid_form_never_calculates() {
        let form = Form::new()
            .with("productPrice", 25)
            .with("unitsSold", 200)
            .with("commissionRate", 25);
        let err = evaluate("shop-commission", &form).unwrap_err();
        let errors = err.field_errors().cloned().unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("commissionRate"));
    }
}
