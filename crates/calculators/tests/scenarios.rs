//! End-to-end checks through the registry, the way the CLI and site call it

use calculators::{CalcError, Form, registry};

#[test]
fn coins_convert_to_dollars_and_diamonds() {
    let report = registry::evaluate("coins-to-usd", &Form::new().with("coins", 1000)).unwrap();
    assert_eq!(report.summary.value, 10.5);
    assert_eq!(report.summary.metric_value("diamonds"), Some(500.0));
    assert_eq!(report.details["usdValue"], 10.5);
}

#[test]
fn engagement_rate_counts_every_interaction() {
    let form = Form::new()
        .with("followers", 10_000)
        .with("avgLikes", 400)
        .with("avgComments", 50)
        .with("avgShares", 50);
    let report = registry::evaluate("engagement-rate", &form).unwrap();
    assert_eq!(report.summary.value, 5.0);
    assert_eq!(report.summary.rating, Some("good"));
    assert_eq!(report.summary.metric_value("totalEngagements"), Some(500.0));
}

#[test]
fn rpm_is_benchmarked() {
    let form = Form::new().with("views", 100_000).with("earnings", 3);
    let report = registry::evaluate("rpm", &form).unwrap();
    assert_eq!(report.summary.value, 0.03);
    assert_eq!(report.summary.rating, Some("average"));
}

#[test]
fn break_even_rounds_units_up() {
    let form = Form::new()
        .with("adSpend", 1000)
        .with("costPerClick", 0.5)
        .with("conversionRate", 2)
        .with("productPrice", 50)
        .with("productCost", 20);
    let report = registry::evaluate("break-even", &form).unwrap();
    assert_eq!(report.summary.value, 34.0);
    assert_eq!(report.summary.metric_value("profitPerSale"), Some(30.0));
}

#[test]
fn shop_commission_above_cap_never_calculates() {
    let form = Form::new()
        .with("productPrice", 25)
        .with("unitsSold", 200)
        .with("commissionRate", 25);

    let validation = registry::check("shop-commission", &form).unwrap();
    assert!(!validation.valid);
    assert!(validation.errors.contains("commissionRate"));

    let Err(CalcError::Invalid(errors)) = registry::evaluate("shop-commission", &form) else {
        panic!("an invalid form must not produce a report");
    };
    assert_eq!(errors, validation.errors);
}

#[test]
fn creator_tax_parts_add_up() {
    let form = Form::new()
        .with("annualIncome", 100_000)
        .with("businessExpenses", 20_000)
        .with("filingStatus", "single")
        .with("state", "medium");
    let summary = registry::evaluate("creator-tax", &form).unwrap().summary;

    let parts = ["selfEmploymentTax", "federalTax", "stateTax"]
        .iter()
        .map(|key| summary.metric_value(key).unwrap())
        .sum::<f64>();
    assert!((parts - summary.value).abs() < 0.005);
    assert_eq!(summary.value, 26_713.24);

    let effective = summary.metric_value("effectiveTaxRate").unwrap();
    assert!((effective - summary.value / 100_000.0 * 100.0).abs() < 0.005);
}

#[test]
fn unknown_slug_is_an_error() {
    let error = registry::evaluate("tip-jar", &Form::new()).unwrap_err();
    assert_eq!(error.to_string(), "unknown calculator \"tip-jar\"");
}

#[test]
fn form_from_json_drives_a_calculator() {
    let form = Form::from_json(&serde_json::json!({ "views": 1_000_000 }));
    let report = registry::evaluate("creator-fund", &form).unwrap();
    assert_eq!(report.summary.min, Some(20.0));
    assert_eq!(report.summary.max, Some(40.0));
}
