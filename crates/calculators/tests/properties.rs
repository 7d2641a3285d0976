//! Properties every registered calculator must hold

use calculators::{DynCalculator, Field, Form, Summary, Unit, registry};
use proptest::prelude::*;

const MAX_FIELDS: usize = 8;

/// Build a form with every number field placed `fractions[i]` of the way
/// through its range and every choice field set to some option.
fn form_within_bounds(calc: &dyn DynCalculator, fractions: &[f64], picks: &[usize]) -> Form {
    let mut form = Form::new();
    for (i, field) in calc.meta().fields.iter().enumerate() {
        match field {
            Field::Number(number) => {
                let value = (number.min + fractions[i] * (number.max - number.min)).clamp(number.min, number.max);
                form.set(number.name, value);
            }
            Field::Choice(choice) => {
                let options = choice.options();
                form.set(choice.name, options[picks[i] % options.len()].key);
            }
        }
    }
    form
}

/// True when the value prints back unchanged with two decimals
fn is_cents(value: f64) -> bool {
    format!("{value:.2}").parse::<f64>() == Ok(value)
}

fn money_is_rounded(summary: &Summary) -> bool {
    let mut values = Vec::new();
    if summary.unit == Unit::Currency {
        values.push(summary.value);
        values.extend(summary.min);
        values.extend(summary.max);
    }
    values.extend(
        summary
            .additional_metrics
            .iter()
            .filter(|m| m.unit == Unit::Currency)
            .map(|m| m.value),
    );
    values.into_iter().all(is_cents)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_forms_give_finite_rounded_results(
        fractions in prop::collection::vec(0.0f64..=1.0, MAX_FIELDS),
        picks in prop::collection::vec(0usize..32, MAX_FIELDS),
    ) {
        for calc in registry::all() {
            let slug = calc.meta().slug;
            let form = form_within_bounds(*calc, &fractions, &picks);
            let validation = calc.check(&form);
            let report = calc.evaluate(&form);
            prop_assert_eq!(validation.valid, report.is_ok(), "{}", slug);

            if let Ok(report) = report {
                prop_assert!(report.summary.is_finite(), "{} produced a non-finite number", slug);
                prop_assert!(money_is_rounded(&report.summary), "{} left money unrounded", slug);
                prop_assert!(!report.summary.interpretation.contains("NaN"), "{}", slug);
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        fractions in prop::collection::vec(0.0f64..=1.0, MAX_FIELDS),
        picks in prop::collection::vec(0usize..32, MAX_FIELDS),
    ) {
        for calc in registry::all() {
            let form = form_within_bounds(*calc, &fractions, &picks);
            prop_assert_eq!(calc.evaluate(&form), calc.evaluate(&form), "{}", calc.meta().slug);
        }
    }

    #[test]
    fn unparseable_numbers_are_reported(raw in "[a-z]{1,8}") {
        for calc in registry::all() {
            for field in calc.meta().fields {
                if let Field::Number(number) = field {
                    let form = Form::new().with(number.name, &raw);
                    let validation = calc.check(&form);
                    let expected = format!("{} must be a number", number.label);
                    prop_assert_eq!(validation.errors.get(number.name), Some(expected.as_str()));
                }
            }
        }
    }
}

#[test]
fn below_minimum_is_keyed_to_the_field() {
    for calc in registry::all() {
        for field in calc.meta().fields {
            if let Field::Number(number) = field {
                let form = Form::new().with(number.name, number.min - 1.0);
                let validation = calc.check(&form);
                let message = validation.errors.get(number.name);
                assert!(message.is_some(), "{}.{}", calc.meta().slug, number.name);
                assert!(!message.unwrap_or_default().ends_with("is required"));
            }
        }
    }
}

#[test]
fn above_maximum_is_keyed_to_the_field() {
    for calc in registry::all() {
        for field in calc.meta().fields {
            if let Field::Number(number) = field {
                let form = Form::new().with(number.name, number.max * 2.0 + 1.0);
                let validation = calc.check(&form);
                let message = validation.errors.get(number.name).unwrap_or_default();
                assert!(message.contains("cannot exceed"), "{}.{}", calc.meta().slug, number.name);
            }
        }
    }
}

#[test]
fn unknown_choices_are_rejected() {
    for calc in registry::all() {
        for field in calc.meta().fields {
            if let Field::Choice(choice) = field {
                let form = Form::new().with(choice.name, "definitely-not-an-option");
                let validation = calc.check(&form);
                assert!(validation.errors.contains(choice.name), "{}.{}", calc.meta().slug, choice.name);
            }
        }
    }
}

/// Rank of a rating tag, lowest first
fn rank(tag: Option<&str>) -> usize {
    ["below-average", "average", "good", "excellent"]
        .iter()
        .position(|t| Some(*t) == tag)
        .unwrap_or(0)
}

fn ratings_along(slug: &str, base: &Form, field: &str, values: &[f64]) -> Vec<usize> {
    values
        .iter()
        .map(|value| {
            let form = base.clone().with(field, value);
            let report = registry::evaluate(slug, &form).unwrap();
            rank(report.summary.rating)
        })
        .collect()
}

#[test]
fn ratings_never_drop_as_the_driving_input_rises() {
    let cases: Vec<(&str, Form, &str, Vec<f64>)> = vec![
        (
            "engagement-rate",
            Form::new().with("followers", 10_000).with("avgComments", 0).with("avgShares", 0),
            "avgLikes",
            vec![0.0, 100.0, 250.0, 499.0, 500.0, 900.0, 1_000.0, 5_000.0],
        ),
        (
            "completion-rate",
            Form::new().with("views", 1_000),
            "completedViews",
            vec![0.0, 399.0, 400.0, 600.0, 799.0, 800.0, 1_000.0],
        ),
        (
            "rpm",
            Form::new().with("views", 100_000),
            "earnings",
            vec![0.0, 1.0, 2.0, 4.99, 5.0, 49.0, 50.0, 200.0],
        ),
        (
            "campaign-roi",
            Form::new().with("adSpend", 1_000).with("otherCosts", 0),
            "revenue",
            vec![0.0, 999.0, 1_000.0, 2_000.0, 2_999.0, 3_000.0, 10_000.0],
        ),
        (
            "watch-time",
            Form::new().with("views", 1_000).with("videoLengthSeconds", 60),
            "averageWatchSeconds",
            vec![0.0, 18.0, 30.0, 42.0, 60.0],
        ),
    ];

    for (slug, base, field, values) in cases {
        let ranks = ratings_along(slug, &base, field, &values);
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{slug}: {ranks:?}");
        assert!(ranks.first() < ranks.last(), "{slug} never changed rating");
    }
}

#[test]
fn cost_ratings_never_improve_as_cost_rises() {
    let ranks = ratings_along(
        "cpm",
        &Form::new().with("impressions", 100_000),
        "adSpend",
        &[100.0, 400.0, 600.0, 800.0, 1_000.0, 1_200.0, 2_000.0],
    );
    assert!(ranks.windows(2).all(|w| w[0] >= w[1]), "{ranks:?}");
}
