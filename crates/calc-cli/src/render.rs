//! Console output: tables and JSON

use anyhow::Result;
use calculators::format::format_value;
use calculators::{Choice, DynCalculator, Field, FieldErrors, Report};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CalculatorRow {
    #[tabled(rename = "Slug")]
    slug: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Accepts")]
    accepts: String,
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "")]
    label: String,
    #[tabled(rename = "")]
    value: String,
}

fn styled<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Slug, name and category of each calculator
pub fn calculator_table(calcs: &[&dyn DynCalculator]) -> String {
    let rows = calcs
        .iter()
        .map(|calc| {
            let info = calc.meta();
            CalculatorRow {
                slug: info.slug,
                name: info.name,
                category: info.category.label(),
            }
        })
        .collect();
    styled::<CalculatorRow>(rows)
}

/// Every input field with its bounds or options
pub fn field_table(calc: &dyn DynCalculator) -> String {
    let rows = calc
        .meta()
        .fields
        .iter()
        .map(|field| FieldRow {
            name: field.name(),
            label: field.label(),
            accepts: match field {
                Field::Number(number) => number.describe_range(),
                Field::Choice(choice) => choice
                    .options()
                    .iter()
                    .map(|option| option.key)
                    .collect::<Vec<_>>()
                    .join(", "),
            },
        })
        .collect();
    styled::<FieldRow>(rows)
}

/// Main value, range, rating and every metric of a report
pub fn summary_table(report: &Report) -> String {
    let summary = &report.summary;
    let mut rows = vec![ValueRow {
        label: "Result".to_string(),
        value: format_value(summary.value, summary.unit),
    }];

    if let (Some(min), Some(max)) = (summary.min, summary.max) {
        rows.push(ValueRow {
            label: "Range".to_string(),
            value: format!("{} – {}", format_value(min, summary.unit), format_value(max, summary.unit)),
        });
    }

    if let Some(rating) = summary.rating_label {
        rows.push(ValueRow {
            label: "Rating".to_string(),
            value: rating.to_string(),
        });
    }

    rows.extend(summary.additional_metrics.iter().map(|metric| ValueRow {
        label: metric.label.to_string(),
        value: format_value(metric.value, metric.unit),
    }));

    styled(rows)
}

/// Field errors as a two-column table
pub fn error_table(errors: &FieldErrors) -> String {
    let rows = errors
        .iter()
        .map(|(field, message)| ValueRow {
            label: field.to_string(),
            value: message.to_string(),
        })
        .collect();
    styled::<ValueRow>(rows)
}

/// Pretty JSON for a report
pub fn report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Pretty JSON for field errors
pub fn errors_json(errors: &FieldErrors) -> Result<String> {
    Ok(serde_json::to_string_pretty(&serde_json::json!({ "valid": false, "errors": errors }))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculators::{Form, registry};

    #[test]
    fn test_summary_table_lists_metrics() {
        let report = registry::evaluate("coins-to-usd", &Form::new().with("coins", 1000)).unwrap();
        let table = summary_table(&report);
        assert!(table.contains("$10.50"));
        assert!(table.contains("Diamonds"));
        assert!(table.contains("500"));
    }

    #[test]
    fn test_field_table_shows_options() {
        let calc = registry::find("creator-tax").unwrap();
        let table = field_table(calc);
        assert!(table.contains("filingStatus"));
        assert!(table.contains("single"));
    }

    #[test]
    fn test_errors_json_shape() {
        let form = Form::new().with("coins", 0);
        let errors = registry::find("coins-to-usd").unwrap().evaluate(&form).unwrap_err();
        let json: serde_json::Value = serde_json::from_str(&errors_json(&errors).unwrap()).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json["errors"]["coins"].is_string());
    }
}
