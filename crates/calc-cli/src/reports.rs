//! Batch evaluation: CSV of inputs in, CSV report out

use anyhow::{Context, Result};
use calculators::{DynCalculator, FieldErrors, Form, Report};
use chrono::NaiveDate;
use csv::{Reader, Writer};
use std::path::{Path, PathBuf};

/// One evaluated CSV row
pub struct BatchRow {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub outcome: Result<Report, FieldErrors>,
}

impl BatchRow {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Read every data row as a form keyed by the header's field names
pub fn read_forms(path: &Path) -> Result<Vec<Form>> {
    let mut reader = Reader::from_path(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .clone();

    let mut forms = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV at data row {}", index + 1))?;
        forms.push(headers.iter().zip(record.iter()).collect());
    }
    Ok(forms)
}

/// Evaluate each form over the configured defaults
pub fn evaluate_rows(calc: &dyn DynCalculator, defaults: &Form, forms: &[Form]) -> Vec<BatchRow> {
    forms
        .iter()
        .enumerate()
        .map(|(index, form)| {
            let mut merged = defaults.clone();
            merged.merge(form);
            BatchRow {
                row: index + 1,
                outcome: calc.evaluate(&merged),
            }
        })
        .collect()
}

/// `<slug>-results-<YYYY-MM-DD>.csv`
pub fn report_filename(slug: &str, date: NaiveDate) -> String {
    format!("{}-results-{}.csv", slug, date.format("%Y-%m-%d"))
}

/// Metric keys in first-seen order across all valid rows
fn metric_columns(rows: &[BatchRow]) -> Vec<(&'static str, &'static str)> {
    let mut columns: Vec<(&'static str, &'static str)> = Vec::new();
    for report in rows.iter().filter_map(|row| row.outcome.as_ref().ok()) {
        for metric in &report.summary.additional_metrics {
            if !columns.iter().any(|(key, _)| *key == metric.key) {
                columns.push((metric.key, metric.label));
            }
        }
    }
    columns
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the batch report to `writer`
pub fn write_rows<W: std::io::Write>(wtr: &mut Writer<W>, rows: &[BatchRow]) -> Result<()> {
    let metrics = metric_columns(rows);

    // Header
    let mut header = vec!["Row", "Valid", "Value", "Min", "Max", "Rating"];
    header.extend(metrics.iter().map(|(_, label)| *label));
    header.push("Errors");
    wtr.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.row.to_string(), row.is_valid().to_string()];
        match &row.outcome {
            Ok(report) => {
                let summary = &report.summary;
                record.push(summary.value.to_string());
                record.push(optional(summary.min));
                record.push(optional(summary.max));
                record.push(summary.rating.unwrap_or_default().to_string());
                record.extend(metrics.iter().map(|(key, _)| optional(summary.metric_value(key))));
                record.push(String::new());
            }
            Err(errors) => {
                record.extend(std::iter::repeat_n(String::new(), 4 + metrics.len()));
                record.push(
                    errors
                        .iter()
                        .map(|(field, message)| format!("{field}: {message}"))
                        .collect::<Vec<_>>()
                        .join("; "),
                );
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Generate `<slug>-results-<date>.csv` in `output_dir`
pub fn generate_batch_report(output_dir: &Path, slug: &str, date: NaiveDate, rows: &[BatchRow]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let path = output_dir.join(report_filename(slug, date));
    let mut wtr = Writer::from_path(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_rows(&mut wtr, rows)?;

    println!("  Generated: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculators::registry;

    fn render(rows: &[BatchRow]) -> String {
        let mut wtr = Writer::from_writer(Vec::new());
        write_rows(&mut wtr, rows).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(report_filename("rpm", date), "rpm-results-2026-03-09.csv");
    }

    #[test]
    fn test_rows_merge_defaults_and_keep_errors() {
        let calc = registry::find("rpm").unwrap();
        let defaults = Form::new().with("views", 100_000);
        let forms = vec![
            Form::new().with("earnings", 3),
            Form::new().with("earnings", 2).with("views", 10),
        ];

        let rows = evaluate_rows(calc, &defaults, &forms);
        assert!(rows[0].is_valid());
        assert!(!rows[1].is_valid());

        let csv = render(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Row,Valid,Value,Min,Max,Rating,Per million views,Errors"));
        assert_eq!(lines.next(), Some("1,true,0.03,,,average,30,"));
        let invalid = lines.next().unwrap();
        assert!(invalid.starts_with("2,false,,,,,,"));
        assert!(invalid.contains("views: "));
    }
}
