//! The calculator contract and the generic result shape

use serde::{Deserialize, Serialize};

use crate::choices::Choice;
use crate::fields::{Field, Unit};
use crate::rating::Tag;
use crate::validation::{FieldErrors, Form, Validation};

/// Grouping used for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Currency,
    Earnings,
    Engagement,
    Advertising,
    Business,
    Growth,
    Performance,
    Tax,
}

impl Choice for Category {
    const OPTIONS: &'static [Self] = &[
        Category::Currency,
        Category::Earnings,
        Category::Engagement,
        Category::Advertising,
        Category::Business,
        Category::Growth,
        Category::Performance,
        Category::Tax,
    ];

    fn key(self) -> &'static str {
        match self {
            Category::Currency => "currency",
            Category::Earnings => "earnings",
            Category::Engagement => "engagement",
            Category::Advertising => "advertising",
            Category::Business => "business",
            Category::Growth => "growth",
            Category::Performance => "performance",
            Category::Tax => "tax",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Category::Currency => "Coins & Currency",
            Category::Earnings => "Earnings",
            Category::Engagement => "Engagement",
            Category::Advertising => "Advertising",
            Category::Business => "Business & ROI",
            Category::Growth => "Growth",
            Category::Performance => "Content Performance",
            Category::Tax => "Tax",
        }
    }
}

/// Static description of a calculator
#[derive(Debug)]
pub struct CalculatorInfo {
    /// URL and CLI identifier
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Input fields in display order
    pub fields: &'static [Field],
}

impl CalculatorInfo {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

/// A secondary number shown alongside the main value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub unit: Unit,
}

/// Calculator-independent view of a result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The single most salient number
    pub value: f64,
    pub unit: Unit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_label: Option<&'static str>,
    pub interpretation: String,
    pub additional_metrics: Vec<Metric>,
}

impl Summary {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit,
            min: None,
            max: None,
            rating: None,
            rating_label: None,
            interpretation: String::new(),
            additional_metrics: Vec::new(),
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn rated<T: Tag>(mut self, tag: T) -> Self {
        self.rating = Some(tag.tag());
        self.rating_label = Some(tag.tag_label());
        self
    }

    pub fn metric(mut self, key: &'static str, label: &'static str, value: f64, unit: Unit) -> Self {
        self.additional_metrics.push(Metric { key, label, value, unit });
        self
    }

    pub fn metric_value(&self, key: &str) -> Option<f64> {
        self.additional_metrics.iter().find(|m| m.key == key).map(|m| m.value)
    }

    /// Every number in the summary is finite
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
            && self.min.is_none_or(f64::is_finite)
            && self.max.is_none_or(f64::is_finite)
            && self.additional_metrics.iter().all(|m| m.value.is_finite())
    }
}

/// One calculator: validation, a pure formula, and its presentation.
///
/// `calculate` is only ever given input that came out of `validate` (or was
/// built directly by a caller who knows the bounds). Interpretation text is
/// kept apart from the numbers so each can be tested on its own.
pub trait Calculator {
    type Input: Serialize;
    type Output: Serialize;

    fn info() -> &'static CalculatorInfo;

    /// Check a partial form and produce typed input, or every field error
    fn validate(form: &Form) -> Result<Self::Input, FieldErrors>;

    /// Pure numeric result
    fn calculate(input: &Self::Input) -> Self::Output;

    /// Natural-language explanation of a result
    fn interpret(input: &Self::Input, output: &Self::Output) -> String;

    /// Generic display view of a result (interpretation left empty)
    fn summarize(output: &Self::Output) -> Summary;

    /// Calculate, summarize and interpret in one go
    fn run(input: &Self::Input) -> Summary {
        let output = Self::calculate(input);
        let mut summary = Self::summarize(&output);
        summary.interpretation = Self::interpret(input, &output);
        summary
    }
}

/// Result of evaluating a form through a type-erased calculator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub slug: &'static str,
    pub summary: Summary,
    /// The validated input
    pub inputs: serde_json::Value,
    /// The calculator-specific result
    pub details: serde_json::Value,
}

/// Object-safe face of [`Calculator`] used by the registry, CLI and site
pub trait DynCalculator: Send + Sync {
    fn meta(&self) -> &'static CalculatorInfo;

    /// Validation outcome as `{ valid, errors }`
    fn check(&self, form: &Form) -> Validation;

    /// Validate, then calculate only if the form is valid
    fn evaluate(&self, form: &Form) -> Result<Report, FieldErrors>;
}

impl<C: Calculator + Send + Sync> DynCalculator for C {
    fn meta(&self) -> &'static CalculatorInfo {
        C::info()
    }

    fn check(&self, form: &Form) -> Validation {
        Validation::from(&C::validate(form))
    }

    fn evaluate(&self, form: &Form) -> Result<Report, FieldErrors> {
        let input = C::validate(form)?;
        let output = C::calculate(&input);
        let mut summary = C::summarize(&output);
        summary.interpretation = C::interpret(&input, &output);

        Ok(Report {
            slug: C::info().slug,
            summary,
            inputs: serde_json::to_value(&input).unwrap_or_default(),
            details: serde_json::to_value(&output).unwrap_or_default(),
        })
    }
}
