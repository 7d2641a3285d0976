//! Field metadata shared by validation, the CLI and the site forms
//!
//! A field's inclusive bounds live here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::choices::Choice;
use crate::format::format_value;

/// What a number measures, for display and input stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    Count,
    Currency,
    /// Hundredths of a dollar, for sub-cent unit costs
    Cents,
    Percent,
    Seconds,
    Hours,
    Months,
    Ratio,
    Score,
    Multiplier,
}

/// A required numeric input with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberField {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub min: f64,
    pub max: f64,
    /// Replaces the generic "at least" message when the minimum has a reason
    pub min_hint: Option<&'static str>,
}

impl NumberField {
    pub const fn new(name: &'static str, label: &'static str, unit: Unit, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            unit,
            min,
            max,
            min_hint: None,
        }
    }

    pub const fn count(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self::new(name, label, Unit::Count, min, max)
    }

    pub const fn currency(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self::new(name, label, Unit::Currency, min, max)
    }

    pub const fn percent(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self::new(name, label, Unit::Percent, min, max)
    }

    pub const fn with_min_hint(mut self, hint: &'static str) -> Self {
        self.min_hint = Some(hint);
        self
    }

    /// Input step for HTML number inputs
    pub fn step(&self) -> f64 {
        match self.unit {
            Unit::Count | Unit::Months if self.min.fract() == 0.0 => 1.0,
            Unit::Count | Unit::Months | Unit::Seconds | Unit::Hours => 0.1,
            _ => 0.01,
        }
    }

    /// "1,000 – 1,000,000,000" style range description
    pub fn describe_range(&self) -> String {
        format!("{} – {}", format_value(self.min, self.unit), format_value(self.max, self.unit))
    }
}

/// One selectable option of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub key: &'static str,
    pub label: &'static str,
}

fn choice_options<C: Choice>() -> Vec<ChoiceOption> {
    C::OPTIONS
        .iter()
        .map(|option| ChoiceOption {
            key: option.key(),
            label: option.label(),
        })
        .collect()
}

/// A required enum-valued input
#[derive(Debug, Clone, Copy)]
pub struct ChoiceField {
    pub name: &'static str,
    pub label: &'static str,
    options: fn() -> Vec<ChoiceOption>,
}

impl ChoiceField {
    pub const fn of<C: Choice>(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            options: choice_options::<C>,
        }
    }

    pub fn options(&self) -> Vec<ChoiceOption> {
        (self.options)()
    }
}

/// Any calculator input field
#[derive(Debug, Clone, Copy)]
pub enum Field {
    Number(NumberField),
    Choice(ChoiceField),
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Number(field) => field.name,
            Field::Choice(field) => field.name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Number(field) => field.label,
            Field::Choice(field) => field.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Timeframe;

    #[test]
    fn test_choice_field_lists_every_option() {
        let field = ChoiceField::of::<Timeframe>("timeframe", "Timeframe");
        let keys: Vec<_> = field.options().iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["days", "weeks", "months"]);
    }

    #[test]
    fn test_describe_range() {
        let field = NumberField::count("views", "Views", 1_000.0, 1_000_000.0);
        assert_eq!(field.describe_range(), "1,000 – 1,000,000");
        assert_eq!(field.step(), 1.0);
    }
}
