//! Input validation
//!
//! A [`Form`] is the raw, partial input (form state, a CSV row, CLI flags).
//! Each calculator walks it with a [`Checker`], which records at most one
//! message per field and keeps going, so every problem is reported at once.
//! Only a fully valid form produces a typed input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::choices::Choice;
use crate::fields::{ChoiceField, NumberField};
use crate::format::format_value;

/// Raw field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form(BTreeMap<String, String>);

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl ToString) {
        self.0.insert(field.into(), value.to_string());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    /// Trimmed value, treating blank as absent
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every field of `other` over this form
    pub fn merge(&mut self, other: &Form) {
        for (field, value) in other.iter() {
            self.set(field, value);
        }
    }

    /// Build from a JSON object. Numbers, strings and booleans become raw
    /// strings; nested values are ignored.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut form = Self::new();
        if let Some(object) = value.as_object() {
            for (field, value) in object {
                match value {
                    serde_json::Value::String(s) => form.set(field.as_str(), s),
                    serde_json::Value::Number(n) => form.set(field.as_str(), n),
                    serde_json::Value::Bool(b) => form.set(field.as_str(), b),
                    _ => {}
                }
            }
        }
        form
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Form {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (field, value) in iter {
            form.set(field, value);
        }
        form
    }
}

/// Field name to human-readable message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record a message unless the field already has one
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// The `{ valid, errors }` view of a validation outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl<T> From<&Result<T, FieldErrors>> for Validation {
    fn from(result: &Result<T, FieldErrors>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                errors: FieldErrors::default(),
            },
            Err(errors) => Self {
                valid: errors.is_empty(),
                errors: errors.clone(),
            },
        }
    }
}

/// Accumulates field errors while reading a [`Form`]
pub struct Checker<'a> {
    form: &'a Form,
    errors: FieldErrors,
}

impl<'a> Checker<'a> {
    pub fn new(form: &'a Form) -> Self {
        Self {
            form,
            errors: FieldErrors::default(),
        }
    }

    /// Read a required number within the field's inclusive bounds
    pub fn number(&mut self, field: &NumberField) -> Option<f64> {
        let Some(raw) = self.form.get(field.name) else {
            self.errors.insert(field.name, format!("{} is required", field.label));
            return None;
        };

        let value = match raw.replace(',', "").parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                self.errors.insert(field.name, format!("{} must be a number", field.label));
                return None;
            }
        };

        if value < field.min {
            let message = match field.min_hint {
                Some(hint) => hint.to_string(),
                None => format!("{} must be at least {}", field.label, format_value(field.min, field.unit)),
            };
            self.errors.insert(field.name, message);
            return None;
        }

        if value > field.max {
            self.errors.insert(
                field.name,
                format!("{} cannot exceed {}", field.label, format_value(field.max, field.unit)),
            );
            return None;
        }

        Some(value)
    }

    /// Read a required enum value. Any known option is accepted.
    pub fn choice<C: Choice>(&mut self, field: &ChoiceField) -> Option<C> {
        let Some(raw) = self.form.get(field.name) else {
            self.errors.insert(field.name, format!("Please select a {}", field.label.to_lowercase()));
            return None;
        };

        let choice = C::from_key(raw);
        if choice.is_none() {
            self.errors.insert(field.name, format!("Unknown {} \"{}\"", field.label.to_lowercase(), raw));
        }
        choice
    }

    /// `value` must not be greater than `limit`. Skipped when either side is
    /// already missing or invalid.
    pub fn not_exceeding(&mut self, field: &NumberField, value: Option<f64>, limit: Option<f64>, limit_label: &str) {
        if let (Some(value), Some(limit)) = (value, limit) {
            if value > limit {
                self.errors.insert(field.name, format!("{} cannot exceed {}", field.label, limit_label));
            }
        }
    }

    /// `value` must be strictly less than `bound`
    pub fn less_than(&mut self, field: &NumberField, value: Option<f64>, bound: Option<f64>, bound_label: &str) {
        if let (Some(value), Some(bound)) = (value, bound) {
            if value >= bound {
                self.errors.insert(field.name, format!("{} must be less than {}", field.label, bound_label));
            }
        }
    }

    /// Record a custom message
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    /// Produce the typed input if nothing failed.
    ///
    /// `build` sees every value the checker returned; when no error was
    /// recorded, every required value is present.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Niche;

    const VIEWS: NumberField = NumberField::count("views", "Views", 1_000.0, 1_000_000.0)
        .with_min_hint("Views must be at least 1,000 for an accurate RPM");
    const LIKES: NumberField = NumberField::count("likes", "Likes", 0.0, 1_000_000.0);
    const NICHE: ChoiceField = ChoiceField::of::<Niche>("niche", "Niche");

    #[test]
    fn test_missing_and_invalid_fields_all_reported() {
        let form = Form::new().with("likes", "abc");
        let mut check = Checker::new(&form);
        check.number(&VIEWS);
        check.number(&LIKES);
        check.choice::<Niche>(&NICHE);
        let errors = check.finish(|| Some(())).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("views"), Some("Views is required"));
        assert_eq!(errors.get("likes"), Some("Likes must be a number"));
        assert_eq!(errors.get("niche"), Some("Please select a niche"));
    }

    #[test]
    fn test_bounds_messages() {
        let form = Form::new().with("views", 500).with("likes", 2_000_000);
        let mut check = Checker::new(&form);
        check.number(&VIEWS);
        check.number(&LIKES);
        let errors = check.finish(|| Some(())).unwrap_err();

        assert_eq!(errors.get("views"), Some("Views must be at least 1,000 for an accurate RPM"));
        assert_eq!(errors.get("likes"), Some("Likes cannot exceed 1,000,000"));
    }

    #[test]
    fn test_cross_field_keeps_first_message() {
        let form = Form::new().with("views", 5_000).with("likes", 6_000);
        let mut check = Checker::new(&form);
        let views = check.number(&VIEWS);
        let likes = check.number(&LIKES);
        check.not_exceeding(&LIKES, likes, views, "views");
        check.reject("likes", "second message");
        let errors = check.finish(|| Some(())).unwrap_err();

        assert_eq!(errors.get("likes"), Some("Likes cannot exceed views"));
    }

    #[test]
    fn test_valid_form_builds_input() {
        let form = Form::new().with("views", "12,000").with("niche", "Gaming");
        let mut check = Checker::new(&form);
        let views = check.number(&VIEWS);
        let niche = check.choice::<Niche>(&NICHE);
        let result = check.finish(|| Some((views?, niche?)));

        assert_eq!(result, Ok((12_000.0, Niche::Gaming)));
        assert!(Validation::from(&result).valid);
    }

    #[test]
    fn test_form_from_json() {
        let form = Form::from_json(&serde_json::json!({ "coins": 1000, "niche": "food", "nested": [1] }));
        assert_eq!(form.get("coins"), Some("1000"));
        assert_eq!(form.get("niche"), Some("food"));
        assert_eq!(form.get("nested"), None);
    }
}
