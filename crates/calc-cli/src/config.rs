//! Configuration for the calculator CLI (creator-calc.toml)

use anyhow::{Context, Result};
use calculators::Form;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// `[output]` section
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Where batch reports are written
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dir: PathBuf::from("./output"),
        }
    }
}

/// Configuration loaded from creator-calc.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: OutputConfig,
    /// Per-calculator default field values, keyed by slug
    pub defaults: BTreeMap<String, toml::Table>,
}

impl FileConfig {
    /// Load configuration from a TOML file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| {
            format!(
                "Failed to parse {}. Check for:\n\
                 - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
                 - output.format other than \"table\" or \"json\"\n\
                 - [defaults.<slug>] values that are not numbers or strings",
                path.display()
            )
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Default field values for one calculator as a form
    pub fn defaults_for(&self, slug: &str) -> Form {
        let Some(table) = self.defaults.get(slug) else {
            return Form::new();
        };

        table
            .iter()
            .filter_map(|(field, value)| {
                let raw = match value {
                    toml::Value::String(s) => s.clone(),
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    _ => {
                        tracing::warn!(slug, field, "ignoring non-scalar default");
                        return None;
                    }
                };
                Some((field.as_str(), raw))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = FileConfig::parse("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.output.dir, PathBuf::from("./output"));
        assert!(config.defaults_for("rpm").get("views").is_none());
    }

    #[test]
    fn test_per_calculator_defaults() {
        let config = FileConfig::parse(
            r#"
            [output]
            format = "json"

            [defaults.engagement-rate]
            followers = 10000
            avgLikes = 412.5

            [defaults.creator-tax]
            filingStatus = "single"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        let form = config.defaults_for("engagement-rate");
        assert_eq!(form.get("followers"), Some("10000"));
        assert_eq!(form.get("avgLikes"), Some("412.5"));
        assert_eq!(config.defaults_for("creator-tax").get("filingStatus"), Some("single"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(FileConfig::parse("[output]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = FileConfig::load(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.output.format, OutputFormat::Table);
    }
}
