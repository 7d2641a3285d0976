//! Creator finance calculators on the command line
//!
//! Lists the available calculators, describes their inputs, runs one
//! calculation from flags or a JSON file, or evaluates a CSV of inputs into a
//! dated CSV report.

mod config;
mod reports;
mod render;

use anyhow::{Context, Result};
use calculators::{CalcError, Category, Choice, DynCalculator, Form, registry};
use clap::{Parser, Subcommand};
use shared::CONFIG;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use config::{FileConfig, OutputFormat};

/// Default config file path
const CONFIG_FILE: &str = "creator-calc.toml";

#[derive(Parser, Debug)]
#[command(name = "creator-calc")]
#[command(about = "Creator finance calculators: earnings, engagement, ads, growth and tax estimates")]
struct Args {
    /// Config file with output settings and per-calculator defaults
    #[arg(short, long, default_value = CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List calculators
    List {
        /// Only show one category (e.g. earnings, tax)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the inputs a calculator accepts
    Describe {
        /// Calculator slug (see `list`)
        slug: String,
    },

    /// Run one calculation
    Run {
        /// Calculator slug (see `list`)
        slug: String,

        /// Field value as field=value (repeatable)
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// JSON object of field values
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every row of a CSV file into a report
    Batch {
        /// Calculator slug (see `list`)
        slug: String,

        /// CSV file whose header row names the fields
        file: PathBuf,

        /// Output directory (overrides the config file)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = FileConfig::load(&args.config)?;

    match args.command {
        Command::List { category } => list(category.as_deref()),
        Command::Describe { slug } => describe(&slug),
        Command::Run { slug, set, input, json } => {
            let format = if json { OutputFormat::Json } else { file_config.output.format };
            run(&file_config, &slug, &set, input.as_deref(), format)
        }
        Command::Batch { slug, file, out } => {
            let output_dir = out.unwrap_or_else(|| file_config.output.dir.clone());
            batch(&file_config, &slug, &file, &output_dir)
        }
    }
}

/// Look up a calculator or fail with a pointer to `list`
fn find_calculator(slug: &str) -> Result<&'static dyn DynCalculator> {
    registry::find(slug).ok_or_else(|| {
        anyhow::anyhow!(
            "{}\n\nRun 'creator-calc list' to see available calculators.",
            CalcError::UnknownCalculator(slug.to_string())
        )
    })
}

fn list(category: Option<&str>) -> Result<()> {
    let calcs: Vec<&dyn DynCalculator> = match category {
        Some(key) => {
            let Some(category) = Category::from_key(key) else {
                let known: Vec<_> = Category::OPTIONS.iter().map(|c| c.key()).collect();
                anyhow::bail!("Unknown category '{}'. Expected one of: {}", key, known.join(", "));
            };
            registry::by_category(category).collect()
        }
        None => registry::all().to_vec(),
    };

    println!("{}", render::calculator_table(&calcs));
    println!("\n{} calculator(s)", calcs.len());
    Ok(())
}

fn describe(slug: &str) -> Result<()> {
    let calc = find_calculator(slug)?;
    let info = calc.meta();

    println!("{} ({})", info.name, info.category.label());
    println!("{}\n", info.description);
    println!("{}", render::field_table(calc));
    Ok(())
}

/// Split `field=value` pairs
fn parse_assignments(pairs: &[String]) -> Result<Form> {
    let mut form = Form::new();
    for pair in pairs {
        let Some((field, value)) = pair.split_once('=') else {
            anyhow::bail!("Expected FIELD=VALUE, got '{}'", pair);
        };
        let field = field.trim();
        if field.is_empty() {
            anyhow::bail!("Missing field name in '{}'", pair);
        }
        form.set(field, value.trim());
    }
    Ok(form)
}

fn read_json_form(path: &Path) -> Result<Form> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    if !value.is_object() {
        anyhow::bail!("{} must contain a JSON object of field values", path.display());
    }
    Ok(Form::from_json(&value))
}

/// Config defaults, then the JSON file, then `--set` values
fn build_form(file_config: &FileConfig, slug: &str, set: &[String], input: Option<&Path>) -> Result<Form> {
    let mut form = file_config.defaults_for(slug);
    if let Some(path) = input {
        form.merge(&read_json_form(path)?);
    }
    form.merge(&parse_assignments(set)?);
    Ok(form)
}

fn run(file_config: &FileConfig, slug: &str, set: &[String], input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let calc = find_calculator(slug)?;
    let form = build_form(file_config, slug, set, input)?;
    tracing::debug!(slug, fields = form.iter().count(), "running calculator");

    match calc.evaluate(&form) {
        Ok(report) => {
            match format {
                OutputFormat::Json => println!("{}", render::report_json(&report)?),
                OutputFormat::Table => {
                    println!("{}\n", calc.meta().name);
                    println!("{}", render::summary_table(&report));
                    println!("\n{}", report.summary.interpretation);
                    println!("\n{}", CONFIG.disclaimer);
                }
            }
            Ok(())
        }
        Err(errors) => {
            match format {
                OutputFormat::Json => println!("{}", render::errors_json(&errors)?),
                OutputFormat::Table => println!("{}", render::error_table(&errors)),
            }
            anyhow::bail!("{} field(s) failed validation", errors.len());
        }
    }
}

fn batch(file_config: &FileConfig, slug: &str, file: &Path, output_dir: &Path) -> Result<()> {
    let calc = find_calculator(slug)?;
    println!("Evaluating {} rows from {}...\n", calc.meta().name, file.display());

    let forms = reports::read_forms(file)?;
    if forms.is_empty() {
        println!("No data rows found in {}.", file.display());
        return Ok(());
    }

    let rows = reports::evaluate_rows(calc, &file_config.defaults_for(slug), &forms);
    let valid = rows.iter().filter(|row| row.is_valid()).count();
    tracing::debug!(slug, rows = rows.len(), valid, "batch evaluated");

    let today = chrono::Local::now().date_naive();
    reports::generate_batch_report(output_dir, slug, today, &rows)?;

    println!("\n{} of {} row(s) valid", valid, rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignments() {
        let form = parse_assignments(&["coins = 1000".to_string(), "note=a=b".to_string()]).unwrap();
        assert_eq!(form.get("coins"), Some("1000"));
        assert_eq!(form.get("note"), Some("a=b"));
        assert!(parse_assignments(&["coins".to_string()]).is_err());
        assert!(parse_assignments(&["=5".to_string()]).is_err());
    }

    #[test]
    fn test_set_values_override_defaults() {
        let file_config = FileConfig::parse("[defaults.rpm]\nviews = 100000\nearnings = 1").unwrap();
        let form = build_form(&file_config, "rpm", &["earnings=3".to_string()], None).unwrap();
        assert_eq!(form.get("views"), Some("100000"));
        assert_eq!(form.get("earnings"), Some("3"));
    }

    #[test]
    fn test_unknown_slug_points_to_list() {
        let message = find_calculator("nope").err().unwrap().to_string();
        assert!(message.contains("unknown calculator \"nope\""));
        assert!(message.contains("creator-calc list"));
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from(["creator-calc", "run", "rpm", "-s", "views=1000", "--json"]).unwrap();
        assert!(matches!(args.command, Command::Run { json: true, .. }));
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE));
    }
}
