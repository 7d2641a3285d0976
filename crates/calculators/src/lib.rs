//! Creator finance calculators
//!
//! Each calculator pairs field metadata and validation with a pure formula
//! and an interpretation. Constant tables (exchange rates, RPM ranges, niche
//! multipliers, follower tiers, tax brackets) live in [`constants`] and are
//! only ever read.
//!
//! Typical use goes through the [`registry`]:
//!
//! ```
//! use calculators::{Form, registry};
//!
//! let form = Form::new().with("coins", 1000);
//! let report = registry::evaluate("coins-to-usd", &form).unwrap();
//! assert_eq!(report.summary.value, 10.5);
//! ```

pub mod calculator;
pub mod calculators;
pub mod choices;
pub mod constants;
pub mod error;
pub mod factors;
pub mod fields;
pub mod format;
pub mod math;
pub mod rating;
pub mod registry;
pub mod validation;

pub use calculator::{Calculator, CalculatorInfo, Category, DynCalculator, Metric, Report, Summary};
pub use choices::{Choice, Currency, FilingStatus, FollowerTier, Niche, StateTaxLevel, Timeframe};
pub use error::CalcError;
pub use fields::{ChoiceField, ChoiceOption, Field, NumberField, Unit};
pub use rating::{Chance, Rating, Tag};
pub use validation::{FieldErrors, Form, Validation};
