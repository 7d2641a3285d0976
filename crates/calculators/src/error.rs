//! Error type for looking up and running calculators by slug

use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unknown calculator \"{0}\"")]
    UnknownCalculator(String),

    #[error("invalid input: {0}")]
    Invalid(FieldErrors),
}

impl From<FieldErrors> for CalcError {
    fn from(errors: FieldErrors) -> Self {
        CalcError::Invalid(errors)
    }
}

impl CalcError {
    /// Field errors, when the failure was a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CalcError::Invalid(errors) => Some(errors),
            CalcError::UnknownCalculator(_) => None,
        }
    }
}
