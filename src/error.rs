use std::collections::BTreeMap;

use thiserror::Error;

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("a submission is already in flight")]
    InFlight,
}
