//! Validated form state shared by every form on the page.
//!
//! A form is described by a static table of [`FieldSpec`]s. [`FormState`]
//! keeps the current values, the errors found on the last submit attempt and
//! whether a submission is in flight. Errors are only computed on a submit
//! attempt; editing a field clears that field's error straight away.

mod rules;


use std::collections::BTreeMap;

pub use rules::{split_tokens, FieldSpec, Rule, Violation};

use crate::error::{FieldErrors, FormError};

/// Where a form currently sits in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Invalid,
    Submitting,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: &'static [FieldSpec],
    values: BTreeMap<&'static str, String>,
    errors: FieldErrors,
    submitting: bool,
    failure: Option<String>,
}

impl FormState {
    pub fn new(schema: &'static [FieldSpec]) -> Self {
        Self {
            schema,
            values: schema.iter().map(|f| (f.name, String::new())).collect(),
            errors: FieldErrors::new(),
            submitting: false,
            failure: None,
        }
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        self.schema
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.failure.is_some() {
            Phase::Failed
        } else if self.errors.is_empty() {
            Phase::Editing
        } else {
            Phase::Invalid
        }
    }

    /// Overwrites a field's value and drops any error recorded against it.
    ///
    /// The new value is not re-validated until the next submit attempt.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let Some(spec) = self.schema.iter().find(|f| f.name == name) else {
            tracing::warn!(field = name, "ignoring edit of unknown form field");
            return;
        };
        self.values.insert(spec.name, value.into());
        self.errors.remove(spec.name);
    }

    /// Checks every field against its rule without touching the state.
    pub fn validate(&self) -> FieldErrors {
        self.schema
            .iter()
            .filter_map(|spec| {
                spec.message_for(self.value(spec.name))
                    .map(|message| (spec.name, message.to_string()))
            })
            .collect()
    }

    /// Validates the form and, if it passes, marks it as submitting.
    ///
    /// Returns the normalized values to hand to the submit effect. A second
    /// attempt before [`FormState::finish`] is rejected with
    /// [`FormError::InFlight`].
    pub fn attempt_submit(&mut self) -> Result<FormValues, FormError> {
        if self.submitting {
            return Err(FormError::InFlight);
        }

        self.failure = None;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "form rejected");
            return Err(FormError::Invalid(self.errors.clone()));
        }

        self.submitting = true;
        Ok(FormValues::from_state(self))
    }

    /// Applies the outcome of the submit effect.
    ///
    /// Success clears the form; failure keeps the values so the user can retry.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.reset(),
            Err(message) => {
                tracing::warn!(%message, "form submission failed");
                self.submitting = false;
                self.failure = Some(message);
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }
}

/// Trimmed, non-blank field values produced by a successful submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    fn from_state(state: &FormState) -> Self {
        Self(
            state
                .schema
                .iter()
                .filter_map(|spec| {
                    let value = state.value(spec.name).trim();
                    (!value.is_empty()).then(|| (spec.name, value.to_string()))
                })
                .collect(),
        )
    }

    /// The value of `name`, or `None` when the field was left blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Like [`FormValues::get`] but yields an empty string for blank fields.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}
