use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::form::{FieldSpec, FormValues};

/// How long the simulated send takes before it reports success.
pub const SEND_DELAY: Duration = Duration::from_millis(1000);

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name is required"),
    FieldSpec::email(
        "email",
        "Email is required",
        "Please enter a valid email address",
    ),
    FieldSpec::required("message", "Message is required"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<FormValues> for ContactMessage {
    fn from(values: FormValues) -> Self {
        Self {
            name: values.text("name"),
            email: values.text("email"),
            message: values.text("message"),
        }
    }
}
