use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// How a single field is checked on a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Non-empty and shaped like `local@domain.tld`.
    Email,
    /// At least one non-empty comma-separated token.
    TokenList,
    /// Anything goes; blank values are dropped from the payload.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    Malformed,
}

impl Rule {
    /// Blankness is judged on the trimmed value; the email pattern sees the
    /// raw input, so surrounding whitespace makes an address malformed.
    pub fn check(self, value: &str) -> Result<(), Violation> {
        let trimmed = value.trim();
        match self {
            Rule::Optional => Ok(()),
            _ if trimmed.is_empty() => Err(Violation::Missing),
            Rule::Required => Ok(()),
            Rule::Email if EMAIL_RE.is_match(value) => Ok(()),
            Rule::Email => Err(Violation::Malformed),
            Rule::TokenList if split_tokens(trimmed).is_empty() => Err(Violation::Missing),
            Rule::TokenList => Ok(()),
        }
    }
}

/// Declarative description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: Rule,
    pub missing: &'static str,
    pub malformed: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, missing: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Required,
            missing,
            malformed: missing,
        }
    }

    pub const fn email(name: &'static str, missing: &'static str, malformed: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Email,
            missing,
            malformed,
        }
    }

    pub const fn tokens(name: &'static str, missing: &'static str) -> Self {
        Self {
            name,
            rule: Rule::TokenList,
            missing,
            malformed: missing,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Optional,
            missing: "",
            malformed: "",
        }
    }

    /// The message to show for `value`, or `None` when it passes.
    pub fn message_for(&self, value: &str) -> Option<&'static str> {
        match self.rule.check(value) {
            Ok(()) => None,
            Err(Violation::Missing) => Some(self.missing),
            Err(Violation::Malformed) => Some(self.malformed),
        }
    }
}

/// Splits a comma-separated list, trimming each token and dropping empty ones.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
