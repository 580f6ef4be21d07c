use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const MIN_MESSAGE_WORDS: usize = 10;

/// The four inputs of the contact form. The id doubles as the DOM element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Org,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Org, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Org => "org",
            Field::Message => "message",
        }
    }

    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    RequiredMissing,
    InvalidEmail,
    MessageTooShort,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::RequiredMissing => "REQ_PARAM_MISSING",
            DiagnosticCode::InvalidEmail => "INVALID_DOMAIN_DETECTED",
            DiagnosticCode::MessageTooShort => "MIN_10_WORDS_REQUIRED",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What gets posted to the intake endpoint. Built fresh for every attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub org: String,
    pub message: String,
}

impl SubmissionPayload {
    /// Captures the current field values, trimmed.
    pub fn capture(name: &str, email: &str, org: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            org: org.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Org => &self.org,
            Field::Message => &self.message,
        }
    }
}

/// Per-field diagnostics from one validation pass. At most one code per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, DiagnosticCode>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<DiagnosticCode> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, DiagnosticCode)> + '_ {
        self.errors.iter().map(|(field, code)| (*field, *code))
    }

    /// Drops the diagnostic for `field`. Returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    fn insert(&mut self, field: Field, code: DiagnosticCode) {
        self.errors.insert(field, code);
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

fn check_required(value: &str) -> Option<DiagnosticCode> {
    value
        .trim()
        .is_empty()
        .then_some(DiagnosticCode::RequiredMissing)
}

fn check_email(value: &str) -> Option<DiagnosticCode> {
    check_required(value).or_else(|| (!is_valid_email(value)).then_some(DiagnosticCode::InvalidEmail))
}

fn check_message(value: &str) -> Option<DiagnosticCode> {
    check_required(value).or_else(|| {
        (word_count(value) < MIN_MESSAGE_WORDS).then_some(DiagnosticCode::MessageTooShort)
    })
}

/// Checks every field independently; a failing field never hides another.
pub fn validate(payload: &SubmissionPayload) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in Field::ALL {
        let value = payload.get(field);
        let code = match field {
            Field::Name | Field::Org => check_required(value),
            Field::Email => check_email(value),
            Field::Message => check_message(value),
        };
        if let Some(code) = code {
            result.insert(field, code);
        }
    }
    result
}
