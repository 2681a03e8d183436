//! Validation notification: accumulates domain errors instead of failing fast.
//!
//! A [`Notification`] is created empty per validation attempt, collects one
//! [`Error`] per violated invariant, and is inspected (or converted into an
//! [`AppError::Validation`](crate::AppError)) by the caller. It is never
//! persisted. Operational failures do not go through this type.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A single domain-validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}

/// An ordered collection of validation errors.
///
/// Append order is preserved, and merging keeps current errors before
/// incoming ones, so a caller always reports violations in the order they
/// were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single error, returning self for chaining.
    pub fn append(&mut self, error: Error) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Merge another notification into this one: current errors first,
    /// incoming errors after, both in their original order.
    pub fn merge(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Absorb a validation result: `Ok` passes the value through, `Err`
    /// appends the error and yields `None`. Operational failures are not
    /// routed through this method; they stay on their own error path.
    pub fn validate<T>(&mut self, result: Result<T, Error>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.append(error);
                None
            }
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&Error> {
        self.errors.first()
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Appends a required-field error when `value` is empty.
///
/// Returns whether the value is present, so callers can skip further checks
/// on an absent value instead of reporting a redundant length violation.
pub fn validate_required(field: &str, value: &str, notification: &mut Notification) -> bool {
    if value.trim().is_empty() {
        notification.append(Error::new(format!("'{}' should not be empty", field)));
        false
    } else {
        true
    }
}

/// Appends a length error when `value` falls outside `min..=max` characters.
pub fn validate_length_range(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
    notification: &mut Notification,
) {
    let length = value.trim().chars().count();
    if length < min || length > max {
        notification.append(Error::new(format!(
            "'{}' must be between {} and {} characters",
            field, min, max
        )));
    }
}

/// Appends a length error when `value` exceeds `max` characters.
pub fn validate_max_length(field: &str, value: &str, max: usize, notification: &mut Notification) {
    if value.trim().chars().count() > max {
        notification.append(Error::new(format!(
            "'{}' must not exceed {} characters",
            field, max
        )));
    }
}
