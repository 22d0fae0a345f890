//! Validation outcome aggregation
//!
//! Rule sets report failures into a [`ValidationErrors`] accumulator instead of
//! returning on the first broken rule. Every rule for every field runs, so a
//! single field may collect several messages. The accumulator serializes as a
//! plain JSON object of `field -> [messages]`, ready to be embedded in an error
//! response body.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Field name to ordered failure messages.
///
/// Fields are kept in name order so two runs over the same candidate always
/// produce byte-identical payloads; messages keep the order the rules ran in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one failure message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Records `message` against `field` unless `passed` holds.
    pub fn check(&mut self, passed: bool, field: &str, message: impl Into<String>) {
        if !passed {
            self.add(field, message);
        }
    }

    /// Folds the outcome of a single rule into the accumulator.
    pub fn record(&mut self, outcome: Result<(), FieldError>) {
        if let Err(err) = outcome {
            self.add(&err.field, err.message);
        }
    }

    /// Moves every failure of `other` into `self`, keeping message order.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Total number of failure messages across all fields.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_message(&self, field: &str, message: &str) -> bool {
        self.field(field).iter().any(|m| m == message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// `Ok(())` when nothing failed, otherwise the collected failures.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_accumulate_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "email is required");
        errors.add("email", "email must be a valid email address");
        errors.add("first_name", "first_name is required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_count(), 3);
        assert_eq!(
            errors.field("email"),
            ["email is required", "email must be a valid email address"]
        );
        assert!(errors.field("last_name").is_empty());
    }

    #[test]
    fn test_check_and_record() {
        let mut errors = ValidationErrors::new();
        errors.check(true, "a", "never");
        errors.check(false, "b", "b failed");
        errors.record(Ok(()));
        errors.record(Err(FieldError::new("c", "c failed")));

        assert!(!errors.has_message("a", "never"));
        assert!(errors.has_message("b", "b failed"));
        assert!(errors.has_message("c", "c failed"));
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut left = ValidationErrors::new();
        left.add("x", "first");
        let mut right = ValidationErrors::new();
        right.add("x", "second");
        right.add("y", "third");

        left.merge(right);

        assert_eq!(left.field("x"), ["first", "second"]);
        assert_eq!(left.field("y"), ["third"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut errors = ValidationErrors::new();
        errors.add("premium_amount", "premium_amount must be greater than zero");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "premium_amount": ["premium_amount must be greater than zero"] })
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("id", "bad");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "id: bad");
    }
}
