//! Field-level validation shared by the aggregates.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// Validation failures keyed by field name, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Message reported for `field`, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                // A blank value also fails its length rule; report the blank.
                let first = errors
                    .iter()
                    .find(|error| error.code == NOT_BLANK)
                    .or_else(|| errors.first())?;

                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| first.code.to_string(), ToString::to_string);

                Some((field.to_string(), message))
            })
            .collect();

        Self(fields)
    }
}

impl<F: Into<String>, M: Into<String>> FromIterator<(F, M)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field.into(), message.into()))
                .collect(),
        )
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }

            write!(f, "{field}: {message}")?;

            first = false;
        }

        Ok(())
    }
}

/// Code of the error raised for empty or whitespace-only text.
pub(crate) const NOT_BLANK: &str = "not_blank";

/// Rejects empty or whitespace-only text.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(NOT_BLANK));
    }

    Ok(())
}

pub(crate) fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("not_empty"));
    }

    Ok(())
}

/// Rejects timestamps later than the current instant.
pub(crate) fn past_or_present(value: &Timestamp) -> Result<(), ValidationError> {
    if *value > Timestamp::now() {
        return Err(ValidationError::new("past_or_present"));
    }

    Ok(())
}

pub(crate) fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("range"));
    }

    Ok(())
}
