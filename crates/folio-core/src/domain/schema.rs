//! Insert schemas: one declarative definition per entity kind.
//!
//! The derive attributes on a `New*` struct are read twice: by `validator`
//! when a payload is checked, and by `schemars` when the accepted shape is
//! published to callers. Neither side keeps its own field list.

use std::borrow::Cow;

use schemars::JsonSchema;
use schemars::schema::RootSchema;
use thiserror::Error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// The first constraint a payload violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SchemaViolation {
    pub field: &'static str,
    pub message: String,
}

impl SchemaViolation {
    /// Pick the first violation following `fields` order, then the order the
    /// constraints are declared on that field.
    pub fn first_of(fields: &[&'static str], errors: &ValidationErrors) -> Self {
        let all = errors.errors();

        for &field in fields {
            let Some(ValidationErrorsKind::Field(violations)) = all.get(field) else {
                continue;
            };
            if let Some(violation) = violations.first() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                return Self { field, message };
            }
        }

        // Every schema lists all of its validated fields, so this is only
        // reached if a list falls out of sync with its struct.
        Self {
            field: "",
            message: errors.to_string(),
        }
    }
}

/// An insert payload that is validated and published from the same definition.
pub trait InsertSchema: Validate + JsonSchema {
    /// Validated field names as `validator` reports them, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Validate the payload, reporting only the first violated constraint.
    fn check(&self) -> Result<(), SchemaViolation> {
        self.validate()
            .map_err(|errors| SchemaViolation::first_of(Self::FIELDS, &errors))
    }

    /// JSON Schema describing the accepted wire shape.
    fn describe() -> RootSchema {
        schemars::schema_for!(Self)
    }
}

/// Every entry of a string list must carry text.
#[allow(clippy::ptr_arg)]
pub(crate) fn no_blank_entries(entries: &Vec<String>) -> Result<(), validator::ValidationError> {
    if entries.iter().any(|entry| entry.trim().is_empty()) {
        let mut error = validator::ValidationError::new("blank_entry");
        error.message = Some(Cow::Borrowed("Entries must not be blank"));
        return Err(error);
    }
    Ok(())
}
