//! Request DTOs with validation.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

use aliment_core::error::AppError;
use aliment_entity::Aliment;

/// Write body for create and update.
///
/// All three fields must be present; `description` may be blank. A client
/// supplied `id` is ignored by deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AlimentPayload {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    /// Description.
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    /// Status flag.
    pub status: Option<bool>,
}

impl AlimentPayload {
    /// Validate the payload and produce a transient [`Aliment`].
    ///
    /// Field problems are collected into a `{"field": ["message", ...]}`
    /// map carried in the validation error's details.
    pub fn into_aliment(self) -> Result<Aliment, AppError> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        if let Err(field_errors) = self.validate() {
            for (field, errs) in field_errors.field_errors() {
                let messages = errors.entry(field.to_string()).or_default();
                for err in errs {
                    messages.push(
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value for {field}")),
                    );
                }
            }
        }

        if self.name.is_none() {
            errors
                .entry("name".to_string())
                .or_default()
                .push("name field is mandatory".to_string());
        }
        if self.description.is_none() {
            errors
                .entry("description".to_string())
                .or_default()
                .push("description field is mandatory".to_string());
        }
        if self.status.is_none() {
            errors
                .entry("status".to_string())
                .or_default()
                .push("status field is mandatory".to_string());
        }

        if !errors.is_empty() {
            return Err(AppError::validation_with_details(
                "Invalid aliment payload",
                serde_json::to_value(errors).unwrap_or_default(),
            ));
        }

        match (self.name, self.description, self.status) {
            (Some(name), Some(description), Some(status)) => {
                Aliment::new(name, description, status)
            }
            _ => Err(AppError::validation("aliment payload is incomplete")),
        }
    }
}
