//! Aliment entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use aliment_core::error::AppError;
use aliment_core::result::AppResult;

/// Maximum length of an aliment name, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Maximum length of an aliment description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// A named, described, boolean-flagged record.
///
/// An aliment is *transient* while `id == 0` and *persisted* once storage
/// has assigned a positive id. The id never changes after persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Aliment {
    /// Storage-assigned identifier, 0 for not-yet-persisted instances.
    pub id: i64,
    /// Non-empty display name.
    pub name: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// Status flag.
    pub status: bool,
}

impl Aliment {
    /// Create a transient aliment, validating field constraints.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: bool,
    ) -> AppResult<Self> {
        let aliment = Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            status,
        };
        aliment.validate()?;
        Ok(aliment)
    }

    /// Return the same aliment carrying a storage-assigned id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Whether storage has assigned this aliment an id.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Check field constraints. Write paths call this before SQL mutations.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("name must not be empty"));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(AppError::validation(format!(
                "name must be at most {NAME_MAX_LEN} characters"
            )));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(AppError::validation(format!(
                "description must be at most {DESCRIPTION_MAX_LEN} characters"
            )));
        }
        Ok(())
    }
}
