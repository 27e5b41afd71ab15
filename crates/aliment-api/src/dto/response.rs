//! Response DTOs.

use serde::{Deserialize, Serialize};

use aliment_entity::Aliment;

/// Aliment as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlimentResponse {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Description, possibly empty.
    pub description: String,
    /// Status flag.
    pub status: bool,
}

impl From<Aliment> for AlimentResponse {
    fn from(aliment: Aliment) -> Self {
        Self {
            id: aliment.id,
            name: aliment.name,
            description: aliment.description,
            status: aliment.status,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
