// src/models/pickup.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupPoint {
    pub id: Uuid,
    pub name: String,
    // Ordem de exibição e seleção; listagens ordenam sempre por este campo.
    pub sort_order: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// O nome precisa sobreviver a um trim; "   " não é um ponto de embarque.
fn validate_trimmed_not_empty(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("length");
        err.message = Some("O nome do ponto de embarque é obrigatório.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePickupPayload {
    #[validate(custom(function = "validate_trimmed_not_empty"))]
    pub name: String,

    // Quando ausente, o registro atribui (quantidade atual + 1).
    pub sort_order: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePickupPayload {
    #[validate(custom(function = "validate_trimmed_not_empty"))]
    pub name: Option<String>,

    pub sort_order: Option<u32>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PickupListQuery {
    /// Somente pontos ativos (usado ao montar as opções da reserva manual).
    #[serde(default)]
    pub active_only: bool,
}
