// src/models/tour.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// Status operado manualmente pelo administrador.
// Ele NÃO é derivado de current/capacity por esta camada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Open,
    Full,
    Stop,
    Hidden,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub deadline: NaiveDate,
    pub capacity: u32,
    pub price: Decimal,
    pub status: TourStatus,
    // Reservas confirmadas até agora. Recalculado pelo serviço de booking,
    // nunca pela camada do catálogo.
    pub current: u32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    // Referências ao registro de embarque. Não validamos a existência aqui:
    // um ponto apagado vira uma referência órfã tolerada.
    pub pickup_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tour {
    /// Capacidade restante: capacity - current.
    /// Pode ficar negativa se `current` passar de `capacity`; não corrigimos.
    pub fn remaining_capacity(&self) -> i64 {
        i64::from(self.capacity) - i64::from(self.current)
    }
}

// Item da listagem: o passeio com os campos derivados que o console exibe.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourView {
    #[serde(flatten)]
    pub tour: Tour,
    // Nomes dos pontos de embarque resolvidos contra o registro,
    // caindo para o id cru quando o ponto não existe mais.
    pub pickup_names: Vec<String>,
    pub remaining: i64,
}

// ---
// Validação Customizada
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

fn default_status() -> TourStatus {
    TourStatus::Open
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,

    pub date: NaiveDate,
    pub deadline: NaiveDate,

    pub capacity: u32,

    #[validate(custom(function = "validate_not_negative"))]
    pub price: Decimal,

    #[serde(default = "default_status")]
    pub status: TourStatus,

    pub description: Option<String>,
    pub image_url: Option<String>,

    #[serde(default)]
    pub pickup_ids: Vec<Uuid>,
}

// O update substitui TODOS os campos mutáveis de uma vez (o editor do
// console envia o formulário inteiro), por isso o payload é o mesmo shape.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTourPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,

    pub date: NaiveDate,
    pub deadline: NaiveDate,

    pub capacity: u32,

    #[validate(custom(function = "validate_not_negative"))]
    pub price: Decimal,

    pub status: TourStatus,

    pub description: Option<String>,
    pub image_url: Option<String>,

    #[serde(default)]
    pub pickup_ids: Vec<Uuid>,
}

// Filtro da listagem de passeios (intervalo de datas, como na API original).
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TourListQuery {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
