// src/models/reservation.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::tour::validate_not_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

/// Uma reserva do livro-razão.
///
/// `tour_name`, `date` e `pickup` são cópias desnormalizadas feitas no momento
/// da criação (snapshot). Edições posteriores no passeio ou no ponto de
/// embarque NÃO atualizam essas cópias; é o comportamento documentado do
/// sistema, não um descuido.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub tour_name: String,
    // None quando o passeio referenciado não existia na criação.
    pub date: Option<NaiveDate>,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    // Tamanho do grupo.
    pub count: u32,
    pub amount: Decimal,
    pub status: ReservationStatus,
    pub pickup: Option<String>,
    pub seat_pref: Option<String>,
    // Presente apenas em reservas vindas do LINE; usado pela notificação
    // de cancelamento.
    pub line_user_id: Option<String>,
    pub is_manual_entry: bool,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationPayload {
    pub tour_id: Uuid,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub phone: Option<String>,
    pub address: Option<String>,

    #[validate(range(
        min = 1,
        max = 100,
        message = "O grupo precisa ter entre 1 e 100 pessoas."
    ))]
    pub count: u32,

    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Decimal,

    pub pickup: Option<String>,
    pub seat_pref: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationStatusPayload {
    pub status: ReservationStatus,
}

// Sentinela "all" = sem restrição de status (o padrão do console).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(&self, status: ReservationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Confirmed => status == ReservationStatus::Confirmed,
            StatusFilter::Cancelled => status == ReservationStatus::Cancelled,
        }
    }
}

// Critérios da consulta do livro-razão. Todos conjuntivos (AND).
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuery {
    /// Substring do nome do passeio, case-insensitive.
    pub tour_name: Option<String>,
    /// Data exata do passeio.
    pub date: Option<NaiveDate>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub status: StatusFilter,
}

// Totais sobre as reservas filtradas, excluindo as canceladas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub people_total: u32,
    pub sales_total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListResponse {
    pub reservations: Vec<Reservation>,
    pub summary: ReservationSummary,
}
