// src/handlers/reservations.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedAdmin,
    models::reservation::{
        CreateReservationPayload, Reservation, ReservationListResponse, ReservationQuery,
        UpdateReservationStatusPayload,
    },
    services::pricing::{self, PriceBreakdown, PricePreviewPayload},
};

// Listagem filtrada + totais (pessoas e vendas, canceladas fora das somas).
#[utoipa::path(
    get,
    path = "/api/admin/reservations",
    tag = "Reservations",
    params(ReservationQuery),
    responses(
        (status = 200, description = "Reservas filtradas com agregados", body = ReservationListResponse),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Query(query): Query<ReservationQuery>,
) -> Result<Json<ReservationListResponse>, AppError> {
    let store = app_state.store.read().await;
    let (reservations, summary) = store.reservations.query(&query);

    Ok(Json(ReservationListResponse {
        reservations,
        summary,
    }))
}

// Busca individual: é o passo de intenção do protocolo de confirmação —
// o console mostra os dados antes do PATCH/cancelamento.
#[utoipa::path(
    get,
    path = "/api/admin/reservations/{id}",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Id da reserva")),
    responses(
        (status = 200, description = "Reserva encontrada", body = Reservation),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Reservation>, AppError> {
    let store = app_state.store.read().await;
    let reservation = store
        .reservations
        .get(id)
        .cloned()
        .ok_or(AppError::ReservationNotFound)?;

    Ok(Json(reservation))
}

// Entrada manual (telefone/balcão). Sempre nasce `confirmed`.
#[utoipa::path(
    post,
    path = "/api/admin/reservations",
    tag = "Reservations",
    request_body = CreateReservationPayload,
    responses(
        (status = 201, description = "Reserva criada", body = Reservation),
        (status = 400, description = "Capacidade excedida ou payload inválido"),
        (status = 404, description = "Passeio não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Json(payload): Json<CreateReservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let created = app_state.booking_service.create_manual(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// Transição de status; a única aceita é confirmed -> cancelled.
#[utoipa::path(
    patch,
    path = "/api/admin/reservations/{id}",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Id da reserva")),
    request_body = UpdateReservationStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = Reservation),
        (status = 404, description = "Reserva não encontrada"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReservationStatusPayload>,
) -> Result<Json<Reservation>, AppError> {
    let updated = app_state
        .booking_service
        .update_status(id, payload.status)
        .await?;

    Ok(Json(updated))
}

// Prévia de preço: (pessoas × preço) + assentos preferenciais.
#[utoipa::path(
    post,
    path = "/api/admin/price-preview",
    tag = "Reservations",
    request_body = PricePreviewPayload,
    responses(
        (status = 200, description = "Decomposição do preço", body = PriceBreakdown)
    ),
    security(("api_jwt" = []))
)]
pub async fn price_preview(
    _admin: AuthenticatedAdmin,
    Json(payload): Json<PricePreviewPayload>,
) -> Result<Json<PriceBreakdown>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(pricing::calculate_total_price(
        payload.passengers,
        payload.price_per_person,
        payload.preferred_seats,
    )))
}
