// src/handlers/pickups.rs

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
    models::pickup::{CreatePickupPayload, PickupListQuery, PickupPoint, UpdatePickupPayload},
};

// Sempre ordenado por sortOrder; com activeOnly, só os pontos ativos
// (é a lista usada nas opções da reserva manual).
#[utoipa::path(
    get,
    path = "/api/admin/pickups",
    tag = "Pickups",
    params(PickupListQuery),
    responses(
        (status = 200, description = "Pontos de embarque ordenados", body = Vec<PickupPoint>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Query(query): Query<PickupListQuery>,
) -> Result<Json<Vec<PickupPoint>>, AppError> {
    let store = app_state.store.read().await;
    Ok(Json(store.pickups.list(query.active_only)))
}

#[utoipa::path(
    get,
    path = "/api/admin/pickups/{id}",
    tag = "Pickups",
    params(("id" = Uuid, Path, description = "Id do ponto de embarque")),
    responses(
        (status = 200, description = "Ponto encontrado", body = PickupPoint),
        (status = 404, description = "Ponto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<PickupPoint>, AppError> {
    let store = app_state.store.read().await;
    let pickup = store
        .pickups
        .get(id)
        .cloned()
        .ok_or(AppError::PickupNotFound)?;

    Ok(Json(pickup))
}

#[utoipa::path(
    post,
    path = "/api/admin/pickups",
    tag = "Pickups",
    request_body = CreatePickupPayload,
    responses(
        (status = 201, description = "Ponto criado", body = PickupPoint),
        (status = 400, description = "Nome vazio")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Json(payload): Json<CreatePickupPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let mut store = app_state.store.write().await;
    let created = store.pickups.add(&payload.name, payload.sort_order)?;

    Ok((StatusCode::CREATED, Json(created)))
}

// Atualização parcial; é por aqui que o console liga/desliga um ponto.
#[utoipa::path(
    patch,
    path = "/api/admin/pickups/{id}",
    tag = "Pickups",
    params(("id" = Uuid, Path, description = "Id do ponto de embarque")),
    request_body = UpdatePickupPayload,
    responses(
        (status = 200, description = "Ponto atualizado", body = PickupPoint),
        (status = 404, description = "Ponto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePickupPayload>,
) -> Result<Json<PickupPoint>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let mut store = app_state.store.write().await;
    let updated = store.pickups.update(id, payload)?;

    Ok(Json(updated))
}

// Exclusão sem cascata; o registro removido volta na resposta para o
// console exibir o nome na confirmação.
#[utoipa::path(
    delete,
    path = "/api/admin/pickups/{id}",
    tag = "Pickups",
    params(("id" = Uuid, Path, description = "Id do ponto de embarque")),
    responses(
        (status = 200, description = "Ponto removido", body = PickupPoint),
        (status = 404, description = "Ponto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<PickupPoint>, AppError> {
    let mut store = app_state.store.write().await;
    let removed = store.pickups.delete(id)?;

    Ok(Json(removed))
}
