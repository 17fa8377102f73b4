// src/handlers/tours.rs

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
    models::tour::{CreateTourPayload, Tour, TourListQuery, TourView, UpdateTourPayload},
};

// Listagem para o grid do console: cada passeio sai com os nomes de embarque
// resolvidos e a capacidade restante.
#[utoipa::path(
    get,
    path = "/api/admin/tours",
    tag = "Tours",
    params(TourListQuery),
    responses(
        (status = 200, description = "Passeios no intervalo", body = Vec<TourView>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Query(query): Query<TourListQuery>,
) -> Result<Json<Vec<TourView>>, AppError> {
    let store = app_state.store.read().await;

    let views = store
        .tours
        .list(&query)
        .into_iter()
        .map(|tour| {
            let pickup_names = store.tours.resolve_pickup_names(&tour, &store.pickups);
            let remaining = tour.remaining_capacity();
            TourView {
                tour,
                pickup_names,
                remaining,
            }
        })
        .collect();

    Ok(Json(views))
}

// Passo de intenção do protocolo de confirmação: o console busca o passeio
// e exibe o título antes de confirmar a exclusão.
#[utoipa::path(
    get,
    path = "/api/admin/tours/{id}",
    tag = "Tours",
    params(("id" = Uuid, Path, description = "Id do passeio")),
    responses(
        (status = 200, description = "Passeio encontrado", body = Tour),
        (status = 404, description = "Passeio não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, AppError> {
    let store = app_state.store.read().await;
    let tour = store.tours.get(id).cloned().ok_or(AppError::TourNotFound)?;

    Ok(Json(tour))
}

#[utoipa::path(
    post,
    path = "/api/admin/tours",
    tag = "Tours",
    request_body = CreateTourPayload,
    responses(
        (status = 201, description = "Passeio criado", body = Tour),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Json(payload): Json<CreateTourPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let mut store = app_state.store.write().await;
    let created = store.tours.create(payload);

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/api/admin/tours/{id}",
    tag = "Tours",
    params(("id" = Uuid, Path, description = "Id do passeio")),
    request_body = UpdateTourPayload,
    responses(
        (status = 200, description = "Passeio atualizado", body = Tour),
        (status = 404, description = "Passeio não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTourPayload>,
) -> Result<Json<Tour>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let mut store = app_state.store.write().await;
    let updated = store.tours.update(id, payload)?;

    Ok(Json(updated))
}

// Exclusão sem cascata: reservas do passeio permanecem, com referência órfã.
#[utoipa::path(
    delete,
    path = "/api/admin/tours/{id}",
    tag = "Tours",
    params(("id" = Uuid, Path, description = "Id do passeio")),
    responses(
        (status = 200, description = "Passeio removido", body = Tour),
        (status = 404, description = "Passeio não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, AppError> {
    let mut store = app_state.store.write().await;
    let removed = store.tours.delete(id)?;

    Ok(Json(removed))
}
