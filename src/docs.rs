// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Reservations ---
        handlers::reservations::list,
        handlers::reservations::get_by_id,
        handlers::reservations::create,
        handlers::reservations::update_status,
        handlers::reservations::price_preview,

        // --- Tours ---
        handlers::tours::list,
        handlers::tours::get_by_id,
        handlers::tours::create,
        handlers::tours::update,
        handlers::tours::delete,

        // --- Pickups ---
        handlers::pickups::list,
        handlers::pickups::get_by_id,
        handlers::pickups::create,
        handlers::pickups::update,
        handlers::pickups::delete,

        // --- Images ---
        handlers::images::upload,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Tours ---
            models::tour::TourStatus,
            models::tour::Tour,
            models::tour::TourView,
            models::tour::CreateTourPayload,
            models::tour::UpdateTourPayload,

            // --- Reservations ---
            models::reservation::ReservationStatus,
            models::reservation::StatusFilter,
            models::reservation::Reservation,
            models::reservation::CreateReservationPayload,
            models::reservation::UpdateReservationStatusPayload,
            models::reservation::ReservationSummary,
            models::reservation::ReservationListResponse,

            // --- Pickups ---
            models::pickup::PickupPoint,
            models::pickup::CreatePickupPayload,
            models::pickup::UpdatePickupPayload,

            // --- Pricing ---
            services::pricing::PricePreviewPayload,
            services::pricing::PriceBreakdown,

            // --- Images ---
            handlers::images::ImageUploadResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação do administrador"),
        (name = "Reservations", description = "Livro-razão de reservas: filtros, agregados e entrada manual"),
        (name = "Tours", description = "Catálogo de passeios"),
        (name = "Pickups", description = "Registro de pontos de embarque"),
        (name = "Images", description = "Upload de imagens (Imgur)")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme("api_jwt", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
    }
}
