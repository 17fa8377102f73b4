// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

/// Monta o router completo. Tudo sob /api/admin (menos o login) fica atrás
/// do guard de bearer token.
pub fn app(app_state: AppState) -> Router {
    // Rota de autenticação (pública)
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    let reservation_routes = Router::new()
        .route(
            "/reservations",
            get(handlers::reservations::list).post(handlers::reservations::create),
        )
        .route(
            "/reservations/{id}",
            get(handlers::reservations::get_by_id).patch(handlers::reservations::update_status),
        )
        .route("/price-preview", post(handlers::reservations::price_preview));

    let tour_routes = Router::new()
        .route(
            "/tours",
            get(handlers::tours::list).post(handlers::tours::create),
        )
        .route(
            "/tours/{id}",
            get(handlers::tours::get_by_id)
                .patch(handlers::tours::update)
                .delete(handlers::tours::delete),
        );

    let pickup_routes = Router::new()
        .route(
            "/pickups",
            get(handlers::pickups::list).post(handlers::pickups::create),
        )
        .route(
            "/pickups/{id}",
            get(handlers::pickups::get_by_id)
                .patch(handlers::pickups::update)
                .delete(handlers::pickups::delete),
        );

    let image_routes = Router::new().route("/images/upload", post(handlers::images::upload));

    // Rotas protegidas pelo middleware de autenticação; o login entra
    // depois do layer e por isso fica de fora do guard.
    let admin_routes = Router::new()
        .merge(reservation_routes)
        .merge(tour_routes)
        .merge(pickup_routes)
        .merge(image_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ))
        .merge(auth_routes);

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/admin", admin_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
