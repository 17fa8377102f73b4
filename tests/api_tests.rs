// tests/api_tests.rs
//
// Testes de ponta a ponta do router, sem subir servidor: cada requisição
// passa pelo app via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend_admin::{config::AppState, routes, services::line::NoopNotifier, store};

const TEST_PASSWORD: &str = "admin";

fn test_app() -> Router {
    // custo bcrypt mínimo para os testes não demorarem
    let hash = bcrypt::hash(TEST_PASSWORD, 4).unwrap();
    let state = AppState::from_parts(
        store::shared(),
        "segredo-de-teste".to_string(),
        hash,
        Arc::new(NoopNotifier),
        reqwest::Client::new(),
        None,
    );
    routes::app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn login(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "password": TEST_PASSWORD }).to_string()))
        .unwrap();
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

async fn create_tour(app: &Router, token: &str, title: &str, capacity: u32) -> String {
    let payload = json!({
        "title": title,
        "date": "2026-03-15",
        "deadline": "2026-03-10",
        "capacity": capacity,
        "price": 12000.0,
        "status": "open",
    });
    let response = send(app, with_json("POST", "/api/admin/tours", token, &payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check() {
    let app = test_app();
    let response = send(
        &app,
        Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "password": "errada" }).to_string()))
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = test_app();

    let response = send(
        &app,
        Request::builder()
            .uri("/api/admin/pickups")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn pickup_crud_round_trip() {
    let app = test_app();
    let token = login(&app).await;

    // criação sem sortOrder: assume (quantidade + 1) e nasce ativo
    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/pickups",
            &token,
            &json!({ "name": "新宿駅 西口" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;
    assert_eq!(first["sortOrder"], json!(1));
    assert_eq!(first["active"], json!(true));

    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/pickups",
            &token,
            &json!({ "name": "東京駅 丸の内北口" }),
        ),
    )
    .await;
    let second = body_json(response).await;
    assert_eq!(second["sortOrder"], json!(2));

    // desativa o segundo; a lista activeOnly deve excluí-lo
    let id = second["id"].as_str().unwrap();
    let response = send(
        &app,
        with_json(
            "PATCH",
            &format!("/api/admin/pickups/{}", id),
            &token,
            &json!({ "active": false }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/api/admin/pickups?activeOnly=true", &token)).await;
    let active: Value = body_json(response).await;
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["name"], json!("新宿駅 西口"));

    // exclusão devolve o registro removido (nome para a confirmação)
    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/pickups/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let removed = body_json(response).await;
    assert_eq!(removed["name"], json!("東京駅 丸の内北口"));

    // segundo delete do mesmo id: 404
    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/pickups/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_pickup_name_is_a_validation_error() {
    let app = test_app();
    let token = login(&app).await;

    let response = send(
        &app,
        with_json("POST", "/api/admin/pickups", &token, &json!({ "name": "   " })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reservation_filters_and_summary() {
    let app = test_app();
    let token = login(&app).await;
    let tour_id = create_tour(&app, &token, "春の九州・温泉めぐり", 40).await;

    for (name, count, amount) in [
        ("山田 太郎", 2, 24000.0),
        ("佐藤 花子", 1, 12000.0),
        ("田中 キャンセル", 2, 24000.0),
    ] {
        let response = send(
            &app,
            with_json(
                "POST",
                "/api/admin/reservations",
                &token,
                &json!({ "tourId": tour_id, "name": name, "count": count, "amount": amount }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // cancela a terceira
    let response = send(&app, get("/api/admin/reservations", &token)).await;
    let all = body_json(response).await;
    let third_id = all["reservations"][2]["id"].as_str().unwrap().to_string();
    let response = send(
        &app,
        with_json(
            "PATCH",
            &format!("/api/admin/reservations/{}", third_id),
            &token,
            &json!({ "status": "cancelled" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // filtro por nome + status=all: as três, na ordem; totais sem a cancelada
    let response = send(
        &app,
        get(
            "/api/admin/reservations?tourName=%E6%B8%A9%E6%B3%89&status=all",
            &token,
        ),
    )
    .await;
    let body = body_json(response).await;
    let rows = body["reservations"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["status"], json!("cancelled"));
    assert_eq!(body["summary"]["peopleTotal"], json!(3));
    assert_eq!(body["summary"]["salesTotal"].as_f64(), Some(36000.0));

    // status=cancelled restringe a uma linha, com totais zerados
    let response = send(
        &app,
        get("/api/admin/reservations?status=cancelled", &token),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["reservations"].as_array().unwrap().len(), 1);
    assert_eq!(body["summary"]["peopleTotal"], json!(0));
}

#[tokio::test]
async fn manual_reservation_respects_tour_and_capacity() {
    let app = test_app();
    let token = login(&app).await;

    // passeio inexistente: 404 antes de qualquer mutação
    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/reservations",
            &token,
            &json!({
                "tourId": "00000000-0000-0000-0000-000000000000",
                "name": "山田 太郎",
                "count": 2,
                "amount": 24000.0
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // capacidade: 3 + 3 > 5
    let tour_id = create_tour(&app, &token, "東京湾ナイトクルーズ", 5).await;
    let payload = json!({ "tourId": tour_id, "name": "鈴木 一郎", "count": 3, "amount": 24000.0 });
    let response = send(&app, with_json("POST", "/api/admin/reservations", &token, &payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = send(&app, with_json("POST", "/api/admin/reservations", &token, &payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_group_is_a_validation_error() {
    let app = test_app();
    let token = login(&app).await;
    let tour_id = create_tour(&app, &token, "富士山日帰りバス", 45).await;

    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/reservations",
            &token,
            &json!({ "tourId": tour_id, "name": "山田 太郎", "count": 500, "amount": 24000.0 }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // erro de validação campo a campo, não o de capacidade
    let body = body_json(response).await;
    assert!(body["details"]["count"].is_array());
}

#[tokio::test]
async fn cancellation_is_one_way() {
    let app = test_app();
    let token = login(&app).await;
    let tour_id = create_tour(&app, &token, "富士山日帰りバス", 45).await;

    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/reservations",
            &token,
            &json!({ "tourId": tour_id, "name": "山田 太郎", "count": 2, "amount": 20000.0 }),
        ),
    )
    .await;
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        with_json(
            "PATCH",
            &format!("/api/admin/reservations/{}", id),
            &token,
            &json!({ "status": "cancelled" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // não existe "des-cancelar"
    let response = send(
        &app,
        with_json(
            "PATCH",
            &format!("/api/admin/reservations/{}", id),
            &token,
            &json!({ "status": "confirmed" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn tour_delete_is_returned_for_confirmation_and_spares_reservations() {
    let app = test_app();
    let token = login(&app).await;
    let tour_id = create_tour(&app, &token, "春の九州・温泉めぐり", 40).await;

    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/reservations",
            &token,
            &json!({ "tourId": tour_id, "name": "山田 太郎", "count": 2, "amount": 24000.0 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/tours/{}", tour_id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["title"],
        json!("春の九州・温泉めぐり")
    );

    // a reserva órfã continua listada, com o snapshot intacto
    let response = send(&app, get("/api/admin/reservations", &token)).await;
    let body = body_json(response).await;
    assert_eq!(body["reservations"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["reservations"][0]["tourName"],
        json!("春の九州・温泉めぐり")
    );
}

#[tokio::test]
async fn price_preview_adds_the_seat_upcharge() {
    let app = test_app();
    let token = login(&app).await;

    let response = send(
        &app,
        with_json(
            "POST",
            "/api/admin/price-preview",
            &token,
            &json!({ "passengers": 2, "pricePerPerson": 12000.0, "preferredSeats": 1 }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["basePrice"].as_f64(), Some(24000.0));
    assert_eq!(body["seatUpcharge"].as_f64(), Some(500.0));
    assert_eq!(body["total"].as_f64(), Some(24500.0));
}
