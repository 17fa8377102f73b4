// src/handlers/images.rs

use axum::{extract::multipart::Multipart, extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{common::error::AppError, config::AppState, middleware::auth::AuthenticatedAdmin};

const IMGUR_UPLOAD_API: &str = "https://api.imgur.com/3/image";
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageUploadResponse {
    pub url: String,
}

// Recebe a imagem do editor de passeios e repassa ao Imgur; guardamos só a
// URL resultante no campo imageUrl do passeio.
#[utoipa::path(
    post,
    path = "/api/admin/images/upload",
    tag = "Images",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Imagem hospedada", body = ImageUploadResponse),
        (status = 400, description = "Arquivo ausente, grande demais ou de tipo não permitido"),
        (status = 502, description = "Falha no Imgur")
    ),
    security(("api_jwt" = []))
)]
pub async fn upload(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    mut multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, AppError> {
    let client_id = app_state
        .imgur_client_id
        .clone()
        .ok_or_else(|| AppError::Upstream("IMGUR_CLIENT_ID não configurado.".to_string()))?;

    // Procura o campo "image" do form-data.
    let mut image: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(format!("Multipart inválido: {}", e)))?
    {
        if field.name() == Some("image") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidUpload(format!("Falha lendo o arquivo: {}", e)))?;
            image = Some((file_name, bytes.to_vec()));
            break;
        }
    }

    let (file_name, bytes) = image.ok_or_else(|| {
        AppError::InvalidUpload("O campo 'image' é obrigatório no form-data.".to_string())
    })?;

    if file_name.is_empty() {
        return Err(AppError::InvalidUpload(
            "Nenhum arquivo selecionado.".to_string(),
        ));
    }

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::InvalidUpload(
            "Arquivo grande demais (máximo 10MB).".to_string(),
        ));
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::InvalidUpload(format!(
            "Tipo de arquivo inválido. Permitidos: {}.",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    // Repassa ao Imgur em base64, como a API deles espera.
    let payload = json!({
        "image": BASE64.encode(&bytes),
        "type": "base64",
        "name": file_name,
    });

    let response = app_state
        .http_client
        .post(IMGUR_UPLOAD_API)
        .header("Authorization", format!("Client-ID {}", client_id))
        .json(&payload)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Imgur: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "Imgur respondeu {}",
            response.status()
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("Resposta do Imgur ilegível: {}", e)))?;

    let url = body
        .get("data")
        .and_then(|d| d.get("link"))
        .and_then(|l| l.as_str())
        .ok_or_else(|| AppError::Upstream("Resposta do Imgur sem a URL.".to_string()))?;

    Ok(Json(ImageUploadResponse {
        url: url.to_string(),
    }))
}
