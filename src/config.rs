// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;

use crate::{
    services::{
        auth::AuthService,
        booking::BookingService,
        line::{LineNotifier, NoopNotifier, Notifier},
    },
    store::{self, SharedStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub auth_service: AuthService,
    pub booking_service: BookingService,
    pub http_client: reqwest::Client,
    pub imgur_client_id: Option<String>,
}

impl AppState {
    // A assinatura retorna um Result: se a configuração falhar, a aplicação
    // não deve iniciar.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definida")?;
        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH")
            .context("ADMIN_PASSWORD_HASH (hash bcrypt) deve ser definida")?;

        let http_client = reqwest::Client::new();

        // Sem token da LINE, as notificações viram no-ops logados.
        let notifier: Arc<dyn Notifier> = match env::var("LINE_CHANNEL_TOKEN") {
            Ok(token) if !token.is_empty() => {
                tracing::info!("✅ Notificações LINE habilitadas");
                Arc::new(LineNotifier::new(http_client.clone(), token))
            }
            _ => {
                tracing::warn!("⚠️ LINE_CHANNEL_TOKEN ausente; notificações desabilitadas");
                Arc::new(NoopNotifier)
            }
        };

        let imgur_client_id = env::var("IMGUR_CLIENT_ID").ok().filter(|v| !v.is_empty());

        Ok(Self::from_parts(
            store::shared(),
            jwt_secret,
            admin_password_hash,
            notifier,
            http_client,
            imgur_client_id,
        ))
    }

    // --- Monta o gráfico de dependências ---
    // Também é o ponto de entrada dos testes de integração, que injetam o
    // store e o notifier que quiserem.
    pub fn from_parts(
        store: SharedStore,
        jwt_secret: String,
        admin_password_hash: String,
        notifier: Arc<dyn Notifier>,
        http_client: reqwest::Client,
        imgur_client_id: Option<String>,
    ) -> Self {
        let auth_service = AuthService::new(jwt_secret, admin_password_hash);
        let booking_service = BookingService::new(store.clone(), notifier);

        Self {
            store,
            auth_service,
            booking_service,
            http_client,
            imgur_client_id,
        }
    }
}
