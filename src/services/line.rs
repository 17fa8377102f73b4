// src/services/line.rs

use async_trait::async_trait;
use serde_json::json;

use crate::common::error::AppError;

const LINE_MESSAGING_API: &str = "https://api.line.me/v2/bot/message/push";

/// Canal de notificação ao cliente final.
///
/// O serviço de booking só conhece este trait; a implementação real fala com
/// a LINE Messaging API e a nula é usada quando não há token configurado
/// (e nos testes).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_cancellation(
        &self,
        line_user_id: &str,
        tour_title: &str,
        date: &str,
    ) -> Result<(), AppError>;
}

pub struct LineNotifier {
    client: reqwest::Client,
    channel_token: String,
}

impl LineNotifier {
    pub fn new(client: reqwest::Client, channel_token: String) -> Self {
        Self {
            client,
            channel_token,
        }
    }

    async fn push(&self, line_user_id: &str, message: String) -> Result<(), AppError> {
        let payload = json!({
            "to": line_user_id,
            "messages": [{ "type": "text", "text": message }],
        });

        let response = self
            .client
            .post(LINE_MESSAGING_API)
            .bearer_auth(&self.channel_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("LINE: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "LINE respondeu {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    async fn notify_cancellation(
        &self,
        line_user_id: &str,
        tour_title: &str,
        date: &str,
    ) -> Result<(), AppError> {
        let message = format!(
            "予約をキャンセルしました\n\nツアー名：{}\n日付：{}\n\nご利用ありがとうございました",
            tour_title, date
        );
        self.push(line_user_id, message).await
    }
}

/// Implementação nula: registra e segue em frente.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify_cancellation(
        &self,
        line_user_id: &str,
        tour_title: &str,
        _date: &str,
    ) -> Result<(), AppError> {
        tracing::debug!(
            "Notificação de cancelamento suprimida (sem LINE_CHANNEL_TOKEN): {} / {}",
            line_user_id,
            tour_title
        );
        Ok(())
    }
}
