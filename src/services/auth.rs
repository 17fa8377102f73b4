// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{common::error::AppError, models::auth::Claims};

// Tokens valem 24 horas, como no console original.
const TOKEN_TTL_HOURS: i64 = 24;

/// Autenticação do operador único do console.
///
/// A senha do administrador vive como hash bcrypt na configuração; o login
/// troca a senha por um JWT (HS256) usado como bearer em todas as chamadas
/// seguintes.
#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
    admin_password_hash: String,
}

impl AuthService {
    pub fn new(jwt_secret: String, admin_password_hash: String) -> Self {
        Self {
            jwt_secret,
            admin_password_hash,
        }
    }

    pub async fn login(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let hash = self.admin_password_hash.clone();

        // bcrypt é caro; executa a verificação fora do executor async.
        let is_valid = tokio::task::spawn_blocking(move || verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token()
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    fn create_token(&self) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now.timestamp() as usize,
            exp: (now + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?;
        Ok(token)
    }
}
