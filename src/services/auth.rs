// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, Role},
    services::session::SessionStore,
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    session: SessionStore,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, session: SessionStore, jwt_secret: String) -> Self {
        Self {
            user_repo,
            session,
            jwt_secret,
        }
    }

    /// Autentica por usuário/senha e grava o token de sessão no cache local.
    /// A falha é uniforme: não revela se o usuário ou a senha estava errado.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação (custosa e em tempo constante) em uma
        // thread separada
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(user.id, user.role)?;
        self.session.save(&token)
    }

    /// Gera o hash com salt de uma senha, fora do runtime assíncrono.
    pub async fn hash_password(password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let hashed =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    fn create_token(&self, user_id: i64, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(1);

        let claims = Claims {
            sub: user_id,
            role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        // Usa '?' para um tratamento de erro mais limpo
        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
