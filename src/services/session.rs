// src/services/session.rs

use std::path::PathBuf;

use anyhow::Context;
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::{
    common::error::AppError,
    models::auth::{Claims, Role},
};

/// Identidade resolvida a partir do token de sessão em cache.
/// Todas as decisões de autorização partem deste valor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub role: Role,
}

/// Cache local de sessão: um único arquivo com um token assinado.
/// Sobrescrito a cada login (uma sessão ativa por vez), lido no início
/// de todos os comandos exceto o próprio login.
#[derive(Clone)]
pub struct SessionStore {
    token_path: PathBuf,
    jwt_secret: String,
}

impl SessionStore {
    pub fn new(token_path: impl Into<PathBuf>, jwt_secret: impl Into<String>) -> Self {
        Self {
            token_path: token_path.into(),
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Grava o token emitido pelo login, sobrescrevendo qualquer sessão anterior.
    pub fn save(&self, token: &str) -> Result<(), AppError> {
        std::fs::write(&self.token_path, token)
            .with_context(|| {
                format!(
                    "Falha ao gravar o cache de token em {}",
                    self.token_path.display()
                )
            })
            .map_err(AppError::from)
    }

    /// Resolve o ator atual a partir do token em cache.
    /// Arquivo ausente, assinatura inválida ou expiração vencida são
    /// indistinguíveis para o usuário: todos pedem novo login.
    pub fn resolve_actor(&self) -> Result<Actor, AppError> {
        let token =
            std::fs::read_to_string(&self.token_path).map_err(|_| AppError::Unauthenticated)?;

        let token_data = decode::<Claims>(
            token.trim(),
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthenticated)?;

        Ok(Actor {
            id: token_data.claims.sub,
            role: token_data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "segredo-de-teste";

    fn token_with_exp(exp_offset_secs: i64) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: 42,
            role: Role::Sales,
            iat: now.timestamp() as usize,
            exp: (now.timestamp() + exp_offset_secs) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn save_then_resolve_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".token"), SECRET);

        store.save(&token_with_exp(3600)).unwrap();
        let actor = store.resolve_actor().unwrap();
        assert_eq!(actor.id, 42);
        assert_eq!(actor.role, Role::Sales);
    }

    #[test]
    fn missing_file_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".token"), SECRET);
        assert!(matches!(
            store.resolve_actor(),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn expired_token_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".token"), SECRET);

        // Duas horas no passado, bem além da folga padrão de validação.
        store.save(&token_with_exp(-7200)).unwrap();
        assert!(matches!(
            store.resolve_actor(),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn tampered_token_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".token"), SECRET);

        let mut token = token_with_exp(3600);
        token.push('x');
        store.save(&token).unwrap();
        assert!(matches!(
            store.resolve_actor(),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn login_overwrites_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".token"), SECRET);

        store.save(&token_with_exp(-7200)).unwrap();
        store.save(&token_with_exp(3600)).unwrap();
        assert!(store.resolve_actor().is_ok());
    }
}
