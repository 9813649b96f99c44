// src/services/users.rs

use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{CreateUserPayload, Role, UpdateUserPayload, User},
    services::{auth::AuthService, guard::require_role, session::Actor},
};

// O "credential store": toda a gestão de identidades, restrita à gestão.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    pool: SqlitePool,
}

impl UserService {
    pub fn new(user_repo: UserRepository, pool: SqlitePool) -> Self {
        Self { user_repo, pool }
    }

    pub async fn create(&self, actor: &Actor, payload: CreateUserPayload) -> Result<User, AppError> {
        require_role(&[Role::Management], actor)?;
        payload.validate()?;

        // Checagem prévia para uma mensagem limpa; a restrição UNIQUE do
        // banco continua sendo a garantia final.
        if self
            .user_repo
            .find_by_username(&payload.username)
            .await?
            .is_some()
        {
            return Err(AppError::UsernameTaken);
        }

        let password_hash = AuthService::hash_password(&payload.password).await?;

        let mut tx = self.pool.begin().await?;
        let user = self
            .user_repo
            .create(&mut *tx, &payload.username, &password_hash, payload.role)
            .await?;
        tx.commit().await?;

        Ok(user)
    }

    pub async fn update(&self, actor: &Actor, payload: UpdateUserPayload) -> Result<User, AppError> {
        require_role(&[Role::Management], actor)?;
        payload.validate()?;

        let mut user = self
            .user_repo
            .find_by_id(payload.user_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum usuário encontrado com o ID informado."))?;

        // O conflito só vale contra OUTRO usuário: reenviar o próprio nome
        // não é erro.
        if let Some(username) = payload.username {
            if let Some(other) = self.user_repo.find_by_username(&username).await? {
                if other.id != user.id {
                    return Err(AppError::UsernameTaken);
                }
            }
            user.username = username;
        }

        // A senha só é re-hasheada se uma nova for fornecida.
        if let Some(password) = payload.password {
            user.password_hash = AuthService::hash_password(&password).await?;
        }

        if let Some(role) = payload.role {
            user.role = role;
        }

        let mut tx = self.pool.begin().await?;
        self.user_repo.update(&mut *tx, &user).await?;
        tx.commit().await?;

        Ok(user)
    }

    // As referências Client.contact_id / Event.support_id são anuladas pelo
    // banco (SET NULL); nada dependente é removido.
    pub async fn delete(&self, actor: &Actor, user_id: i64) -> Result<(), AppError> {
        require_role(&[Role::Management], actor)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum usuário encontrado com o ID informado."))?;

        let mut tx = self.pool.begin().await?;
        self.user_repo.delete(&mut *tx, user_id).await?;
        tx.commit().await?;

        Ok(())
    }

    // Leitura sem restrição de perfil.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list().await
    }
}
