// src/services/clients.rs

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{ClientRepository, UserRepository},
    models::{
        auth::Role,
        clients::{Client, CreateClientPayload, UpdateClientPayload},
    },
    services::{guard::require_role, session::Actor},
};

#[derive(Clone)]
pub struct ClientService {
    client_repo: ClientRepository,
    user_repo: UserRepository,
    pool: SqlitePool,
}

impl ClientService {
    pub fn new(client_repo: ClientRepository, user_repo: UserRepository, pool: SqlitePool) -> Self {
        Self {
            client_repo,
            user_repo,
            pool,
        }
    }

    // Na criação o cliente é sempre do próprio ator: não há checagem de posse.
    pub async fn create(
        &self,
        actor: &Actor,
        payload: CreateClientPayload,
    ) -> Result<Client, AppError> {
        require_role(&[Role::Sales], actor)?;
        payload.validate()?;

        let mut tx = self.pool.begin().await?;
        let client = self
            .client_repo
            .create(
                &mut *tx,
                payload.name.as_deref(),
                payload.mail.as_deref(),
                payload.phone.as_deref(),
                payload.company.as_deref(),
                actor.id,
                Utc::now(),
            )
            .await?;
        tx.commit().await?;

        Ok(client)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        payload: UpdateClientPayload,
    ) -> Result<Client, AppError> {
        require_role(&[Role::Sales], actor)?;
        payload.validate()?;

        let mut client = self
            .client_repo
            .find_by_id(payload.client_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum cliente encontrado com o ID informado."))?;

        if client.contact_id != Some(actor.id) {
            return Err(AppError::Forbidden("Você não é o responsável por este cliente."));
        }

        // Semântica parcial: somente os campos fornecidos sobrescrevem.
        if payload.name.is_some() {
            client.name = payload.name;
        }
        if payload.mail.is_some() {
            client.mail = payload.mail;
        }
        if payload.phone.is_some() {
            client.phone = payload.phone;
        }
        if payload.company.is_some() {
            client.company = payload.company;
        }

        // A reatribuição de responsável exige que o usuário alvo exista.
        if let Some(contact_id) = payload.contact_id {
            self.user_repo
                .find_by_id(contact_id)
                .await?
                .ok_or(AppError::NotFound("Nenhum contato encontrado com o ID informado."))?;
            client.contact_id = Some(contact_id);
        }

        client.updated = Some(Utc::now());

        let mut tx = self.pool.begin().await?;
        self.client_repo.update(&mut *tx, &client).await?;
        tx.commit().await?;

        Ok(client)
    }

    // A posse é exigida também na remoção, simétrica à atualização.
    // Os contratos do cliente (e seus eventos) caem em cascata.
    pub async fn delete(&self, actor: &Actor, client_id: i64) -> Result<(), AppError> {
        require_role(&[Role::Sales], actor)?;

        let client = self
            .client_repo
            .find_by_id(client_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum cliente encontrado com o ID informado."))?;

        if client.contact_id != Some(actor.id) {
            return Err(AppError::Forbidden("Você não é o responsável por este cliente."));
        }

        let mut tx = self.pool.begin().await?;
        self.client_repo.delete(&mut *tx, client_id).await?;
        tx.commit().await?;

        Ok(())
    }

    // Leitura sem restrição de perfil, sem ordenação garantida.
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.client_repo.list().await
    }
}
