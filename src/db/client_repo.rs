// src/db/client_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::clients::Client};

#[derive(Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let maybe_client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, mail, phone, company, created, updated, contact_id
            FROM clients
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_client)
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, mail, phone, company, created, updated, contact_id
            FROM clients
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: Option<&str>,
        mail: Option<&str>,
        phone: Option<&str>,
        company: Option<&str>,
        contact_id: i64,
        created: DateTime<Utc>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, mail, phone, company, created, contact_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, mail, phone, company, created, updated, contact_id
            "#,
        )
        .bind(name)
        .bind(mail)
        .bind(phone)
        .bind(company)
        .bind(created)
        .bind(contact_id)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    // Persiste a linha inteira; o serviço já mesclou os campos fornecidos.
    pub async fn update<'e, E>(&self, executor: E, client: &Client) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            UPDATE clients
            SET name = ?, mail = ?, phone = ?, company = ?, updated = ?, contact_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&client.name)
        .bind(&client.mail)
        .bind(&client.phone)
        .bind(&client.company)
        .bind(client.updated)
        .bind(client.contact_id)
        .bind(client.id)
        .execute(executor)
        .await?;

        Ok(())
    }

    // Os contratos do cliente (e os eventos deles) caem em cascata
    // pelas chaves estrangeiras (ON DELETE CASCADE).
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
