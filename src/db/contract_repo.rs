// src/db/contract_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::contracts::{Contract, ContractFilter},
};

#[derive(Clone)]
pub struct ContractRepository {
    pool: SqlitePool,
}

impl ContractRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Contract>, AppError> {
        let maybe_contract = sqlx::query_as::<_, Contract>(
            r#"
            SELECT id, total_amount, due_amount, created, signed, client_id
            FROM contracts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_contract)
    }

    pub async fn list(&self, filter: ContractFilter) -> Result<Vec<Contract>, AppError> {
        let mut sql = String::from(
            "SELECT id, total_amount, due_amount, created, signed, client_id FROM contracts",
        );
        let mut clauses: Vec<&str> = Vec::new();
        if filter.not_signed {
            clauses.push("signed = FALSE");
        }
        if filter.not_paid {
            clauses.push("due_amount > 0");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let contracts = sqlx::query_as::<_, Contract>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(contracts)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        total_amount: f64,
        due_amount: f64,
        signed: bool,
        client_id: i64,
        created: DateTime<Utc>,
    ) -> Result<Contract, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let contract = sqlx::query_as::<_, Contract>(
            r#"
            INSERT INTO contracts (total_amount, due_amount, created, signed, client_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, total_amount, due_amount, created, signed, client_id
            "#,
        )
        .bind(total_amount)
        .bind(due_amount)
        .bind(created)
        .bind(signed)
        .bind(client_id)
        .fetch_one(executor)
        .await?;

        Ok(contract)
    }

    // `client_id` é imutável: a referência ao dono nunca é reescrita.
    pub async fn update<'e, E>(&self, executor: E, contract: &Contract) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            UPDATE contracts
            SET total_amount = ?, due_amount = ?, signed = ?
            WHERE id = ?
            "#,
        )
        .bind(contract.total_amount)
        .bind(contract.due_amount)
        .bind(contract.signed)
        .bind(contract.id)
        .execute(executor)
        .await?;

        Ok(())
    }

    // Os eventos do contrato caem em cascata (ON DELETE CASCADE).
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("DELETE FROM contracts WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
