// src/db/event_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::events::{Event, EventFields, EventFilter},
};

const EVENT_COLUMNS: &str =
    r#"id, name, start, "end", location, attendees, notes, support_id, contract_id"#;

#[derive(Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?");
        let maybe_event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_event)
    }

    // `mine` filtra pelo suporte designado; `no_support` pelos sem designação.
    // Os dois filtros são exclusivos por perfil, mas combiná-los ainda
    // produz uma consulta válida (interseção).
    pub async fn list(&self, filter: EventFilter, actor_id: i64) -> Result<Vec<Event>, AppError> {
        let mut sql = format!("SELECT {EVENT_COLUMNS} FROM events");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.no_support {
            clauses.push("support_id IS NULL");
        }
        if filter.mine {
            clauses.push("support_id = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let mut query = sqlx::query_as::<_, Event>(&sql);
        if filter.mine {
            query = query.bind(actor_id);
        }

        let events = query.fetch_all(&self.pool).await?;
        Ok(events)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        fields: &EventFields,
        contract_id: i64,
    ) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            r#"
            INSERT INTO events (name, start, "end", location, attendees, notes, support_id, contract_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {EVENT_COLUMNS}
            "#
        );
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(&fields.name)
            .bind(fields.start)
            .bind(fields.end)
            .bind(&fields.location)
            .bind(fields.attendees)
            .bind(&fields.notes)
            .bind(fields.support_id)
            .bind(contract_id)
            .fetch_one(executor)
            .await?;

        Ok(event)
    }

    // `contract_id` é imutável: a referência ao dono nunca é reescrita.
    pub async fn update<'e, E>(&self, executor: E, event: &Event) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            UPDATE events
            SET name = ?, start = ?, "end" = ?, location = ?, attendees = ?, notes = ?, support_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&event.name)
        .bind(event.start)
        .bind(event.end)
        .bind(&event.location)
        .bind(event.attendees)
        .bind(&event.notes)
        .bind(event.support_id)
        .bind(event.id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
