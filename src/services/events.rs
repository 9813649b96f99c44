// src/services/events.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{ClientRepository, ContractRepository, EventRepository, UserRepository},
    models::{
        auth::Role,
        events::{Event, EventFields, EventFilter},
    },
    services::{guard::require_role, session::Actor},
};

#[derive(Clone)]
pub struct EventService {
    event_repo: EventRepository,
    contract_repo: ContractRepository,
    client_repo: ClientRepository,
    user_repo: UserRepository,
    pool: SqlitePool,
}

impl EventService {
    pub fn new(
        event_repo: EventRepository,
        contract_repo: ContractRepository,
        client_repo: ClientRepository,
        user_repo: UserRepository,
        pool: SqlitePool,
    ) -> Self {
        Self {
            event_repo,
            contract_repo,
            client_repo,
            user_repo,
            pool,
        }
    }

    /// Cria um evento contra um contrato ASSINADO, pelo comercial responsável
    /// pelo cliente do contrato.
    pub async fn create(
        &self,
        actor: &Actor,
        contract_id: i64,
        fields: EventFields,
    ) -> Result<Event, AppError> {
        require_role(&[Role::Sales], actor)?;

        let contract = self
            .contract_repo
            .find_by_id(contract_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum contrato encontrado com o ID informado."))?;

        // Cadeia de posse: contrato -> cliente -> responsável comercial.
        let client = self
            .client_repo
            .find_by_id(contract.client_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum cliente encontrado com o ID informado."))?;
        if client.contact_id != Some(actor.id) {
            return Err(AppError::Forbidden(
                "Você não é o responsável pelo cliente deste contrato.",
            ));
        }

        if !contract.signed {
            return Err(AppError::InvalidState("Este contrato ainda não foi assinado."));
        }

        validate_dates(fields.start, fields.end)?;
        validate_attendees(fields.attendees)?;

        if let Some(support_id) = fields.support_id {
            self.ensure_support_user(support_id).await?;
        }

        let mut tx = self.pool.begin().await?;
        let event = self.event_repo.create(&mut *tx, &fields, contract_id).await?;
        tx.commit().await?;

        Ok(event)
    }

    /// Atualização com políticas distintas por perfil: a gestão só pode
    /// redesignar o suporte (qualquer outro campo rejeita o comando inteiro);
    /// o suporte pode alterar tudo, mas só nos próprios eventos.
    pub async fn update(
        &self,
        actor: &Actor,
        event_id: i64,
        fields: EventFields,
    ) -> Result<Event, AppError> {
        require_role(&[Role::Management, Role::Support], actor)?;

        let mut event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum evento encontrado com o ID informado."))?;

        if actor.role == Role::Management && fields.has_non_support_field() {
            return Err(AppError::Forbidden(
                "A gestão só pode alterar o responsável de suporte do evento.",
            ));
        }
        if actor.role == Role::Support && event.support_id != Some(actor.id) {
            return Err(AppError::Forbidden("Você não é o responsável por este evento."));
        }

        // Semântica parcial: somente os campos fornecidos sobrescrevem.
        if fields.name.is_some() {
            event.name = fields.name;
        }
        if fields.start.is_some() {
            event.start = fields.start;
        }
        if fields.end.is_some() {
            event.end = fields.end;
        }
        if fields.location.is_some() {
            event.location = fields.location;
        }
        if fields.attendees.is_some() {
            validate_attendees(fields.attendees)?;
            event.attendees = fields.attendees;
        }
        if fields.notes.is_some() {
            event.notes = fields.notes;
        }

        // As datas valem para o par RESULTANTE (novo-ou-existente de cada lado).
        validate_dates(event.start, event.end)?;

        if let Some(support_id) = fields.support_id {
            self.ensure_support_user(support_id).await?;
            event.support_id = Some(support_id);
        }

        let mut tx = self.pool.begin().await?;
        self.event_repo.update(&mut *tx, &event).await?;
        tx.commit().await?;

        Ok(event)
    }

    pub async fn delete(&self, actor: &Actor, event_id: i64) -> Result<(), AppError> {
        require_role(&[Role::Management], actor)?;

        self.event_repo
            .find_by_id(event_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum evento encontrado com o ID informado."))?;

        let mut tx = self.pool.begin().await?;
        self.event_repo.delete(&mut *tx, event_id).await?;
        tx.commit().await?;

        Ok(())
    }

    // A listagem é aberta; cada filtro é restrito a um perfil.
    pub async fn list(&self, actor: &Actor, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        if filter.no_support {
            require_role(&[Role::Management], actor)?;
        }
        if filter.mine {
            require_role(&[Role::Support], actor)?;
        }
        self.event_repo.list(filter, actor.id).await
    }

    // A designação de suporte só aceita usuários existentes COM o perfil
    // de suporte.
    async fn ensure_support_user(&self, support_id: i64) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_id(support_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum usuário encontrado com o ID informado."))?;
        if user.role != Role::Support {
            return Err(AppError::Validation(
                "O usuário informado não tem o perfil de suporte.".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(AppError::Validation(
                "A data de início não pode ser posterior à data de término.".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_attendees(attendees: Option<i64>) -> Result<(), AppError> {
    if let Some(attendees) = attendees {
        if attendees < 0 {
            return Err(AppError::Validation(
                "O número de participantes não pode ser negativo.".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn ordered_or_partial_dates_pass() {
        assert!(validate_dates(Some(date("2024-01-01")), Some(date("2024-01-02"))).is_ok());
        assert!(validate_dates(Some(date("2024-01-01")), Some(date("2024-01-01"))).is_ok());
        assert!(validate_dates(Some(date("2024-01-01")), None).is_ok());
        assert!(validate_dates(None, Some(date("2024-01-01"))).is_ok());
        assert!(validate_dates(None, None).is_ok());
    }

    #[test]
    fn inverted_dates_fail() {
        assert!(matches!(
            validate_dates(Some(date("2024-01-02")), Some(date("2024-01-01"))),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn negative_attendees_fail() {
        assert!(validate_attendees(Some(0)).is_ok());
        assert!(validate_attendees(None).is_ok());
        assert!(matches!(
            validate_attendees(Some(-1)),
            Err(AppError::Validation(_))
        ));
    }
}
