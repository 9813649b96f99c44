// src/services/contracts.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{ClientRepository, ContractRepository},
    models::{
        auth::Role,
        contracts::{Contract, ContractFilter},
    },
    services::{guard::require_role, session::Actor},
};

#[derive(Clone)]
pub struct ContractService {
    contract_repo: ContractRepository,
    client_repo: ClientRepository,
    pool: SqlitePool,
}

impl ContractService {
    pub fn new(
        contract_repo: ContractRepository,
        client_repo: ClientRepository,
        pool: SqlitePool,
    ) -> Self {
        Self {
            contract_repo,
            client_repo,
            pool,
        }
    }

    /// Cria um contrato para um cliente existente. O valor devido gravado é
    /// o informado; na ausência dele, assume o valor total.
    pub async fn create(
        &self,
        actor: &Actor,
        client_id: i64,
        total_amount: Option<f64>,
        due_amount: Option<f64>,
        signed: bool,
    ) -> Result<Contract, AppError> {
        require_role(&[Role::Management], actor)?;

        self.client_repo
            .find_by_id(client_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum cliente encontrado com o ID informado."))?;

        let total_amount = total_amount.unwrap_or(0.0);
        let due_amount = due_amount.unwrap_or(total_amount);
        validate_amounts(total_amount, due_amount)?;

        let mut tx = self.pool.begin().await?;
        let contract = self
            .contract_repo
            .create(&mut *tx, total_amount, due_amount, signed, client_id, Utc::now())
            .await?;
        tx.commit().await?;

        Ok(contract)
    }

    /// Atualização parcial dos valores; `signed` é sempre sobrescrito com o
    /// valor recebido — é o único campo sem semântica parcial.
    pub async fn update(
        &self,
        actor: &Actor,
        contract_id: i64,
        total_amount: Option<f64>,
        due_amount: Option<f64>,
        signed: bool,
    ) -> Result<Contract, AppError> {
        require_role(&[Role::Management, Role::Sales], actor)?;

        let mut contract = self
            .contract_repo
            .find_by_id(contract_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum contrato encontrado com o ID informado."))?;

        // Cadeia de posse resolvida por consultas explícitas:
        // contrato -> cliente -> responsável comercial.
        if actor.role == Role::Sales {
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
        }

        if let Some(total) = total_amount {
            contract.total_amount = total;
        }
        if let Some(due) = due_amount {
            contract.due_amount = due;
        }
        // A invariante vale para o par resultante, inclusive quando só o
        // total diminui e o devido fica como estava.
        validate_amounts(contract.total_amount, contract.due_amount)?;

        contract.signed = signed;

        let mut tx = self.pool.begin().await?;
        self.contract_repo.update(&mut *tx, &contract).await?;
        tx.commit().await?;

        Ok(contract)
    }

    // Os eventos do contrato caem em cascata.
    pub async fn delete(&self, actor: &Actor, contract_id: i64) -> Result<(), AppError> {
        require_role(&[Role::Management], actor)?;

        self.contract_repo
            .find_by_id(contract_id)
            .await?
            .ok_or(AppError::NotFound("Nenhum contrato encontrado com o ID informado."))?;

        let mut tx = self.pool.begin().await?;
        self.contract_repo.delete(&mut *tx, contract_id).await?;
        tx.commit().await?;

        Ok(())
    }

    // A listagem é aberta; os filtros são restritos ao perfil comercial.
    pub async fn list(
        &self,
        actor: &Actor,
        filter: ContractFilter,
    ) -> Result<Vec<Contract>, AppError> {
        if !filter.is_empty() {
            require_role(&[Role::Sales], actor)?;
        }
        self.contract_repo.list(filter).await
    }
}

fn validate_amounts(total_amount: f64, due_amount: f64) -> Result<(), AppError> {
    if total_amount < 0.0 {
        return Err(AppError::Validation(
            "O valor total não pode ser negativo.".to_string(),
        ));
    }
    if due_amount < 0.0 {
        return Err(AppError::Validation(
            "O valor devido não pode ser negativo.".to_string(),
        ));
    }
    if due_amount > total_amount {
        return Err(AppError::Validation(
            "O valor devido não pode ser maior que o valor total.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_within_bounds_pass() {
        assert!(validate_amounts(1000.0, 0.0).is_ok());
        assert!(validate_amounts(1000.0, 1000.0).is_ok());
        assert!(validate_amounts(0.0, 0.0).is_ok());
    }

    #[test]
    fn negative_or_excess_amounts_fail() {
        assert!(matches!(
            validate_amounts(-5.0, 0.0),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_amounts(100.0, -1.0),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_amounts(100.0, 150.0),
            Err(AppError::Validation(_))
        ));
    }
}
