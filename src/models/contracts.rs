// src/models/contracts.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

// Representa um contrato vindo do banco de dados.
// Invariante mantida pelos serviços: 0 <= due_amount <= total_amount.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Contract {
    pub id: i64,
    pub total_amount: f64,
    pub due_amount: f64,
    pub created: DateTime<Utc>,
    pub signed: bool,
    pub client_id: i64,
}

// Filtros do comando de listagem (restritos ao perfil comercial)
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractFilter {
    pub not_signed: bool,
    pub not_paid: bool,
}

impl ContractFilter {
    pub fn is_empty(&self) -> bool {
        !self.not_signed && !self.not_paid
    }
}
