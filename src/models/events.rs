// src/models/events.rs

use chrono::NaiveDate;
use serde::Serialize;

// Representa um evento vindo do banco de dados.
// `support_id` é o usuário de suporte designado; fica nulo se ele for removido.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub location: Option<String>,
    pub attendees: Option<i64>,
    pub notes: Option<String>,
    pub support_id: Option<i64>,
    pub contract_id: i64,
}

// Campos mutáveis de um evento, usados na criação e na atualização parcial.
#[derive(Debug, Default)]
pub struct EventFields {
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub location: Option<String>,
    pub attendees: Option<i64>,
    pub notes: Option<String>,
    pub support_id: Option<i64>,
}

impl EventFields {
    /// Verifica se algum campo além de `support_id` foi fornecido.
    /// A gestão só pode alterar a designação de suporte — qualquer outro
    /// campo fornecido rejeita o comando inteiro.
    pub fn has_non_support_field(&self) -> bool {
        self.name.is_some()
            || self.start.is_some()
            || self.end.is_some()
            || self.location.is_some()
            || self.attendees.is_some()
            || self.notes.is_some()
    }
}

// Filtros do comando de listagem
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter {
    pub no_support: bool, // restrito à gestão
    pub mine: bool,       // restrito ao suporte: eventos designados ao ator
}
