// src/models/clients.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

// Representa um cliente vindo do banco de dados.
// `contact_id` é o comercial responsável; fica nulo se o usuário for removido.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub mail: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub contact_id: Option<i64>,
}

// Dados para criação de um novo cliente
#[derive(Debug, Validate)]
pub struct CreateClientPayload {
    pub name: Option<String>,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub mail: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

// Dados para atualização parcial: somente os campos fornecidos
// sobrescrevem os valores existentes.
#[derive(Debug, Validate)]
pub struct UpdateClientPayload {
    pub client_id: i64,
    pub name: Option<String>,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub mail: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub contact_id: Option<i64>,
}
