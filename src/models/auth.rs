// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Perfil de acesso de um usuário. Gravado como TEXT no banco.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, clap::ValueEnum,
)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Management,
    Sales,
    Support,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Management => write!(f, "management"),
            Role::Sales => write!(f, "sales"),
            Role::Support => write!(f, "support"),
        }
    }
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub role: Role,
}

// Dados para criação de um novo usuário
#[derive(Debug, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "O nome de usuário não pode ser vazio."))]
    pub username: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    pub role: Role,
}

// Dados para atualização parcial de um usuário existente
#[derive(Debug, Validate)]
pub struct UpdateUserPayload {
    pub user_id: i64,
    #[validate(length(min = 1, message = "O nome de usuário não pode ser vazio."))]
    pub username: Option<String>,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,
    pub role: Option<Role>,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // Subject (ID do usuário)
    pub role: Role, // Perfil embutido no token, lido a cada comando
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}
