use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante corresponde a uma classe de desfecho do comando:
// autenticação, rejeição de domínio ou falha inesperada.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Validation(String),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token não encontrado, inválido ou expirado")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Este nome de usuário já está em uso")]
    UsernameTaken,

    #[error("{0}")]
    InvalidState(&'static str),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Mensagem final exibida ao usuário no terminal.
    pub fn user_message(&self) -> String {
        match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut lines = vec!["Um ou mais campos são inválidos:".to_string()];
                for (field, field_errors) in errors.field_errors() {
                    for e in field_errors {
                        if let Some(msg) = &e.message {
                            lines.push(format!("  {field}: {msg}"));
                        }
                    }
                }
                lines.join("\n")
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials => "Credenciais inválidas.".to_string(),
            AppError::Unauthenticated => {
                "Token não encontrado, inválido ou expirado. Faça login novamente.".to_string()
            }
            AppError::Forbidden(msg) | AppError::NotFound(msg) | AppError::InvalidState(msg) => {
                (*msg).to_string()
            }
            AppError::UsernameTaken => "Este nome de usuário já está em uso.".to_string(),

            // Todos os outros erros (DatabaseError, InternalError...) são
            // inesperados: o detalhe vai para o log/telemetria, não para cá.
            _ => "Ocorreu um erro inesperado.".to_string(),
        }
    }

    /// Código de saída do processo, consistente por classe de desfecho.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => 2,
            AppError::DatabaseError(_)
            | AppError::InternalError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => 70,
            _ => 1,
        }
    }

    /// Erros inesperados são reportados ao coletor de telemetria antes da saída.
    pub fn is_unexpected(&self) -> bool {
        self.exit_code() == 70
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_outcome_class() {
        assert_eq!(AppError::Unauthenticated.exit_code(), 2);
        assert_eq!(AppError::InvalidCredentials.exit_code(), 2);
        assert_eq!(AppError::UsernameTaken.exit_code(), 1);
        assert_eq!(AppError::NotFound("x").exit_code(), 1);
        assert_eq!(AppError::Forbidden("x").exit_code(), 1);
        assert_eq!(AppError::Validation("x".into()).exit_code(), 1);
        assert_eq!(AppError::InvalidState("x").exit_code(), 1);
        assert_eq!(
            AppError::InternalError(anyhow::anyhow!("boom")).exit_code(),
            70
        );
    }

    #[test]
    fn unexpected_errors_are_flagged_for_telemetry() {
        assert!(AppError::DatabaseError(sqlx::Error::PoolClosed).is_unexpected());
        assert!(!AppError::Unauthenticated.is_unexpected());
        assert!(!AppError::Forbidden("x").is_unexpected());
    }
}
