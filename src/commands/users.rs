// src/commands/users.rs

use clap::Subcommand;
use tabled::Tabled;

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{CreateUserPayload, Role, UpdateUserPayload, User},
    output,
};

#[derive(Subcommand)]
pub enum UserCommands {
    /// Cria um novo usuário (somente gestão)
    Create {
        username: String,
        password: String,
        #[arg(value_enum)]
        role: Role,
    },

    /// Lista todos os usuários
    List,

    /// Atualiza um usuário existente (somente gestão)
    Update {
        user_id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long, value_enum)]
        role: Option<Role>,
    },

    /// Remove um usuário (somente gestão); clientes e eventos que o
    /// referenciam ficam sem responsável, mas não são removidos
    Delete { user_id: i64 },
}

#[derive(Tabled)]
struct UserRow {
    id: i64,
    username: String,
    role: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.to_string(),
        }
    }
}

pub async fn execute(command: UserCommands, state: &AppState) -> Result<(), AppError> {
    let actor = state.session.resolve_actor()?;

    match command {
        UserCommands::Create {
            username,
            password,
            role,
        } => {
            state
                .user_service
                .create(
                    &actor,
                    CreateUserPayload {
                        username,
                        password,
                        role,
                    },
                )
                .await?;
            output::print_success("Usuário criado com sucesso");
        }
        UserCommands::List => {
            let users = state.user_service.list().await?;
            output::print_table(users.into_iter().map(UserRow::from).collect::<Vec<_>>());
        }
        UserCommands::Update {
            user_id,
            username,
            password,
            role,
        } => {
            state
                .user_service
                .update(
                    &actor,
                    UpdateUserPayload {
                        user_id,
                        username,
                        password,
                        role,
                    },
                )
                .await?;
            output::print_success("Usuário atualizado com sucesso");
        }
        UserCommands::Delete { user_id } => {
            state.user_service.delete(&actor, user_id).await?;
            output::print_success("Usuário removido com sucesso");
        }
    }

    Ok(())
}
