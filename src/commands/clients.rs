// src/commands/clients.rs

use clap::Subcommand;
use tabled::Tabled;

use crate::{
    common::error::AppError,
    config::AppState,
    models::clients::{Client, CreateClientPayload, UpdateClientPayload},
    output::{self, display_opt},
};

#[derive(Subcommand)]
pub enum ClientCommands {
    /// Cria um cliente sob responsabilidade do comercial autenticado
    Create {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mail: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
    },

    /// Lista todos os clientes
    List,

    /// Atualiza um cliente (somente o comercial responsável)
    Update {
        client_id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mail: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        /// Reatribui o responsável comercial
        #[arg(long)]
        contact_id: Option<i64>,
    },

    /// Remove um cliente e, em cascata, seus contratos e eventos
    Delete { client_id: i64 },
}

#[derive(Tabled)]
struct ClientRow {
    id: i64,
    name: String,
    mail: String,
    phone: String,
    company: String,
    created: String,
    updated: String,
    contact_id: String,
}

impl From<Client> for ClientRow {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: display_opt(&client.name),
            mail: display_opt(&client.mail),
            phone: display_opt(&client.phone),
            company: display_opt(&client.company),
            created: client.created.format("%Y-%m-%d %H:%M").to_string(),
            updated: client
                .updated
                .map(|u| u.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            contact_id: display_opt(&client.contact_id),
        }
    }
}

pub async fn execute(command: ClientCommands, state: &AppState) -> Result<(), AppError> {
    let actor = state.session.resolve_actor()?;

    match command {
        ClientCommands::Create {
            name,
            mail,
            phone,
            company,
        } => {
            state
                .client_service
                .create(
                    &actor,
                    CreateClientPayload {
                        name,
                        mail,
                        phone,
                        company,
                    },
                )
                .await?;
            output::print_success("Cliente criado com sucesso");
        }
        ClientCommands::List => {
            let clients = state.client_service.list().await?;
            output::print_table(clients.into_iter().map(ClientRow::from).collect::<Vec<_>>());
        }
        ClientCommands::Update {
            client_id,
            name,
            mail,
            phone,
            company,
            contact_id,
        } => {
            state
                .client_service
                .update(
                    &actor,
                    UpdateClientPayload {
                        client_id,
                        name,
                        mail,
                        phone,
                        company,
                        contact_id,
                    },
                )
                .await?;
            output::print_success("Cliente atualizado com sucesso");
        }
        ClientCommands::Delete { client_id } => {
            state.client_service.delete(&actor, client_id).await?;
            output::print_success("Cliente removido com sucesso");
        }
    }

    Ok(())
}
