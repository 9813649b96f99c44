// src/commands/contracts.rs

use clap::Subcommand;
use tabled::Tabled;

use crate::{
    common::error::AppError,
    config::AppState,
    models::contracts::{Contract, ContractFilter},
    output,
};

#[derive(Subcommand)]
pub enum ContractCommands {
    /// Cria um contrato para um cliente existente (somente gestão)
    Create {
        client_id: i64,
        #[arg(long)]
        total_amount: Option<f64>,
        /// Valor ainda devido; assume o valor total quando omitido
        #[arg(long)]
        due_amount: Option<f64>,
        /// Estado de assinatura do contrato
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        signed: bool,
    },

    /// Lista contratos; os filtros são restritos ao perfil comercial
    List {
        /// Somente contratos ainda não assinados
        #[arg(long)]
        not_signed: bool,
        /// Somente contratos com valor devido
        #[arg(long)]
        not_paid: bool,
    },

    /// Atualiza um contrato (gestão, ou o comercial responsável pelo cliente)
    Update {
        contract_id: i64,
        #[arg(long)]
        total_amount: Option<f64>,
        #[arg(long)]
        due_amount: Option<f64>,
        /// Sempre sobrescrito com o valor recebido (sem semântica parcial)
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        signed: bool,
    },

    /// Remove um contrato e, em cascata, seus eventos (somente gestão)
    Delete { contract_id: i64 },
}

#[derive(Tabled)]
struct ContractRow {
    id: i64,
    total_amount: f64,
    due_amount: f64,
    created: String,
    signed: bool,
    client_id: i64,
}

impl From<Contract> for ContractRow {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            total_amount: contract.total_amount,
            due_amount: contract.due_amount,
            created: contract.created.format("%Y-%m-%d %H:%M").to_string(),
            signed: contract.signed,
            client_id: contract.client_id,
        }
    }
}

pub async fn execute(command: ContractCommands, state: &AppState) -> Result<(), AppError> {
    let actor = state.session.resolve_actor()?;

    match command {
        ContractCommands::Create {
            client_id,
            total_amount,
            due_amount,
            signed,
        } => {
            state
                .contract_service
                .create(&actor, client_id, total_amount, due_amount, signed)
                .await?;
            output::print_success("Contrato criado com sucesso");
        }
        ContractCommands::List { not_signed, not_paid } => {
            let filter = ContractFilter { not_signed, not_paid };
            let contracts = state.contract_service.list(&actor, filter).await?;
            output::print_table(
                contracts
                    .into_iter()
                    .map(ContractRow::from)
                    .collect::<Vec<_>>(),
            );
        }
        ContractCommands::Update {
            contract_id,
            total_amount,
            due_amount,
            signed,
        } => {
            state
                .contract_service
                .update(&actor, contract_id, total_amount, due_amount, signed)
                .await?;
            output::print_success("Contrato atualizado com sucesso");
        }
        ContractCommands::Delete { contract_id } => {
            state.contract_service.delete(&actor, contract_id).await?;
            output::print_success("Contrato removido com sucesso");
        }
    }

    Ok(())
}
