// src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gestor::{
    commands,
    common::{error::AppError, telemetry},
    config::AppState,
    output,
};

#[derive(Parser)]
#[command(name = "gestor")]
#[command(about = "CLI de gestão de clientes, contratos e eventos", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Autentica um usuário e grava o token de sessão no cache local
    Login { username: String, password: String },

    /// Gestão de usuários
    User {
        #[command(subcommand)]
        command: commands::users::UserCommands,
    },

    /// Gestão de clientes
    Client {
        #[command(subcommand)]
        command: commands::clients::ClientCommands,
    },

    /// Gestão de contratos
    Contract {
        #[command(subcommand)]
        command: commands::contracts::ContractCommands,
    },

    /// Gestão de eventos
    Event {
        #[command(subcommand)]
        command: commands::events::EventCommands,
    },
}

#[tokio::main]
async fn main() {
    // Logs vão para stderr para não poluir a saída tabular dos comandos.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        if err.is_unexpected() {
            tracing::error!("Erro inesperado: {err:?}");
            telemetry::report(&err).await;
        }
        output::print_error(&err.user_message());
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let state = AppState::new().await?;

    // Garante o esquema antes de qualquer comando.
    sqlx::migrate!()
        .run(&state.db_pool)
        .await
        .map_err(|e| anyhow::anyhow!("Falha ao rodar as migrações do banco de dados: {e}"))?;

    match cli.command {
        Commands::Login { username, password } => {
            state.auth_service.login(&username, &password).await?;
            output::print_success("Login efetuado com sucesso");
            Ok(())
        }
        Commands::User { command } => commands::users::execute(command, &state).await,
        Commands::Client { command } => commands::clients::execute(command, &state).await,
        Commands::Contract { command } => commands::contracts::execute(command, &state).await,
        Commands::Event { command } => commands::events::execute(command, &state).await,
    }
}
