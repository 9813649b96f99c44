// src/config.rs

use std::{env, str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    db::{ClientRepository, ContractRepository, EventRepository, UserRepository},
    services::{
        auth::AuthService, clients::ClientService, contracts::ContractService,
        events::EventService, session::SessionStore, users::UserService,
    },
};

// O estado compartilhado da aplicação: pool de conexões, sessão e serviços.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub session: SessionStore,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub client_service: ClientService,
    pub contract_service: ContractService,
    pub event_service: EventService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://gestor.db".to_string());
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definida")?;
        let token_path = env::var("TOKEN_PATH").unwrap_or_else(|_| ".token".to_string());

        // foreign_keys habilita as políticas de cascata/anulação do esquema.
        let connect_options = SqliteConnectOptions::from_str(&database_url)
            .context("DATABASE_URL inválida")?
            .create_if_missing(true)
            .foreign_keys(true);

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(connect_options)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::debug!("Conexão com o banco de dados estabelecida");

        Ok(Self::with_pool(db_pool, jwt_secret, token_path))
    }

    // --- Monta o grafo de dependências ---
    // Separado de `new` para que os testes montem o mesmo grafo sobre um
    // banco em memória.
    pub fn with_pool(db_pool: SqlitePool, jwt_secret: String, token_path: String) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let contract_repo = ContractRepository::new(db_pool.clone());
        let event_repo = EventRepository::new(db_pool.clone());

        let session = SessionStore::new(token_path, jwt_secret.clone());
        let auth_service = AuthService::new(user_repo.clone(), session.clone(), jwt_secret);
        let user_service = UserService::new(user_repo.clone(), db_pool.clone());
        let client_service =
            ClientService::new(client_repo.clone(), user_repo.clone(), db_pool.clone());
        let contract_service =
            ContractService::new(contract_repo.clone(), client_repo.clone(), db_pool.clone());
        let event_service = EventService::new(
            event_repo,
            contract_repo,
            client_repo,
            user_repo,
            db_pool.clone(),
        );

        Self {
            db_pool,
            session,
            auth_service,
            user_service,
            client_service,
            contract_service,
            event_service,
        }
    }
}
