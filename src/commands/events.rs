// src/commands/events.rs

use chrono::NaiveDate;
use clap::Subcommand;
use tabled::Tabled;

use crate::{
    common::error::AppError,
    config::AppState,
    models::events::{Event, EventFields, EventFilter},
    output::{self, display_opt},
};

#[derive(Subcommand)]
pub enum EventCommands {
    /// Cria um evento contra um contrato assinado (somente o comercial
    /// responsável pelo cliente do contrato)
    Create {
        contract_id: i64,
        #[arg(long)]
        name: Option<String>,
        /// Data de início (AAAA-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Data de término (AAAA-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        attendees: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
        /// Usuário de suporte designado (deve ter perfil de suporte)
        #[arg(long)]
        support_id: Option<i64>,
    },

    /// Lista eventos; cada filtro é restrito a um perfil
    List {
        /// Somente eventos sem suporte designado (gestão)
        #[arg(long)]
        no_support: bool,
        /// Somente eventos designados a você (suporte)
        #[arg(long)]
        mine: bool,
    },

    /// Atualiza um evento: a gestão só redesigna o suporte; o suporte
    /// altera qualquer campo dos próprios eventos
    Update {
        event_id: i64,
        #[arg(long)]
        name: Option<String>,
        /// Data de início (AAAA-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Data de término (AAAA-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        attendees: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        support_id: Option<i64>,
    },

    /// Remove um evento (somente gestão)
    Delete { event_id: i64 },
}

#[derive(Tabled)]
struct EventRow {
    id: i64,
    name: String,
    start: String,
    end: String,
    location: String,
    attendees: String,
    notes: String,
    support_id: String,
    contract_id: i64,
}

impl From<Event> for EventRow {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: display_opt(&event.name),
            start: display_opt(&event.start),
            end: display_opt(&event.end),
            location: display_opt(&event.location),
            attendees: display_opt(&event.attendees),
            notes: display_opt(&event.notes),
            support_id: display_opt(&event.support_id),
            contract_id: event.contract_id,
        }
    }
}

pub async fn execute(command: EventCommands, state: &AppState) -> Result<(), AppError> {
    let actor = state.session.resolve_actor()?;

    match command {
        EventCommands::Create {
            contract_id,
            name,
            start,
            end,
            location,
            attendees,
            notes,
            support_id,
        } => {
            let fields = EventFields {
                name,
                start,
                end,
                location,
                attendees,
                notes,
                support_id,
            };
            state.event_service.create(&actor, contract_id, fields).await?;
            output::print_success("Evento criado com sucesso");
        }
        EventCommands::List { no_support, mine } => {
            let filter = EventFilter { no_support, mine };
            let events = state.event_service.list(&actor, filter).await?;
            output::print_table(events.into_iter().map(EventRow::from).collect::<Vec<_>>());
        }
        EventCommands::Update {
            event_id,
            name,
            start,
            end,
            location,
            attendees,
            notes,
            support_id,
        } => {
            let fields = EventFields {
                name,
                start,
                end,
                location,
                attendees,
                notes,
                support_id,
            };
            state.event_service.update(&actor, event_id, fields).await?;
            output::print_success("Evento atualizado com sucesso");
        }
        EventCommands::Delete { event_id } => {
            state.event_service.delete(&actor, event_id).await?;
            output::print_success("Evento removido com sucesso");
        }
    }

    Ok(())
}
