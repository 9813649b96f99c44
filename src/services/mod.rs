pub mod auth;
pub mod clients;
pub mod contracts;
pub mod events;
pub mod guard;
pub mod session;
pub mod users;
