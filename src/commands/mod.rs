pub mod clients;
pub mod contracts;
pub mod events;
pub mod users;
