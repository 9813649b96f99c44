pub mod client_repo;
pub mod contract_repo;
pub mod event_repo;
pub mod user_repo;

pub use client_repo::ClientRepository;
pub use contract_repo::ContractRepository;
pub use event_repo::EventRepository;
pub use user_repo::UserRepository;
