//! `gestor` — CLI de gestão comercial com controle de acesso por perfil.
//!
//! Quatro entidades (usuário, cliente, contrato, evento) ligadas por uma
//! cadeia de posse: o comercial responsável pelo cliente responde pelos
//! contratos do cliente e pela criação dos eventos; o suporte designado
//! responde pelo evento. Cada comando resolve o ator a partir do token de
//! sessão em cache, passa pela checagem de perfil e de posse e executa a
//! mutação em uma transação própria.

pub mod commands;
pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod output;
pub mod services;
