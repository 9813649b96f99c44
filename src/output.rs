// src/output.rs

use colored::*;
use tabled::{Table, Tabled};

/// Imprime uma coleção como tabela no terminal.
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "Nenhum resultado".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Imprime uma mensagem de sucesso
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Imprime uma mensagem de erro
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Formata um campo opcional para exibição tabular.
pub fn display_opt<T: core::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
