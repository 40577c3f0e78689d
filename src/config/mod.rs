//! Configuração do projeto
//!
//! Este módulo contém a configuração carregada das variáveis de ambiente.

pub mod environment;

pub use environment::*;
