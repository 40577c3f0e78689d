//! Núcleo da agência de viagens
//!
//! Este crate implementa a lógica da aplicação de reservas que consome a
//! API remota: validação e máscara de campos, filtro e ordenação do
//! catálogo de pacotes, cálculo de preço de reserva com cupom e o cliente
//! HTTP com sessão autenticada. A camada de apresentação fica fora daqui.

pub mod client;
pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
