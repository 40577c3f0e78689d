//! DTOs de requisição e resposta da API
//!
//! Este módulo contém os corpos JSON trocados com a API de reservas.

pub mod auth_dto;
pub mod reservation_dto;
