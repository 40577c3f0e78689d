//! Services module
//!
//! Este módulo contém a lógica de negócio da aplicação: o filtro e a
//! ordenação do catálogo, o cálculo de preço de reserva, o fluxo de
//! cupom e a orquestração de reserva com pagamento.

pub mod catalog_filter;
pub mod coupon;
pub mod pricing;
pub mod reservation;

pub use catalog_filter::*;
pub use pricing::*;
