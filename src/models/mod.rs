//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados que espelham as entidades
//! servidas pela API de reservas, além do estado de campo de formulário.

pub mod form;
pub mod hotel;
pub mod package;
pub mod reservation;
pub mod user;
