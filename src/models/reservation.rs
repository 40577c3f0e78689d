use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Detalhamento de preço exibido antes do checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationPricing {
    /// Preço do pacote multiplicado pelo número de viajantes
    pub base_cost: f64,
    /// Diária do quarto pelas noites da viagem, por viajante
    pub accommodation_cost: f64,
    pub tax: f64,
    /// Zero enquanto nenhum cupom foi confirmado pela API
    pub discount: f64,
    pub total: f64,
}

/// Estado de uma reserva criada na API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Reserva devolvida pela API após a criação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub package_id: Uuid,
    pub room_type_id: Uuid,
    pub travelers: u32,
    pub pricing: ReservationPricing,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}
