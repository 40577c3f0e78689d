use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::reservation::ReservationPricing;

// Envelope padrão das respostas da API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

// Request de criação de reserva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub package_id: Uuid,
    pub room_type_id: Uuid,
    pub travelers: u32,
    /// Detalhamento calculado no cliente; a API reconfere os valores
    pub pricing: ReservationPricing,
}

/// Dados do cartão digitados no checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCard {
    pub holder_name: String,
    /// Somente dígitos, sem máscara
    pub number: String,
    /// Validade `MM/AA`
    pub expiry: String,
    pub cvv: String,
}

// Request de pagamento de uma reserva criada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub reservation_id: Uuid,
    pub amount: f64,
    pub card: PaymentCard,
}

// Comprovante devolvido pela API de pagamento
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub status: String,
}

// Request de confirmação de cupom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidationRequest {
    pub package_id: Uuid,
    pub code: String,
}

// Response de confirmação de cupom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidationResponse {
    pub valid: bool,
    pub discount_percent: Option<f64>,
    pub message: Option<String>,
}
