//! Criação de reserva e pagamento
//!
//! Este módulo monta o payload da reserva a partir do detalhamento de
//! preço e envia os dois passos do checkout. Falhas viram mensagens
//! recuperáveis; não há retry automático, o usuário reenvia quando
//! quiser.

use crate::client::BookingApiClient;
use crate::dto::reservation_dto::{CreateReservationRequest, PaymentCard, PaymentReceipt, PaymentRequest};
use crate::models::hotel::RoomType;
use crate::models::package::TravelPackage;
use crate::models::reservation::{Reservation, ReservationPricing};
use crate::services::pricing::{self, PricingInput};
use crate::utils::errors::{bad_request_error, validation_error, AppResult};
use crate::utils::validation;

/// Pedido de reserva montado na tela de checkout
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub package: TravelPackage,
    pub room: RoomType,
    pub travelers: u32,
    /// Percentual vindo do fluxo de cupom; zero sem cupom confirmado
    pub discount_percent: f64,
    pub payment: PaymentCard,
}

/// Serviço de reserva e pagamento
pub struct ReservationService {
    client: BookingApiClient,
}

impl ReservationService {
    pub fn new(client: BookingApiClient) -> Self {
        Self { client }
    }

    /// Detalhamento exibido antes do envio
    pub fn quote(&self, request: &BookingRequest) -> ReservationPricing {
        pricing::calculate(&PricingInput {
            package_price: request.package.price,
            tax: request.package.tax,
            travelers: request.travelers,
            room_rate_per_night: request.room.rate_per_night,
            duration_days: request.package.duration_days,
            discount_percent: request.discount_percent,
        })
    }

    /// Cria a reserva e envia o pagamento em seguida.
    ///
    /// Um 401 sobe intacto para derrubar a sessão; as demais falhas viram
    /// a mensagem do passo que falhou.
    pub async fn book(
        &self,
        request: &BookingRequest,
    ) -> AppResult<(Reservation, PaymentReceipt)> {
        if validation::validate_positive(request.travelers).is_err() {
            return Err(validation_error("travelers", "Informe ao menos um viajante"));
        }
        if let Err(error) = validation::validate_card_number(&request.payment.number) {
            return Err(bad_request_error(&validation::error_message(&error)));
        }
        if let Err(error) = validation::validate_card_expiry(&request.payment.expiry) {
            return Err(bad_request_error(&validation::error_message(&error)));
        }

        let quote = self.quote(request);
        log::info!(
            "📦 Criando reserva do pacote {} para {} viajantes (total R$ {:.2})",
            request.package.id,
            request.travelers,
            quote.total
        );

        let reservation = match self
            .client
            .create_reservation(&CreateReservationRequest {
                package_id: request.package.id,
                room_type_id: request.room.id,
                travelers: request.travelers,
                pricing: quote.clone(),
            })
            .await
        {
            Ok(reservation) => reservation,
            Err(error) if error.requires_reauth() => return Err(error),
            Err(error) => {
                log::error!("❌ Erro ao criar reserva: {}", error);
                return Err(bad_request_error("Erro ao criar reserva. Tente novamente."));
            }
        };

        log::info!("💳 Enviando pagamento da reserva {}", reservation.id);
        let receipt = match self
            .client
            .submit_payment(&PaymentRequest {
                reservation_id: reservation.id,
                amount: quote.total,
                card: request.payment.clone(),
            })
            .await
        {
            Ok(receipt) => receipt,
            Err(error) if error.requires_reauth() => return Err(error),
            Err(error) => {
                log::error!("❌ Erro ao processar pagamento: {}", error);
                return Err(bad_request_error(
                    "Erro ao processar pagamento. Tente novamente.",
                ));
            }
        };

        log::info!("✅ Reserva {} confirmada", reservation.id);
        Ok((reservation, receipt))
    }
}
