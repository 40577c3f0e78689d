//! Cálculo do preço de reserva
//!
//! Deriva o detalhamento exibido antes do checkout a partir do pacote
//! escolhido, do quarto e do número de viajantes. O cálculo é puro e
//! síncrono; o percentual de desconto só chega aqui depois de confirmado
//! pela API (ver o fluxo de cupom).

use crate::models::reservation::ReservationPricing;

/// Entrada do cálculo de preço
#[derive(Debug, Clone)]
pub struct PricingInput {
    pub package_price: f64,
    pub tax: f64,
    pub travelers: u32,
    pub room_rate_per_night: f64,
    pub duration_days: u32,
    /// Percentual confirmado; zero sem cupom aplicado
    pub discount_percent: f64,
}

/// Calcula o detalhamento da reserva.
///
/// A hospedagem cobre `duration - 1` noites (a volta não pernoita) e o
/// desconto incide sobre base, hospedagem e taxa.
pub fn calculate(input: &PricingInput) -> ReservationPricing {
    let travelers = f64::from(input.travelers);
    let nights = f64::from(input.duration_days.saturating_sub(1));

    let base_cost = input.package_price * travelers;
    let accommodation_cost = input.room_rate_per_night * nights * travelers;
    let subtotal = base_cost + accommodation_cost + input.tax;
    let discount = to_cents(subtotal * input.discount_percent / 100.0);

    ReservationPricing {
        base_cost,
        accommodation_cost,
        tax: input.tax,
        discount,
        total: to_cents(subtotal - discount),
    }
}

/// Arredonda para centavos
fn to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
