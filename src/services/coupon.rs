//! Fluxo de cupom de desconto
//!
//! O desconto nunca é aplicado por comparação local de strings: o código
//! digitado é confirmado na API antes de entrar no cálculo de preço.
//! Editar o campo depois de um cupom aplicado derruba a aplicação até a
//! próxima confirmação, o que evita exibir desconto velho no meio da
//! digitação.

use async_trait::async_trait;
use uuid::Uuid;

use crate::utils::errors::AppResult;
use crate::utils::validation;

/// Resultado da confirmação remota de um cupom
#[derive(Debug, Clone)]
pub struct CouponConfirmation {
    pub valid: bool,
    pub discount_percent: f64,
    pub message: Option<String>,
}

/// Porta de confirmação remota de cupons.
///
/// Implementada pelo cliente da API; em teste, por um stub local.
#[async_trait]
pub trait CouponGateway {
    async fn confirm_coupon(&self, package_id: Uuid, code: &str) -> AppResult<CouponConfirmation>;
}

/// Estados do fluxo de cupom na interface
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CouponState {
    #[default]
    Idle,
    Checking,
    Applied { code: String, discount_percent: f64 },
    Rejected { message: String },
}

/// Fluxo de aplicação de cupom de um formulário de reserva
#[derive(Debug, Default)]
pub struct CouponFlow {
    state: CouponState,
}

impl CouponFlow {
    pub fn new() -> Self {
        Self {
            state: CouponState::Idle,
        }
    }

    pub fn state(&self) -> &CouponState {
        &self.state
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.state, CouponState::Applied { .. })
    }

    /// Percentual a usar no cálculo de preço; zero fora de `Applied`
    pub fn discount_percent(&self) -> f64 {
        match &self.state {
            CouponState::Applied {
                discount_percent, ..
            } => *discount_percent,
            _ => 0.0,
        }
    }

    /// Mensagem de recusa pendente, se houver
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            CouponState::Rejected { message } => Some(message),
            _ => None,
        }
    }

    /// Qualquer edição do campo derruba o cupom aplicado e limpa a recusa
    pub fn on_field_change(&mut self) {
        match self.state {
            CouponState::Applied { .. } | CouponState::Rejected { .. } => {
                self.state = CouponState::Idle;
            }
            _ => {}
        }
    }

    /// Confirma o código digitado na API e atualiza o estado
    pub async fn submit<G: CouponGateway>(
        &mut self,
        gateway: &G,
        package_id: Uuid,
        entered_code: &str,
    ) -> &CouponState {
        let code = entered_code.trim();
        if code.is_empty() {
            self.state = CouponState::Rejected {
                message: "Informe um cupom".to_string(),
            };
            return &self.state;
        }

        self.state = CouponState::Checking;
        log::info!("🎟️ Validando cupom '{}' para o pacote {}", code, package_id);

        match gateway.confirm_coupon(package_id, code).await {
            Ok(confirmation) if confirmation.valid => {
                // percentual fora de 0..=100 indica resposta corrompida
                if validation::validate_range(confirmation.discount_percent, 0.0, 100.0).is_err() {
                    log::warn!(
                        "❌ Percentual de desconto inesperado: {}",
                        confirmation.discount_percent
                    );
                    self.state = CouponState::Rejected {
                        message: "Erro ao validar cupom. Tente novamente.".to_string(),
                    };
                } else {
                    log::info!(
                        "✅ Cupom aplicado: {}% de desconto",
                        confirmation.discount_percent
                    );
                    self.state = CouponState::Applied {
                        code: code.to_string(),
                        discount_percent: confirmation.discount_percent,
                    };
                }
            }
            Ok(confirmation) => {
                let message = confirmation
                    .message
                    .unwrap_or_else(|| "Cupom inválido".to_string());
                log::warn!("❌ Cupom recusado: {}", message);
                self.state = CouponState::Rejected { message };
            }
            Err(error) => {
                log::error!("❌ Erro ao validar cupom: {}", error);
                self.state = CouponState::Rejected {
                    message: "Erro ao validar cupom. Tente novamente.".to_string(),
                };
            }
        }
        &self.state
    }
}
