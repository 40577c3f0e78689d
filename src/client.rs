//! Cliente HTTP da API de reservas
//!
//! Este módulo concentra todas as chamadas à API remota: pacotes,
//! hotéis, cupons, reservas, pagamento e perfil. O token da sessão é
//! anexado a cada requisição autenticada; um 401 limpa a sessão e sobe
//! como `AppError::Unauthorized` para a camada de apresentação levar o
//! usuário de volta ao login.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::reservation_dto::{
    ApiResponse, CouponValidationRequest, CouponValidationResponse, CreateReservationRequest,
    PaymentReceipt, PaymentRequest,
};
use crate::models::hotel::{Amenity, Hotel, RoomType};
use crate::models::package::TravelPackage;
use crate::models::reservation::Reservation;
use crate::models::user::UserProfile;
use crate::services::coupon::{CouponConfirmation, CouponGateway};
use crate::state::SessionState;
use crate::utils::errors::{AppError, AppResult};

/// Cliente HTTP da API de reservas
#[derive(Clone)]
pub struct BookingApiClient {
    client: Client,
    config: EnvironmentConfig,
    session: SessionState,
}

impl BookingApiClient {
    pub fn new(config: EnvironmentConfig, session: SessionState) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// Autentica e guarda o token opaco na sessão
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(LoginResponse::error("E-mail ou senha inválidos".to_string()));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!("HTTP {}", response.status())));
        }

        let login: LoginResponse = response.json().await?;
        if let Some(token) = &login.token {
            self.session
                .store(
                    token.clone(),
                    request.email.clone(),
                    self.config.session_hours,
                )
                .await;
        }
        Ok(login)
    }

    /// Lista os pacotes ativos, com busca textual opcional no servidor
    pub async fn fetch_active_packages(
        &self,
        search: Option<&str>,
    ) -> AppResult<Vec<TravelPackage>> {
        let path = match search.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => format!("/packages?active=true&q={}", urlencoding::encode(term)),
            None => "/packages?active=true".to_string(),
        };
        let packages: Vec<TravelPackage> = self.get_json(&path).await?;

        // entradas inconsistentes do catálogo não chegam à interface
        let (consistent, broken): (Vec<_>, Vec<_>) =
            packages.into_iter().partition(TravelPackage::is_consistent);
        for package in &broken {
            log::warn!("⚠️ Pacote {} descartado por dados inconsistentes", package.id);
        }
        Ok(consistent)
    }

    pub async fn fetch_package_detail(&self, package_id: Uuid) -> AppResult<TravelPackage> {
        self.get_json(&format!("/packages/{}", package_id)).await
    }

    pub async fn fetch_hotels(&self, destination_city: &str) -> AppResult<Vec<Hotel>> {
        let path = format!("/hotels?city={}", urlencoding::encode(destination_city));
        self.get_json(&path).await
    }

    pub async fn fetch_room_types(&self, hotel_id: Uuid) -> AppResult<Vec<RoomType>> {
        self.get_json(&format!("/hotels/{}/rooms", hotel_id)).await
    }

    /// Busca as comodidades de vários hotéis em lotes de cinco
    pub async fn fetch_amenities_batch(
        &self,
        hotel_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, Vec<Amenity>>> {
        let mut results = HashMap::new();

        for chunk in hotel_ids.chunks(5) {
            let futures: Vec<_> = chunk
                .iter()
                .map(|hotel_id| {
                    let hotel_id = *hotel_id;
                    async move {
                        let amenities: AppResult<Vec<Amenity>> = self
                            .get_json(&format!("/hotels/{}/amenities", hotel_id))
                            .await;
                        (hotel_id, amenities)
                    }
                })
                .collect();

            for (hotel_id, result) in futures::future::join_all(futures).await {
                match result {
                    Ok(amenities) => {
                        results.insert(hotel_id, amenities);
                    }
                    Err(error) if error.requires_reauth() => return Err(error),
                    Err(error) => {
                        // um hotel sem comodidades não derruba a página
                        log::warn!("⚠️ Comodidades do hotel {} indisponíveis: {}", hotel_id, error);
                    }
                }
            }
        }
        Ok(results)
    }

    pub async fn fetch_profile(&self) -> AppResult<UserProfile> {
        self.get_json("/users/me").await
    }

    pub async fn update_profile(&self, profile: &UserProfile) -> AppResult<UserProfile> {
        let request = self.client.put(self.url("/users/me")).json(profile);
        let response = self.authorize(request).await.send().await?;
        self.parse(response).await
    }

    pub async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> AppResult<Reservation> {
        self.post_json("/reservations", request).await
    }

    pub async fn submit_payment(&self, request: &PaymentRequest) -> AppResult<PaymentReceipt> {
        self.post_json("/payments", request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self.client.get(self.url(path));
        let response = self.authorize(request).await.send().await?;
        self.parse(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.authorize(request).await.send().await?;
        self.parse(response).await
    }

    async fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.bearer_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Desembrulha o envelope padrão da API e trata 401 globalmente
    async fn parse<T: DeserializeOwned>(&self, response: reqwest::Response) -> AppResult<T> {
        if response.status() == StatusCode::UNAUTHORIZED {
            self.session.clear().await;
            return Err(AppError::Unauthorized("sessão rejeitada pela API".to_string()));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!("HTTP {}", response.status())));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            return Err(AppError::ExternalApi(
                envelope
                    .message
                    .unwrap_or_else(|| "resposta sem detalhe".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| AppError::ExternalApi("resposta sem corpo".to_string()))
    }
}

#[async_trait]
impl CouponGateway for BookingApiClient {
    async fn confirm_coupon(&self, package_id: Uuid, code: &str) -> AppResult<CouponConfirmation> {
        let request = CouponValidationRequest {
            package_id,
            code: code.to_string(),
        };
        let response: CouponValidationResponse =
            self.post_json("/coupons/validate", &request).await?;
        Ok(CouponConfirmation {
            valid: response.valid,
            discount_percent: response.discount_percent.unwrap_or(0.0),
            message: response.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_montagem_de_url_com_busca() {
        let config = EnvironmentConfig {
            environment: "test".to_string(),
            api_base_url: "http://localhost:3000/api".to_string(),
            request_timeout_secs: 5,
            session_hours: 1,
        };
        let client = BookingApiClient::new(config, SessionState::new()).unwrap();
        assert_eq!(
            client.url("/packages?active=true"),
            "http://localhost:3000/api/packages?active=true"
        );
    }
}
