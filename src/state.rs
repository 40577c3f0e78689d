//! Estado de sessão e de busca
//!
//! Este módulo define a sessão autenticada como um objeto explícito e
//! injetável, em vez de acesso ambiente a um armazenamento global. O
//! ciclo de vida do token é login → ativo → limpo em logout ou 401.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::models::package::TravelPackage;
use crate::services::catalog_filter::{compute_visible_packages, FilterCriteria};

/// Token de autenticação emitido pela API.
///
/// O conteúdo é opaco: o cliente apenas o anexa às requisições.
#[derive(Clone, Debug)]
pub struct AuthToken {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(token: String, email: String, expires_in_hours: i64) -> Self {
        Self {
            token,
            email,
            expires_at: Utc::now() + Duration::hours(expires_in_hours),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Sessão autenticada compartilhada entre os colaboradores da API
#[derive(Clone, Default)]
pub struct SessionState {
    token: Arc<RwLock<Option<AuthToken>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda o token após um login bem-sucedido
    pub async fn store(&self, token: String, email: String, expires_in_hours: i64) {
        log::info!("💾 Sessão iniciada para '{}'", email);
        let mut guard = self.token.write().await;
        *guard = Some(AuthToken::new(token, email, expires_in_hours));
    }

    /// Token atual, se a sessão ainda estiver ativa
    pub async fn bearer_token(&self) -> Option<String> {
        let guard = self.token.read().await;
        match guard.as_ref() {
            Some(token) if !token.is_expired() => Some(token.token.clone()),
            _ => None,
        }
    }

    pub async fn is_active(&self) -> bool {
        self.bearer_token().await.is_some()
    }

    /// Limpa a credencial, em logout ou ao receber 401
    pub async fn clear(&self) {
        let mut guard = self.token.write().await;
        if guard.take().is_some() {
            log::info!("🔒 Sessão encerrada");
        }
    }
}

/// Sessão de busca da página de pacotes.
///
/// Guarda o catálogo carregado e os critérios correntes. Cada busca
/// recebe um número de geração; uma resposta que chega depois de os
/// critérios mudarem carrega uma geração antiga e é descartada, então
/// uma requisição atrasada nunca sobrescreve estado mais novo.
#[derive(Debug, Default)]
pub struct SearchSession {
    catalog: Vec<TravelPackage>,
    pub criteria: FilterCriteria,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca o início de uma busca e devolve a geração correspondente
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Aceita a resposta apenas se ela ainda for a busca corrente
    pub fn accept_catalog(&mut self, generation: u64, packages: Vec<TravelPackage>) -> bool {
        if generation != self.generation {
            log::debug!(
                "resposta atrasada descartada (geração {} de {})",
                generation,
                self.generation
            );
            return false;
        }
        self.catalog = packages;
        true
    }

    pub fn catalog(&self) -> &[TravelPackage] {
        &self.catalog
    }

    /// Lista visível recalculada do zero a partir do estado atual
    pub fn visible(&self) -> Vec<TravelPackage> {
        compute_visible_packages(&self.catalog, &self.criteria)
    }
}
