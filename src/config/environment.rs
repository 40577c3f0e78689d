//! Configuração de variáveis de ambiente
//!
//! Este módulo carrega a configuração do ambiente, com valores padrão
//! de desenvolvimento quando a variável não está definida.

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// URL base da API de reservas
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Validade da sessão após o login
    pub session_hours: i64,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            api_base_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
            session_hours: env::var("SESSION_HOURS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(24),
        }
    }

    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar se estamos em modo produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
